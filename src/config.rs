// config.rs
use anyhow::Result;
use std::env;

use crate::secret::Secret;
use crate::verifier::{SignatureEncoding, SignatureVerifier};

/// Integration settings, resolved once at startup by the embedding service.
#[derive(Debug, Clone)]
pub struct Config {
    pub webhook_secret: Secret,
    pub signature_encoding: SignatureEncoding,
    pub signature_prefix: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let webhook_secret = env::var("WEBHOOK_SECRET")
            .map_err(|_| anyhow::anyhow!("WEBHOOK_SECRET not set"))?;
        if webhook_secret.is_empty() {
            anyhow::bail!("WEBHOOK_SECRET is empty");
        }

        let signature_encoding = match env::var("SIGNATURE_ENCODING") {
            Ok(v) if v.eq_ignore_ascii_case("hex") => SignatureEncoding::Hex,
            Ok(v) if v.eq_ignore_ascii_case("base64") => SignatureEncoding::Base64,
            Ok(v) => anyhow::bail!("unsupported SIGNATURE_ENCODING: {}", v),
            Err(_) => SignatureEncoding::Hex,
        };

        let signature_prefix = env::var("SIGNATURE_PREFIX").ok().filter(|p| !p.is_empty());

        Ok(Config {
            webhook_secret: Secret::from(webhook_secret),
            signature_encoding,
            signature_prefix,
        })
    }

    /// Verifier configured for this integration's signature format.
    pub fn verifier(&self) -> SignatureVerifier {
        let verifier = SignatureVerifier::with_encoding(self.signature_encoding);
        match &self.signature_prefix {
            Some(prefix) => verifier.with_prefix(prefix.clone()),
            None => verifier,
        }
    }
}
