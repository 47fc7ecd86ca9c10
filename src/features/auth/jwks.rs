use jsonwebtoken::DecodingKey;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

#[derive(Debug, Clone, Deserialize)]
struct JwksDocument {
    keys: Vec<Jwk>,
}

#[derive(Debug, Clone, Deserialize)]
struct Jwk {
    kid: String,
    kty: String,
    n: String,
    e: String,
}

struct CachedKeys {
    by_kid: HashMap<String, DecodingKey>,
    refreshed_at: Instant,
}

impl CachedKeys {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.refreshed_at.elapsed() < ttl
    }
}

/// Fetches and caches the identity provider's JWKS document.
///
/// Keys are refreshed when the cache TTL expires or an unknown `kid` shows up
/// (key rotation). If a refresh fails and a stale cache exists, the stale keys
/// are kept so token validation survives a transient IdP outage.
pub struct JwksClient {
    jwks_url: String,
    client: reqwest::Client,
    cache: RwLock<Option<CachedKeys>>,
    cache_ttl: Duration,
}

impl JwksClient {
    pub fn new(jwks_url: &str, cache_ttl: Duration) -> Self {
        Self {
            jwks_url: jwks_url.to_string(),
            client: reqwest::Client::new(),
            cache: RwLock::new(None),
            cache_ttl,
        }
    }

    pub async fn get_key(&self, kid: &str) -> Result<DecodingKey, JwksError> {
        {
            let cache = self.cache.read().await;
            if let Some(ref cached) = *cache {
                if cached.is_fresh(self.cache_ttl) {
                    if let Some(key) = cached.by_kid.get(kid) {
                        return Ok(key.clone());
                    }
                }
            }
        }

        // Cache miss, expired, or rotated key: refresh and retry
        match self.refresh().await {
            Ok(()) => {}
            Err(e) => {
                // Keep serving stale keys if the IdP is briefly unreachable
                let cache = self.cache.read().await;
                if let Some(ref cached) = *cache {
                    if let Some(key) = cached.by_kid.get(kid) {
                        tracing::warn!("JWKS refresh failed, using stale key set: {}", e);
                        return Ok(key.clone());
                    }
                }
                return Err(e);
            }
        }

        let cache = self.cache.read().await;
        cache
            .as_ref()
            .and_then(|cached| cached.by_kid.get(kid).cloned())
            .ok_or_else(|| JwksError::KeyNotFound(kid.to_string()))
    }

    async fn refresh(&self) -> Result<(), JwksError> {
        let response = self
            .client
            .get(&self.jwks_url)
            .send()
            .await
            .map_err(|e| JwksError::FetchError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(JwksError::FetchError(format!(
                "Failed to fetch JWKS: HTTP {}",
                response.status()
            )));
        }

        let document: JwksDocument = response
            .json()
            .await
            .map_err(|e| JwksError::ParseError(e.to_string()))?;

        let mut by_kid = HashMap::new();
        for jwk in document.keys {
            // Only RSA keys are used for RS256 validation
            if jwk.kty == "RSA" {
                let decoding_key = DecodingKey::from_rsa_components(&jwk.n, &jwk.e)
                    .map_err(|e| JwksError::KeyConversionError(e.to_string()))?;
                by_kid.insert(jwk.kid, decoding_key);
            }
        }

        tracing::debug!("JWKS refreshed: {} RSA keys cached", by_kid.len());

        let mut cache = self.cache.write().await;
        *cache = Some(CachedKeys {
            by_kid,
            refreshed_at: Instant::now(),
        });

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JwksError {
    #[error("Failed to fetch JWKS: {0}")]
    FetchError(String),

    #[error("Failed to parse JWKS: {0}")]
    ParseError(String),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Failed to convert key: {0}")]
    KeyConversionError(String),
}
