//! Signing and verification of access tokens

use super::types::Claims;
use crate::config::AuthConfig;
use crate::utils::error::{GatewayError, Result};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::debug;
use uuid::Uuid;

const ISSUER: &str = "georesource-explorer";

/// HS256 token issuer and verifier keyed by the configured secret
#[derive(Clone)]
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    /// Seconds a new token stays valid
    expiration: u64,
}

impl std::fmt::Debug for JwtHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtHandler")
            .field("expiration", &self.expiration)
            .field("keys", &"[REDACTED]")
            .finish()
    }
}

impl JwtHandler {
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.jwt_secret.as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            expiration: config.jwt_expiration,
        }
    }

    /// Token lifetime in seconds
    pub fn expiration(&self) -> u64 {
        self.expiration
    }

    /// Issue a token for an account
    pub fn create_access_token(&self, user_id: Uuid) -> Result<String> {
        let issued_at = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            iat: issued_at,
            exp: issued_at + self.expiration as i64,
            iss: ISSUER.to_string(),
            jti: Uuid::new_v4(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(GatewayError::Jwt)
    }

    /// Check signature, issuer and expiry
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[ISSUER]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(GatewayError::Jwt)?;

        debug!("Token verified for user: {}", data.claims.sub);
        Ok(data.claims)
    }
}
