//! Bearer token claims

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by an access token; identity only, no role
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account id
    pub sub: Uuid,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expires at (unix seconds)
    pub exp: i64,
    pub iss: String,
    /// Token id
    pub jti: Uuid,
}

impl Claims {
    /// Seconds the token was issued for
    pub fn lifetime(&self) -> i64 {
        self.exp - self.iat
    }
}
