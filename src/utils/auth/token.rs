//! Opaque session tokens

use rand::Rng;
use rand::distributions::Alphanumeric;

const SESSION_TOKEN_LENGTH: usize = 48;

/// Generate a random alphanumeric session token
pub fn generate_session_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}
