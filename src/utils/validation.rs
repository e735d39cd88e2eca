//! Input validation for account registration and coordinates

use crate::utils::error::{GatewayError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("Invalid username regex"));

const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};:'\",.<>?/";

pub const MIN_PASSWORD_LENGTH: usize = 12;
pub const MAX_ORGANIZATION_LENGTH: usize = 255;
pub const MAX_EXPERTISE_LENGTH: usize = 500;

/// Check username length and character set
pub fn validate_username(username: &str) -> Result<()> {
    let length = username.chars().count();
    if !(3..=50).contains(&length) {
        return Err(GatewayError::validation(
            "Username must be 3-50 characters",
        ));
    }

    if !USERNAME_PATTERN.is_match(username) {
        return Err(GatewayError::validation(
            "Username can only contain letters, numbers, underscores, and hyphens",
        ));
    }

    Ok(())
}

/// Check password strength
pub fn validate_password_strength(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(GatewayError::validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    let checks: [(fn(char) -> bool, &str); 4] = [
        (|c| c.is_ascii_uppercase(), "Password must contain at least one uppercase letter"),
        (|c| c.is_ascii_lowercase(), "Password must contain at least one lowercase letter"),
        (|c| c.is_ascii_digit(), "Password must contain at least one digit"),
        (
            |c| SPECIAL_CHARACTERS.contains(c),
            "Password must contain at least one special character (!@#$%^&*)",
        ),
    ];

    for (predicate, message) in checks {
        if !password.chars().any(predicate) {
            return Err(GatewayError::validation(message));
        }
    }

    Ok(())
}

/// Check the optional profile fields
pub fn validate_profile(organization: &str, expertise: &str) -> Result<()> {
    if organization.chars().count() > MAX_ORGANIZATION_LENGTH
        || expertise.chars().count() > MAX_EXPERTISE_LENGTH
    {
        return Err(GatewayError::validation("Input fields too long"));
    }
    Ok(())
}

/// Finite WGS84 latitude and longitude within range
pub fn is_valid_coordinate(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude)
}
