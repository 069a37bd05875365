//! Authentication header building for API requests.

use super::credentials::SecureString;

/// Header name and value for authentication.
pub type AuthHeader = (String, String);

/// Build the bearer header for a stored session token.
///
/// Returns `None` when no token is stored or the stored value is blank.
pub fn build_auth_header(token: Option<&SecureString>) -> Option<AuthHeader> {
    let token = token?;
    let value = token.expose().trim();
    if value.is_empty() {
        return None;
    }
    Some(("Authorization".to_string(), format!("Bearer {}", value)))
}
