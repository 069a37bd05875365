use serde::{Deserialize, Serialize};

/// Login/register request body. Only lives for the request that carries it.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"••••••••")
            .finish()
    }
}

/// Successful `/login` or `/register` response.
///
/// Only the token matters to the client. The user id the API echoes back
/// is ignored, whatever its type or spelling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub username: Option<String>,
}
