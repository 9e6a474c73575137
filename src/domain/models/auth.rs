use serde::{Deserialize, Serialize};

/// JWT claim set shared by access and refresh tokens. The two kinds differ
/// only in lifetime; validity is signature + expiry, nothing is persisted.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: &'static str,
}

impl TokenPair {
    pub fn bearer(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "bearer",
        }
    }
}
