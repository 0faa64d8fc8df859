//! JWT claims structure for API access tokens.

use serde::{Deserialize, Serialize};

/// JWT claims embedded in access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// JWT ID (unique per token).
    pub jti: String,
    /// Subject (user ID).
    pub sub: String,
    /// Username.
    pub username: String,
    /// Role granted to the user ("Admin" or a plain account).
    pub role: String,
    /// Issued at (unix timestamp).
    pub iat: i64,
    /// Expiration (unix timestamp).
    pub exp: i64,
}

impl Claims {
    pub fn is_admin(&self) -> bool {
        self.role == "Admin"
    }
}
