//! Type-safe session management for visitor identity.
//!
//! The web tier stores three pieces of identity in the server-side session:
//! the username, the role, and the bearer token the API issued at login. The
//! `AuthSession` wrapper centralizes the keys and types so controllers never
//! touch raw session keys.

use tower_sessions::Session;

use crate::web::error::WebError;

// Session key constants
const SESSION_AUTH_USERNAME: &str = "auth:username";
const SESSION_AUTH_ROLE: &str = "auth:role";
const SESSION_AUTH_TOKEN: &str = "auth:token";

/// Authentication session management.
///
/// Wraps the tower-sessions `Session` and exposes only identity operations.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the visitor's identity after a successful login.
    ///
    /// # Arguments
    /// - `username` - The authenticated username
    /// - `role` - The role the API reported for the account
    /// - `token` - The bearer token to attach to subsequent API calls
    ///
    /// # Returns
    /// - `Ok(())` - Identity stored
    /// - `Err(WebError::SessionErr(_))` - Failed to write to the session
    pub async fn sign_in(&self, username: &str, role: &str, token: &str) -> Result<(), WebError> {
        self.session.insert(SESSION_AUTH_USERNAME, username).await?;
        self.session.insert(SESSION_AUTH_ROLE, role).await?;
        self.session.insert(SESSION_AUTH_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves the signed-in username, if any.
    pub async fn username(&self) -> Result<Option<String>, WebError> {
        Ok(self.session.get::<String>(SESSION_AUTH_USERNAME).await?)
    }

    /// Retrieves the signed-in visitor's role, if any.
    pub async fn role(&self) -> Result<Option<String>, WebError> {
        Ok(self.session.get::<String>(SESSION_AUTH_ROLE).await?)
    }

    /// Retrieves the stored bearer token.
    ///
    /// A signed-out session stores an empty token; callers get `None` in
    /// that case as well, so a returned token is always usable.
    pub async fn token(&self) -> Result<Option<String>, WebError> {
        let token = self.session.get::<String>(SESSION_AUTH_TOKEN).await?;
        Ok(token.filter(|token| !token.is_empty()))
    }

    /// Checks if a visitor is currently signed in.
    pub async fn is_authenticated(&self) -> Result<bool, WebError> {
        Ok(self.username().await?.is_some())
    }

    /// Clears the visitor's identity.
    ///
    /// All session data is dropped and an empty token is written back so
    /// later API calls go out unauthenticated.
    pub async fn sign_out(&self) -> Result<(), WebError> {
        self.session.clear().await;
        self.session
            .insert(SESSION_AUTH_TOKEN, String::new())
            .await?;
        Ok(())
    }
}
