use tower_sessions::Session;

use crate::web::{error::WebError, session::AuthSession};

pub enum Permission {
    Admin,
}

/// The identity of a signed-in visitor, as read from the session.
pub struct WebIdentity {
    pub username: String,
    pub role: String,
    pub token: String,
}

/// Guard that authenticates a request from the visitor's session.
///
/// Controllers construct the guard with the session and call `require` with
/// the roles the page demands. An empty permission list means any signed-in
/// visitor may proceed. Anonymous visitors get `WebError::NotSignedIn`,
/// which renders as a redirect to the login page.
pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn require(&self, permissions: &[Permission]) -> Result<WebIdentity, WebError> {
        let auth = AuthSession::new(self.session);

        let Some(username) = auth.username().await? else {
            return Err(WebError::NotSignedIn);
        };
        let Some(token) = auth.token().await? else {
            return Err(WebError::NotSignedIn);
        };
        let role = auth.role().await?.unwrap_or_default();

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if role != "Admin" {
                        return Err(WebError::AccessDenied(username));
                    }
                }
            }
        }

        Ok(WebIdentity {
            username,
            role,
            token,
        })
    }
}
