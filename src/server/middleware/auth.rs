use axum::http::{header, HeaderMap};

use crate::server::{
    auth::{Claims, JwtManager},
    error::{auth::AuthError, AppError},
};

pub enum Permission {
    Admin,
}

/// Guard that authenticates a request from its `Authorization` header.
///
/// Controllers construct the guard with the request headers and call
/// `require` with the roles the endpoint demands. An empty permission list
/// means any validly authenticated user may proceed.
pub struct AuthGuard<'a> {
    jwt: &'a JwtManager,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(jwt: &'a JwtManager, headers: &'a HeaderMap) -> Self {
        Self { jwt, headers }
    }

    pub fn require(&self, permissions: &[Permission]) -> Result<Claims, AppError> {
        let Some(header_value) = self.headers.get(header::AUTHORIZATION) else {
            return Err(AuthError::MissingToken.into());
        };

        let token = header_value
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AuthError::MissingToken)?;

        let claims = self.jwt.validate(token).map_err(AuthError::InvalidToken)?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !claims.is_admin() {
                        return Err(AuthError::AccessDenied(claims.username).into());
                    }
                }
            }
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn jwt() -> JwtManager {
        JwtManager::new(b"guard-test-secret", 3600)
    }

    fn headers_with(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        );
        headers
    }

    /// Tests that a valid token passes a guard with no role requirements.
    ///
    /// Expected: Ok with the token's claims
    #[test]
    fn accepts_valid_token_without_role_requirements() {
        let jwt = jwt();
        let token = jwt.issue(7, "alice", "Viewer").unwrap();
        let headers = headers_with(&token);

        let claims = AuthGuard::new(&jwt, &headers).require(&[]).unwrap();
        assert_eq!(claims.username, "alice");
    }

    /// Tests that a missing Authorization header is rejected.
    ///
    /// Expected: Err(AuthErr(MissingToken))
    #[test]
    fn rejects_missing_header() {
        let jwt = jwt();
        let headers = HeaderMap::new();

        let result = AuthGuard::new(&jwt, &headers).require(&[]);
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::MissingToken))
        ));
    }

    /// Tests that a header without the Bearer scheme is rejected.
    ///
    /// Expected: Err(AuthErr(MissingToken))
    #[test]
    fn rejects_non_bearer_scheme() {
        let jwt = jwt();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );

        let result = AuthGuard::new(&jwt, &headers).require(&[]);
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::MissingToken))
        ));
    }

    /// Tests that a garbage token is rejected as invalid.
    ///
    /// Expected: Err(AuthErr(InvalidToken))
    #[test]
    fn rejects_invalid_token() {
        let jwt = jwt();
        let headers = headers_with("garbage");

        let result = AuthGuard::new(&jwt, &headers).require(&[]);
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidToken(_)))
        ));
    }

    /// Tests that a non-admin token is rejected when Admin is required.
    ///
    /// Expected: Err(AuthErr(AccessDenied))
    #[test]
    fn rejects_non_admin_for_admin_endpoint() {
        let jwt = jwt();
        let token = jwt.issue(7, "bob", "Viewer").unwrap();
        let headers = headers_with(&token);

        let result = AuthGuard::new(&jwt, &headers).require(&[Permission::Admin]);
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::AccessDenied(_)))
        ));
    }

    /// Tests that an admin token passes an Admin-only guard.
    ///
    /// Expected: Ok with admin claims
    #[test]
    fn accepts_admin_for_admin_endpoint() {
        let jwt = jwt();
        let token = jwt.issue(1, "alice", "Admin").unwrap();
        let headers = headers_with(&token);

        let claims = AuthGuard::new(&jwt, &headers)
            .require(&[Permission::Admin])
            .unwrap();
        assert!(claims.is_admin());
    }
}
