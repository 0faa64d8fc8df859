//! Landing page and account handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{AuthenticationDto, RegistrationDto, UserDto},
    },
    web::{
        error::WebError,
        model::IndexVm,
        session::AuthSession,
        state::WebState,
    },
};

/// Landing page data: both catalogues fetched from the API concurrently.
///
/// Anonymous visitors see the listings too; the bearer token is attached
/// only when the session holds one.
pub async fn index(
    State(state): State<WebState>,
    session: Session,
) -> Result<Json<IndexVm>, WebError> {
    let auth = AuthSession::new(&session);
    let token = auth.token().await?;

    let parks_repository = state.parks();
    let trails_repository = state.trails();
    let (parks, trails) = tokio::join!(
        parks_repository.get_all(token.as_deref()),
        trails_repository.get_all(token.as_deref()),
    );

    Ok(Json(IndexVm {
        national_park_list: parks?,
        trail_list: trails?,
    }))
}

/// Login form shell. The page itself is rendered client-side.
pub async fn login_form() -> StatusCode {
    StatusCode::OK
}

/// Registration form shell.
pub async fn register_form() -> StatusCode {
    StatusCode::OK
}

/// Signs a visitor in through the API's authenticate endpoint.
///
/// On success the username, role, and bearer token land in the session and
/// the visitor is sent back to the landing page. Wrong credentials, or a
/// response without a token, yield 401 with an error body so the form can
/// redisplay.
pub async fn login(
    State(state): State<WebState>,
    session: Session,
    Form(credentials): Form<AuthenticationDto>,
) -> Result<Response, WebError> {
    let Some(user) = state.account().login(&credentials).await? else {
        return Ok(login_rejected());
    };

    let Some(token) = issued_token(&user) else {
        return Ok(login_rejected());
    };

    AuthSession::new(&session)
        .sign_in(&user.username, &user.role, token)
        .await?;

    Ok(Redirect::to("/").into_response())
}

fn login_rejected() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorDto {
            error: "Username or password is incorrect".to_string(),
        }),
    )
        .into_response()
}

/// Extracts a usable bearer token from an authentication response.
///
/// A success response without a token cannot sign the visitor in; the empty
/// string is treated the same as an absent token.
fn issued_token(user: &UserDto) -> Option<&str> {
    user.token.as_deref().filter(|token| !token.is_empty())
}

/// Registers a new account through the API, then sends the visitor to the
/// login page.
pub async fn register(
    State(state): State<WebState>,
    Form(registration): Form<RegistrationDto>,
) -> Result<Response, WebError> {
    if !state.account().register(&registration).await? {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: "Username already exists".to_string(),
            }),
        )
            .into_response());
    }

    Ok(Redirect::to("/home/login").into_response())
}

/// Signs the visitor out and returns to the landing page.
pub async fn logout(session: Session) -> Result<Redirect, WebError> {
    AuthSession::new(&session).sign_out().await?;

    Ok(Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_token(token: Option<&str>) -> UserDto {
        UserDto {
            id: 1,
            username: "alice".to_string(),
            role: "Admin".to_string(),
            token: token.map(str::to_string),
        }
    }

    /// Tests extracting the token from a normal authentication response.
    ///
    /// Expected: the token
    #[test]
    fn present_token_is_extracted() {
        let user = user_with_token(Some("token-123"));
        assert_eq!(issued_token(&user), Some("token-123"));
    }

    /// Tests a success response that carries no token.
    ///
    /// Expected: None, so the visitor is not signed in
    #[test]
    fn missing_token_yields_none() {
        let user = user_with_token(None);
        assert_eq!(issued_token(&user), None);
    }

    /// Tests a success response with an empty token string.
    ///
    /// Expected: None, same as an absent token
    #[test]
    fn empty_token_yields_none() {
        let user = user_with_token(Some(""));
        assert_eq!(issued_token(&user), None);
    }
}
