use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{AuthenticationDto, RegistrationDto, UserDto},
    },
    server::{
        error::AppError, model::user::RegisterUserParams, service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "users";

/// Authenticate a user and issue a bearer token.
///
/// # Returns
/// - `200 OK` - User with a freshly issued token
/// - `400 Bad Request` - Malformed payload or wrong credentials
/// - `500 Internal Server Error` - Database or token issuance error
#[utoipa::path(
    post,
    path = "/api/v1/users/authenticate",
    tag = USER_TAG,
    request_body = AuthenticationDto,
    responses(
        (status = 200, description = "User with a freshly issued token", body = UserDto),
        (status = 400, description = "Malformed payload or wrong credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn authenticate(
    State(state): State<AppState>,
    payload: Result<Json<AuthenticationDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|err| AppError::BadRequest(err.body_text()))?;

    let service = UserService::new(&state.db, &state.jwt);

    let authenticated = service
        .authenticate(&payload.username, &payload.password)
        .await?
        .ok_or_else(|| {
            AppError::BadRequest("Username or password is incorrect".to_string())
        })?;

    Ok(Json(authenticated.into_dto()))
}

/// Register a new user account.
///
/// # Returns
/// - `201 Created` - The created account without credential material
/// - `400 Bad Request` - Malformed payload or username already taken
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/v1/users/register",
    tag = USER_TAG,
    request_body = RegistrationDto,
    responses(
        (status = 201, description = "Successfully registered user", body = UserDto),
        (status = 400, description = "Malformed payload or username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegistrationDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|err| AppError::BadRequest(err.body_text()))?;

    let service = UserService::new(&state.db, &state.jwt);

    let params = RegisterUserParams::from_dto(payload);

    let user = service.register(params).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}
