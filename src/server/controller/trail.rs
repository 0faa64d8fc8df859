use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        trail::{TrailCreateDto, TrailDto, TrailUpdateDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::trail::{CreateTrailParams, UpdateTrailParams},
        service::trail::TrailService,
        state::AppState,
    },
};

/// Tag for grouping trail endpoints in OpenAPI documentation
pub static TRAIL_TAG: &str = "trails";

/// Get all trails.
///
/// Returns every trail ordered by name, each with its owning national park
/// embedded. Publicly accessible.
///
/// # Returns
/// - `200 OK` - List of trails, possibly empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/trails",
    tag = TRAIL_TAG,
    responses(
        (status = 200, description = "List of trails", body = Vec<TrailDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trails(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = TrailService::new(&state.db);

    let trails = service.get_all().await?;

    let dtos: Vec<TrailDto> = trails.into_iter().map(|trail| trail.into_dto()).collect();

    Ok(Json(dtos))
}

/// Get a single trail by ID.
///
/// Requires an Admin bearer token.
///
/// # Access Control
/// - `Admin` - Only admins can read an individual trail
///
/// # Returns
/// - `200 OK` - The requested trail with its owning park
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Authenticated but not an admin
/// - `404 Not Found` - No trail with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/trails/{id}",
    tag = TRAIL_TAG,
    params(
        ("id" = i32, Path, description = "Trail ID")
    ),
    responses(
        (status = 200, description = "The requested trail", body = TrailDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Authenticated but not an admin", body = ErrorDto),
        (status = 404, description = "No trail with the given ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(
        ("bearer_auth" = [])
    ),
)]
pub async fn get_trail(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;

    let service = TrailService::new(&state.db);

    let trail = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Trail {} not found", id)))?;

    Ok(Json(trail.into_dto()))
}

/// Get all trails in a national park.
///
/// The path segment is kept verbatim for client compatibility.
///
/// # Returns
/// - `200 OK` - Trails belonging to the park, possibly empty
/// - `404 Not Found` - No park with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/trails/GetTrailInNationalPark/{nationalParkId}",
    tag = TRAIL_TAG,
    params(
        ("nationalParkId" = i32, Path, description = "National park ID")
    ),
    responses(
        (status = 200, description = "Trails belonging to the park", body = Vec<TrailDto>),
        (status = 404, description = "No park with the given ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trails_in_national_park(
    State(state): State<AppState>,
    Path(national_park_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = TrailService::new(&state.db);

    let trails = service
        .get_in_national_park(national_park_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("National park {} not found", national_park_id))
        })?;

    let dtos: Vec<TrailDto> = trails.into_iter().map(|trail| trail.into_dto()).collect();

    Ok(Json(dtos))
}

/// Create a new trail.
///
/// The trail name must be unique and the referenced national park must exist.
///
/// # Returns
/// - `201 Created` - The created trail, with a Location header for it
/// - `400 Bad Request` - Malformed or missing payload
/// - `404 Not Found` - A trail with the same name already exists
/// - `500 Internal Server Error` - The record could not be persisted
#[utoipa::path(
    post,
    path = "/api/v1/trails",
    tag = TRAIL_TAG,
    request_body = TrailCreateDto,
    responses(
        (status = 201, description = "Successfully created trail", body = TrailDto),
        (status = 400, description = "Malformed or missing payload", body = ErrorDto),
        (status = 404, description = "A trail with the same name already exists", body = ErrorDto),
        (status = 500, description = "The record could not be persisted", body = ErrorDto)
    ),
)]
pub async fn create_trail(
    State(state): State<AppState>,
    payload: Result<Json<TrailCreateDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|err| AppError::BadRequest(err.body_text()))?;

    let service = TrailService::new(&state.db);

    let params = CreateTrailParams::from_dto(payload);

    let trail = service.create(params).await?;

    let location = format!("/api/v1/trails/{}", trail.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(trail.into_dto()),
    ))
}

/// Update an existing trail.
///
/// The ID in the path must match the ID in the payload.
///
/// # Returns
/// - `204 No Content` - Successfully updated
/// - `400 Bad Request` - Malformed payload or path/payload ID mismatch
/// - `500 Internal Server Error` - The record could not be persisted
#[utoipa::path(
    patch,
    path = "/api/v1/trails/{id}",
    tag = TRAIL_TAG,
    params(
        ("id" = i32, Path, description = "Trail ID")
    ),
    request_body = TrailUpdateDto,
    responses(
        (status = 204, description = "Successfully updated trail"),
        (status = 400, description = "Malformed payload or ID mismatch", body = ErrorDto),
        (status = 500, description = "The record could not be persisted", body = ErrorDto)
    ),
)]
pub async fn update_trail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<TrailUpdateDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|err| AppError::BadRequest(err.body_text()))?;

    if payload.id != id {
        return Err(AppError::BadRequest(
            "Trail ID in path does not match payload".to_string(),
        ));
    }

    let service = TrailService::new(&state.db);

    let params = UpdateTrailParams::from_dto(payload);

    service.update(params).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a trail.
///
/// # Returns
/// - `204 No Content` - Successfully deleted
/// - `404 Not Found` - No trail with the given ID
/// - `500 Internal Server Error` - The record could not be deleted
#[utoipa::path(
    delete,
    path = "/api/v1/trails/{id}",
    tag = TRAIL_TAG,
    params(
        ("id" = i32, Path, description = "Trail ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted trail"),
        (status = 404, description = "No trail with the given ID", body = ErrorDto),
        (status = 500, description = "The record could not be deleted", body = ErrorDto)
    ),
)]
pub async fn delete_trail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = TrailService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound(format!("Trail {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
