use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, national_park::NationalParkDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::national_park::{CreateNationalParkParams, UpdateNationalParkParams},
        service::national_park::NationalParkService,
        state::AppState,
    },
};

/// Tag for grouping national park endpoints in OpenAPI documentation
pub static NATIONAL_PARK_TAG: &str = "national-parks";

/// Get all national parks.
///
/// Returns every national park ordered by name. Publicly accessible.
///
/// # Returns
/// - `200 OK` - List of national parks, possibly empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/nationalparks",
    tag = NATIONAL_PARK_TAG,
    responses(
        (status = 200, description = "List of national parks", body = Vec<NationalParkDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_national_parks(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = NationalParkService::new(&state.db);

    let parks = service.get_all().await?;

    let dtos: Vec<NationalParkDto> = parks.into_iter().map(|park| park.into_dto()).collect();

    Ok(Json(dtos))
}

/// Get a single national park by ID.
///
/// Requires a valid bearer token; any authenticated user may read a park.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The requested national park
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No park with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/nationalparks/{id}",
    tag = NATIONAL_PARK_TAG,
    params(
        ("id" = i32, Path, description = "National park ID")
    ),
    responses(
        (status = 200, description = "The requested national park", body = NationalParkDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "No park with the given ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(
        ("bearer_auth" = [])
    ),
)]
pub async fn get_national_park(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[])?;

    let service = NationalParkService::new(&state.db);

    let park = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("National park {} not found", id)))?;

    Ok(Json(park.into_dto()))
}

/// Create a new national park.
///
/// The park name must be unique. The `created` timestamp is assigned by the
/// server and any value in the payload is ignored.
///
/// # Returns
/// - `201 Created` - The created park, with a Location header for it
/// - `400 Bad Request` - Malformed or missing payload
/// - `404 Not Found` - A park with the same name already exists
/// - `500 Internal Server Error` - The record could not be persisted
#[utoipa::path(
    post,
    path = "/api/v1/nationalparks",
    tag = NATIONAL_PARK_TAG,
    request_body = NationalParkDto,
    responses(
        (status = 201, description = "Successfully created national park", body = NationalParkDto),
        (status = 400, description = "Malformed or missing payload", body = ErrorDto),
        (status = 404, description = "A park with the same name already exists", body = ErrorDto),
        (status = 500, description = "The record could not be persisted", body = ErrorDto)
    ),
)]
pub async fn create_national_park(
    State(state): State<AppState>,
    payload: Result<Json<NationalParkDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|err| AppError::BadRequest(err.body_text()))?;

    let service = NationalParkService::new(&state.db);

    let params = CreateNationalParkParams::from_dto(payload);

    let park = service.create(params).await?;

    let location = format!("/api/v1/nationalparks/{}", park.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(park.into_dto()),
    ))
}

/// Update an existing national park.
///
/// The ID in the path must match the ID in the payload.
///
/// # Returns
/// - `204 No Content` - Successfully updated
/// - `400 Bad Request` - Malformed payload or path/payload ID mismatch
/// - `500 Internal Server Error` - The record could not be persisted
#[utoipa::path(
    patch,
    path = "/api/v1/nationalparks/{id}",
    tag = NATIONAL_PARK_TAG,
    params(
        ("id" = i32, Path, description = "National park ID")
    ),
    request_body = NationalParkDto,
    responses(
        (status = 204, description = "Successfully updated national park"),
        (status = 400, description = "Malformed payload or ID mismatch", body = ErrorDto),
        (status = 500, description = "The record could not be persisted", body = ErrorDto)
    ),
)]
pub async fn update_national_park(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<NationalParkDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|err| AppError::BadRequest(err.body_text()))?;

    if payload.id != id {
        return Err(AppError::BadRequest(
            "National park ID in path does not match payload".to_string(),
        ));
    }

    let service = NationalParkService::new(&state.db);

    let params = UpdateNationalParkParams::from_dto(payload);

    service.update(params).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a national park.
///
/// # Returns
/// - `204 No Content` - Successfully deleted
/// - `404 Not Found` - No park with the given ID
/// - `500 Internal Server Error` - The record could not be deleted
#[utoipa::path(
    delete,
    path = "/api/v1/nationalparks/{id}",
    tag = NATIONAL_PARK_TAG,
    params(
        ("id" = i32, Path, description = "National park ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted national park"),
        (status = 404, description = "No park with the given ID", body = ErrorDto),
        (status = 500, description = "The record could not be deleted", body = ErrorDto)
    ),
)]
pub async fn delete_national_park(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = NationalParkService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound(format!(
            "National park {} not found",
            id
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}
