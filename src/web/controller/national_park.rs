//! National park pages: listing, upsert form, AJAX listing, and delete.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use tower_sessions::Session;

use crate::{
    model::national_park::NationalParkDto,
    web::{
        error::WebError,
        middleware::auth::{AuthGuard, Permission},
        model::{DeleteResultVm, TableDataVm},
        state::WebState,
    },
};

/// Park management page shell. Requires a signed-in visitor; the table data
/// arrives through `get_all`.
pub async fn index(session: Session) -> Result<StatusCode, WebError> {
    let _ = AuthGuard::new(&session).require(&[]).await?;

    Ok(StatusCode::OK)
}

/// Upsert form for a new park. Admins only.
///
/// Returns `null` as the form model: a zero identity routes the submit to
/// create.
pub async fn upsert_create_form(
    session: Session,
) -> Result<Json<Option<NationalParkDto>>, WebError> {
    let _ = AuthGuard::new(&session).require(&[Permission::Admin]).await?;

    Ok(Json(None))
}

/// Upsert form for an existing park. Admins only.
pub async fn upsert_edit_form(
    State(state): State<WebState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<Json<NationalParkDto>, WebError> {
    let identity = AuthGuard::new(&session).require(&[Permission::Admin]).await?;

    let park = state
        .parks()
        .get(id, Some(&identity.token))
        .await?
        .ok_or_else(|| WebError::NotFound(format!("National park {} not found", id)))?;

    Ok(Json(park))
}

/// Fields collected from the multipart upsert form.
#[derive(Default)]
struct UpsertForm {
    id: i32,
    name: String,
    state: String,
    established: Option<DateTime<Utc>>,
    picture: Option<Vec<u8>>,
}

/// Handles the upsert form submit. Admins only.
///
/// A zero identity creates a new park; anything else updates. When the form
/// carries no new image the existing record is fetched first so its picture
/// survives the update unchanged.
pub async fn upsert(
    State(state): State<WebState>,
    session: Session,
    multipart: Multipart,
) -> Result<Response, WebError> {
    let identity = AuthGuard::new(&session).require(&[Permission::Admin]).await?;
    let token = Some(identity.token.as_str());

    let form = parse_upsert_form(multipart).await?;

    let established = form
        .established
        .ok_or_else(|| WebError::BadRequest("Established date is required".to_string()))?;

    let existing = if form.picture.is_none() && form.id != 0 {
        state.parks().get(form.id, token).await?
    } else {
        None
    };

    let park = NationalParkDto {
        id: form.id,
        name: form.name,
        state: form.state,
        established,
        created: None,
        picture: merge_picture(form.picture, existing.as_ref()),
    };

    let saved = if park.id == 0 {
        state.parks().create(&park, token).await?
    } else {
        state.parks().update(&park, token).await?
    };

    if !saved {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(crate::model::api::ErrorDto {
                error: format!("The record {} was not saved", park.name),
            }),
        )
            .into_response());
    }

    Ok(Redirect::to("/nationalparks").into_response())
}

/// AJAX listing of every park, wrapped in a table-data envelope.
pub async fn get_all(
    State(state): State<WebState>,
    session: Session,
) -> Result<Json<TableDataVm<NationalParkDto>>, WebError> {
    let auth = crate::web::session::AuthSession::new(&session);
    let token = auth.token().await?;

    let parks = state.parks().get_all(token.as_deref()).await?;

    Ok(Json(TableDataVm { data: parks }))
}

/// JSON delete endpoint used by the listing page. Admins only.
pub async fn delete(
    State(state): State<WebState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResultVm>, WebError> {
    let identity = AuthGuard::new(&session).require(&[Permission::Admin]).await?;

    let deleted = state.parks().delete(id, Some(&identity.token)).await?;

    let message = if deleted {
        "Delete Successful"
    } else {
        "Delete Not Successful"
    };

    Ok(Json(DeleteResultVm {
        success: deleted,
        message: message.to_string(),
    }))
}

/// Reads the upsert form fields out of the multipart body.
///
/// An empty picture field means no file was chosen and is treated as absent.
async fn parse_upsert_form(mut multipart: Multipart) -> Result<UpsertForm, WebError> {
    let mut form = UpsertForm::default();

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("id") => {
                let text = field.text().await?;
                form.id = text.trim().parse().unwrap_or(0);
            }
            Some("name") => form.name = field.text().await?,
            Some("state") => form.state = field.text().await?,
            Some("established") => {
                let text = field.text().await?;
                form.established = Some(parse_established(text.trim())?);
            }
            Some("picture") => {
                let bytes = field.bytes().await?;
                if !bytes.is_empty() {
                    form.picture = Some(bytes.to_vec());
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

/// Parses the established date from the form.
///
/// Accepts a plain date (`YYYY-MM-DD`, what a date input submits) or a full
/// RFC 3339 timestamp.
fn parse_established(value: &str) -> Result<DateTime<Utc>, WebError> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc())
        .map_err(|_| WebError::BadRequest(format!("Invalid established date: {}", value)))
}

/// Picks the picture for an upsert: a newly uploaded file wins, otherwise
/// the bytes already stored on the record are carried forward.
fn merge_picture(
    uploaded: Option<Vec<u8>>,
    existing: Option<&NationalParkDto>,
) -> Option<Vec<u8>> {
    match uploaded {
        Some(bytes) => Some(bytes),
        None => existing.and_then(|park| park.picture.clone()),
    }
}
