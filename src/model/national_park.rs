//! National park DTO used in API requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// National park as it travels over the wire.
///
/// The same shape is used for create payloads, update payloads, and
/// responses. On create the `id` is ignored by the server and `created`
/// is assigned server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NationalParkDto {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    pub state: String,
    pub established: DateTime<Utc>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    /// Raw image bytes, serialized as a JSON array of numbers.
    #[serde(default)]
    pub picture: Option<Vec<u8>>,
}
