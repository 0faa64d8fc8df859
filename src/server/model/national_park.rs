//! National park domain model and operation parameters.

use chrono::{DateTime, Utc};

use crate::model::national_park::NationalParkDto;

/// National park as used by the service layer.
#[derive(Debug, Clone, PartialEq)]
pub struct NationalPark {
    pub id: i32,
    pub name: String,
    pub state: String,
    pub established: DateTime<Utc>,
    pub created: DateTime<Utc>,
    pub picture: Option<Vec<u8>>,
}

impl NationalPark {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::national_park::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            state: entity.state,
            established: entity.established,
            created: entity.created,
            picture: entity.picture,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> NationalParkDto {
        NationalParkDto {
            id: self.id,
            name: self.name,
            state: self.state,
            established: self.established,
            created: Some(self.created),
            picture: self.picture,
        }
    }
}

/// Parameters for creating a national park.
#[derive(Debug, Clone)]
pub struct CreateNationalParkParams {
    pub name: String,
    pub state: String,
    pub established: DateTime<Utc>,
    pub picture: Option<Vec<u8>>,
}

impl CreateNationalParkParams {
    /// Builds create parameters from an inbound DTO, dropping server-assigned
    /// fields (`id`, `created`).
    pub fn from_dto(dto: NationalParkDto) -> Self {
        Self {
            name: dto.name,
            state: dto.state,
            established: dto.established,
            picture: dto.picture,
        }
    }
}

/// Parameters for updating an existing national park.
#[derive(Debug, Clone)]
pub struct UpdateNationalParkParams {
    pub id: i32,
    pub name: String,
    pub state: String,
    pub established: DateTime<Utc>,
    pub picture: Option<Vec<u8>>,
}

impl UpdateNationalParkParams {
    pub fn from_dto(dto: NationalParkDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            state: dto.state,
            established: dto.established,
            picture: dto.picture,
        }
    }
}
