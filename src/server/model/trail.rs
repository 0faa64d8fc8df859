//! Trail domain model and operation parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::trail::{Difficulty, TrailCreateDto, TrailDto, TrailUpdateDto};
use crate::server::model::national_park::NationalPark;

/// Trail as used by the service layer, with its owning park when the query
/// joined it in.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    pub id: i32,
    pub name: String,
    pub distance: f64,
    pub elevation: f64,
    pub difficulty: Difficulty,
    pub created: DateTime<Utc>,
    pub national_park_id: i32,
    pub national_park: Option<NationalPark>,
}

impl Trail {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The trail entity from the database
    /// - `park` - The joined national park entity, when the query fetched it
    ///
    /// # Returns
    /// - `Ok(Trail)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - The stored difficulty string has no matching rating
    pub fn from_entity(
        entity: entity::trail::Model,
        park: Option<entity::national_park::Model>,
    ) -> Result<Self, DbErr> {
        let difficulty = entity
            .difficulty
            .parse::<Difficulty>()
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            distance: entity.distance,
            elevation: entity.elevation,
            difficulty,
            created: entity.created,
            national_park_id: entity.national_park_id,
            national_park: park.map(NationalPark::from_entity),
        })
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> TrailDto {
        TrailDto {
            id: self.id,
            name: self.name,
            distance: self.distance,
            elevation: self.elevation,
            difficulty: self.difficulty,
            created: Some(self.created),
            national_park_id: self.national_park_id,
            national_park: self.national_park.map(NationalPark::into_dto),
        }
    }
}

/// Parameters for creating a trail.
#[derive(Debug, Clone)]
pub struct CreateTrailParams {
    pub name: String,
    pub distance: f64,
    pub elevation: f64,
    pub difficulty: Difficulty,
    pub national_park_id: i32,
}

impl CreateTrailParams {
    pub fn from_dto(dto: TrailCreateDto) -> Self {
        Self {
            name: dto.name,
            distance: dto.distance,
            elevation: dto.elevation,
            difficulty: dto.difficulty,
            national_park_id: dto.national_park_id,
        }
    }
}

/// Parameters for updating an existing trail.
#[derive(Debug, Clone)]
pub struct UpdateTrailParams {
    pub id: i32,
    pub name: String,
    pub distance: f64,
    pub elevation: f64,
    pub difficulty: Difficulty,
    pub national_park_id: i32,
}

impl UpdateTrailParams {
    pub fn from_dto(dto: TrailUpdateDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            distance: dto.distance,
            elevation: dto.elevation,
            difficulty: dto.difficulty,
            national_park_id: dto.national_park_id,
        }
    }
}
