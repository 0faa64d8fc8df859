//! Trail data repository for database operations.
//!
//! This module provides the `TrailRepository` for managing trail records in the
//! database. Read queries join the owning national park so callers get the
//! full `Trail` domain model in one round trip.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::trail::{CreateTrailParams, Trail, UpdateTrailParams};

/// Repository providing database operations for trails.
pub struct TrailRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrailRepository<'a> {
    /// Creates a new TrailRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all trails ordered by name, each with its owning park.
    ///
    /// # Returns
    /// - `Ok(Vec<Trail>)` - All trails, possibly empty
    /// - `Err(DbErr)` - Database error during query or a stored difficulty
    ///   string that no longer maps to a rating
    pub async fn get_all(&self) -> Result<Vec<Trail>, DbErr> {
        let rows = entity::prelude::Trail::find()
            .find_also_related(entity::prelude::NationalPark)
            .order_by_asc(entity::trail::Column::Name)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(trail, park)| Trail::from_entity(trail, park))
            .collect()
    }

    /// Finds a trail by its ID, with its owning park.
    ///
    /// # Returns
    /// - `Ok(Some(Trail))` - Trail found
    /// - `Ok(None)` - No trail with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Trail>, DbErr> {
        let row = entity::prelude::Trail::find_by_id(id)
            .find_also_related(entity::prelude::NationalPark)
            .one(self.db)
            .await?;

        row.map(|(trail, park)| Trail::from_entity(trail, park))
            .transpose()
    }

    /// Gets all trails belonging to the given national park, ordered by name.
    ///
    /// Callers are expected to have verified that the park exists; an unknown
    /// park ID simply yields an empty list here.
    pub async fn get_in_national_park(&self, national_park_id: i32) -> Result<Vec<Trail>, DbErr> {
        let rows = entity::prelude::Trail::find()
            .filter(entity::trail::Column::NationalParkId.eq(national_park_id))
            .find_also_related(entity::prelude::NationalPark)
            .order_by_asc(entity::trail::Column::Name)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(trail, park)| Trail::from_entity(trail, park))
            .collect()
    }

    /// Checks whether a trail with the given name already exists.
    pub async fn exists_by_name(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Trail::find()
            .filter(entity::trail::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a trail with the given ID exists.
    pub async fn exists_by_id(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Trail::find()
            .filter(entity::trail::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Creates a trail from create parameters.
    ///
    /// The `created` timestamp is assigned here. The insert fails with a
    /// foreign key error if the referenced park does not exist.
    ///
    /// # Returns
    /// - `Ok(Trail)` - The created trail with its assigned ID (park not joined)
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateTrailParams) -> Result<Trail, DbErr> {
        let entity = entity::prelude::Trail::insert(entity::trail::ActiveModel {
            name: ActiveValue::Set(params.name),
            distance: ActiveValue::Set(params.distance),
            elevation: ActiveValue::Set(params.elevation),
            difficulty: ActiveValue::Set(params.difficulty.as_str().to_string()),
            created: ActiveValue::Set(Utc::now()),
            national_park_id: ActiveValue::Set(params.national_park_id),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Trail::from_entity(entity, None)
    }

    /// Updates an existing trail from update parameters.
    ///
    /// # Returns
    /// - `Ok(Trail)` - The updated trail (park not joined)
    /// - `Err(DbErr::RecordNotFound)` - No trail with the given ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateTrailParams) -> Result<Trail, DbErr> {
        let existing = entity::prelude::Trail::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Trail {} not found", params.id)))?;

        let entity = entity::prelude::Trail::update(entity::trail::ActiveModel {
            id: ActiveValue::Unchanged(existing.id),
            name: ActiveValue::Set(params.name),
            distance: ActiveValue::Set(params.distance),
            elevation: ActiveValue::Set(params.elevation),
            difficulty: ActiveValue::Set(params.difficulty.as_str().to_string()),
            created: ActiveValue::Unchanged(existing.created),
            national_park_id: ActiveValue::Set(params.national_park_id),
        })
        .exec(self.db)
        .await?;

        Trail::from_entity(entity, None)
    }

    /// Deletes a trail by ID.
    ///
    /// # Returns
    /// - `Ok(true)` - The trail was deleted
    /// - `Ok(false)` - No trail with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Trail::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
