//! National park data repository for database operations.
//!
//! This module provides the `NationalParkRepository` for managing national park
//! records in the database. It handles creation, updates, queries, and deletion
//! with conversion between entity models and domain models at the
//! infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::national_park::{
    CreateNationalParkParams, NationalPark, UpdateNationalParkParams,
};

/// Repository providing database operations for national parks.
pub struct NationalParkRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NationalParkRepository<'a> {
    /// Creates a new NationalParkRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all national parks ordered by name.
    ///
    /// # Returns
    /// - `Ok(Vec<NationalPark>)` - All parks, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<NationalPark>, DbErr> {
        let entities = entity::prelude::NationalPark::find()
            .order_by_asc(entity::national_park::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(NationalPark::from_entity).collect())
    }

    /// Finds a national park by its ID.
    ///
    /// # Returns
    /// - `Ok(Some(NationalPark))` - Park found
    /// - `Ok(None)` - No park with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<NationalPark>, DbErr> {
        let entity = entity::prelude::NationalPark::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(NationalPark::from_entity))
    }

    /// Checks whether a park with the given name already exists.
    ///
    /// # Returns
    /// - `Ok(true)` - A park with that name exists
    /// - `Ok(false)` - The name is free
    /// - `Err(DbErr)` - Database error during count query
    pub async fn exists_by_name(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::NationalPark::find()
            .filter(entity::national_park::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a park with the given ID exists.
    pub async fn exists_by_id(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::NationalPark::find()
            .filter(entity::national_park::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Creates a national park from create parameters.
    ///
    /// The `created` timestamp is assigned here; callers never supply it.
    ///
    /// # Returns
    /// - `Ok(NationalPark)` - The created park with its assigned ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateNationalParkParams) -> Result<NationalPark, DbErr> {
        let entity = entity::prelude::NationalPark::insert(entity::national_park::ActiveModel {
            name: ActiveValue::Set(params.name),
            state: ActiveValue::Set(params.state),
            established: ActiveValue::Set(params.established),
            created: ActiveValue::Set(Utc::now()),
            picture: ActiveValue::Set(params.picture),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(NationalPark::from_entity(entity))
    }

    /// Updates an existing national park from update parameters.
    ///
    /// The `created` timestamp is left untouched.
    ///
    /// # Returns
    /// - `Ok(NationalPark)` - The updated park
    /// - `Err(DbErr::RecordNotFound)` - No park with the given ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateNationalParkParams) -> Result<NationalPark, DbErr> {
        let existing = entity::prelude::NationalPark::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("National park {} not found", params.id))
            })?;

        let entity = entity::prelude::NationalPark::update(entity::national_park::ActiveModel {
            id: ActiveValue::Unchanged(existing.id),
            name: ActiveValue::Set(params.name),
            state: ActiveValue::Set(params.state),
            established: ActiveValue::Set(params.established),
            created: ActiveValue::Unchanged(existing.created),
            picture: ActiveValue::Set(params.picture),
        })
        .exec(self.db)
        .await?;

        Ok(NationalPark::from_entity(entity))
    }

    /// Deletes a national park by ID.
    ///
    /// # Returns
    /// - `Ok(true)` - The park was deleted
    /// - `Ok(false)` - No park with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::NationalPark::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
