//! Trail factory for creating test trail entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test trails with customizable fields.
///
/// Trails require an existing national park; pass the owning park's id to
/// `new`. Remaining fields default to unique or fixed values and can be
/// overridden as needed.
pub struct TrailFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    distance: f64,
    elevation: f64,
    difficulty: String,
    national_park_id: i32,
}

impl<'a> TrailFactory<'a> {
    /// Creates a new TrailFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Trail {id}"` where id is auto-incremented
    /// - distance: `4.2`
    /// - elevation: `1200.0`
    /// - difficulty: `"Moderate"`
    pub fn new(db: &'a DatabaseConnection, national_park_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Trail {}", id),
            distance: 4.2,
            elevation: 1200.0,
            difficulty: "Moderate".to_string(),
            national_park_id,
        }
    }

    /// Sets the name for the trail.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the distance in kilometres.
    pub fn distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    /// Sets the elevation in metres.
    pub fn elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    /// Sets the stored difficulty string.
    pub fn difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    /// Builds and inserts the trail entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::trail::Model)` - Created trail entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::trail::Model, DbErr> {
        entity::trail::ActiveModel {
            name: ActiveValue::Set(self.name),
            distance: ActiveValue::Set(self.distance),
            elevation: ActiveValue::Set(self.elevation),
            difficulty: ActiveValue::Set(self.difficulty),
            created: ActiveValue::Set(Utc::now()),
            national_park_id: ActiveValue::Set(self.national_park_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a trail with default values belonging to the given park.
///
/// Shorthand for `TrailFactory::new(db, national_park_id).build().await`.
pub async fn create_trail(
    db: &DatabaseConnection,
    national_park_id: i32,
) -> Result<entity::trail::Model, DbErr> {
    TrailFactory::new(db, national_park_id).build().await
}
