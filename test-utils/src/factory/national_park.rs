//! National park factory for creating test park entities.
//!
//! This module provides factory methods for creating national park entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test national parks with customizable fields.
///
/// Provides a builder pattern for creating park entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::national_park::NationalParkFactory;
///
/// let park = NationalParkFactory::new(&db)
///     .name("Yellowstone")
///     .state("Wyoming")
///     .build()
///     .await?;
/// ```
pub struct NationalParkFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    state: String,
    picture: Option<Vec<u8>>,
}

impl<'a> NationalParkFactory<'a> {
    /// Creates a new NationalParkFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Park {id}"` where id is auto-incremented
    /// - state: `"State {id}"`
    /// - picture: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Park {}", id),
            state: format!("State {}", id),
            picture: None,
        }
    }

    /// Sets the name for the park.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the state for the park.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Sets the stored picture bytes for the park.
    pub fn picture(mut self, picture: Vec<u8>) -> Self {
        self.picture = Some(picture);
        self
    }

    /// Builds and inserts the national park entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::national_park::Model)` - Created park entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::national_park::Model, DbErr> {
        let now = Utc::now();
        entity::national_park::ActiveModel {
            name: ActiveValue::Set(self.name),
            state: ActiveValue::Set(self.state),
            established: ActiveValue::Set(now),
            created: ActiveValue::Set(now),
            picture: ActiveValue::Set(self.picture),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a national park with default values.
///
/// Shorthand for `NationalParkFactory::new(db).build().await`.
pub async fn create_park(db: &DatabaseConnection) -> Result<entity::national_park::Model, DbErr> {
    NationalParkFactory::new(db).build().await
}
