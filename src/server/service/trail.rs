use sea_orm::DatabaseConnection;

use crate::server::{
    data::{national_park::NationalParkRepository, trail::TrailRepository},
    error::AppError,
    model::trail::{CreateTrailParams, Trail, UpdateTrailParams},
};

pub struct TrailService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrailService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all trails with their owning parks
    pub async fn get_all(&self) -> Result<Vec<Trail>, AppError> {
        let repo = TrailRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a specific trail by ID with its owning park
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Trail>, AppError> {
        let repo = TrailRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Gets all trails in a national park
    /// Returns None if the park itself does not exist
    pub async fn get_in_national_park(
        &self,
        national_park_id: i32,
    ) -> Result<Option<Vec<Trail>>, AppError> {
        let park_repo = NationalParkRepository::new(self.db);

        if !park_repo.exists_by_id(national_park_id).await? {
            return Ok(None);
        }

        let repo = TrailRepository::new(self.db);

        Ok(Some(repo.get_in_national_park(national_park_id).await?))
    }

    /// Creates a new trail after checking the name is unclaimed.
    ///
    /// A duplicate name yields `AppError::RecordExists`, rendered as 404 Not
    /// Found with "Trail Exists!" in the body. A reference to a missing park
    /// fails the insert and surfaces as a save failure.
    pub async fn create(&self, params: CreateTrailParams) -> Result<Trail, AppError> {
        let repo = TrailRepository::new(self.db);

        if repo.exists_by_name(&params.name).await? {
            return Err(AppError::RecordExists("Trail Exists!".to_string()));
        }

        let name = params.name.clone();
        repo.create(params).await.map_err(|err| {
            tracing::error!("Failed to create trail '{}': {}", name, err);
            AppError::SaveFailed(format!(
                "Something went wrong while creating the record {}",
                name
            ))
        })
    }

    /// Updates an existing trail
    pub async fn update(&self, params: UpdateTrailParams) -> Result<(), AppError> {
        let repo = TrailRepository::new(self.db);

        let name = params.name.clone();
        repo.update(params).await.map_err(|err| {
            tracing::error!("Failed to update trail '{}': {}", name, err);
            AppError::SaveFailed(format!(
                "Something went wrong while updating the record {}",
                name
            ))
        })?;

        Ok(())
    }

    /// Deletes a trail
    /// Returns true if deleted, false if no trail with that ID exists
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = TrailRepository::new(self.db);

        let Some(trail) = repo.get_by_id(id).await? else {
            return Ok(false);
        };

        repo.delete(trail.id).await.map_err(|err| {
            tracing::error!("Failed to delete trail '{}': {}", trail.name, err);
            AppError::SaveFailed(format!(
                "Something went wrong while deleting the record {}",
                trail.name
            ))
        })?;

        Ok(true)
    }
}
