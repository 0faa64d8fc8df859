use sea_orm::DatabaseConnection;

use crate::server::{
    data::national_park::NationalParkRepository,
    error::AppError,
    model::national_park::{CreateNationalParkParams, NationalPark, UpdateNationalParkParams},
};

pub struct NationalParkService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NationalParkService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all national parks ordered by name
    pub async fn get_all(&self) -> Result<Vec<NationalPark>, AppError> {
        let repo = NationalParkRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a specific national park by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<NationalPark>, AppError> {
        let repo = NationalParkRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Creates a new national park after checking the name is unclaimed.
    ///
    /// A duplicate name yields `AppError::RecordExists`, which renders as
    /// 404 Not Found with "National Park Exists!" in the body. That mapping
    /// is part of the published contract for this endpoint.
    pub async fn create(&self, params: CreateNationalParkParams) -> Result<NationalPark, AppError> {
        let repo = NationalParkRepository::new(self.db);

        if repo.exists_by_name(&params.name).await? {
            return Err(AppError::RecordExists("National Park Exists!".to_string()));
        }

        let name = params.name.clone();
        repo.create(params).await.map_err(|err| {
            tracing::error!("Failed to create national park '{}': {}", name, err);
            AppError::SaveFailed(format!(
                "Something went wrong while creating the record {}",
                name
            ))
        })
    }

    /// Updates an existing national park.
    ///
    /// A missing record surfaces as a save failure, not a 404; the ID in the
    /// path has already been matched against the payload at the controller.
    pub async fn update(&self, params: UpdateNationalParkParams) -> Result<(), AppError> {
        let repo = NationalParkRepository::new(self.db);

        let name = params.name.clone();
        repo.update(params).await.map_err(|err| {
            tracing::error!("Failed to update national park '{}': {}", name, err);
            AppError::SaveFailed(format!(
                "Something went wrong while updating the record {}",
                name
            ))
        })?;

        Ok(())
    }

    /// Deletes a national park
    /// Returns true if deleted, false if no park with that ID exists
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = NationalParkRepository::new(self.db);

        let Some(park) = repo.get_by_id(id).await? else {
            return Ok(false);
        };

        repo.delete(park.id).await.map_err(|err| {
            tracing::error!("Failed to delete national park '{}': {}", park.name, err);
            AppError::SaveFailed(format!(
                "Something went wrong while deleting the record {}",
                park.name
            ))
        })?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use test_utils::{builder::TestBuilder, factory};

    /// Tests that creating a park with a taken name yields the published
    /// duplicate error rather than a raw constraint violation.
    ///
    /// Expected: Err(RecordExists) carrying "National Park Exists!"
    #[tokio::test]
    async fn duplicate_name_create_is_rejected() {
        let test = TestBuilder::new().with_park_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::national_park::NationalParkFactory::new(db)
            .name("Yosemite")
            .build()
            .await
            .unwrap();

        let service = NationalParkService::new(db);
        let result = service
            .create(CreateNationalParkParams {
                name: "Yosemite".to_string(),
                state: "California".to_string(),
                established: Utc.with_ymd_and_hms(1890, 10, 1, 0, 0, 0).unwrap(),
                picture: None,
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::RecordExists(ref msg)) if msg == "National Park Exists!"
        ));
    }

    /// Tests that a fresh name passes the duplicate check and is created.
    ///
    /// Expected: Ok with the new park
    #[tokio::test]
    async fn unclaimed_name_create_succeeds() {
        let test = TestBuilder::new().with_park_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = NationalParkService::new(db);
        let park = service
            .create(CreateNationalParkParams {
                name: "Arches".to_string(),
                state: "Utah".to_string(),
                established: Utc.with_ymd_and_hms(1971, 11, 12, 0, 0, 0).unwrap(),
                picture: None,
            })
            .await
            .unwrap();

        assert_eq!(park.name, "Arches");
        assert_eq!(
            service.get_by_id(park.id).await.unwrap().unwrap().name,
            "Arches"
        );
    }

    /// Tests deleting a park ID that does not exist.
    ///
    /// Expected: Ok(false), which the controller renders as 404
    #[tokio::test]
    async fn delete_missing_park_reports_false() {
        let test = TestBuilder::new().with_park_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = NationalParkService::new(db);

        assert!(!service.delete(8888).await.unwrap());
    }
}
