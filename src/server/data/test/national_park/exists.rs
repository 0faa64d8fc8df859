use super::*;

/// Tests the name existence check for a taken and a free name.
///
/// Expected: true for the stored name, false otherwise
#[tokio::test]
async fn checks_existence_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::national_park::NationalParkFactory::new(db)
        .name("Olympic")
        .build()
        .await?;

    let repo = NationalParkRepository::new(db);

    assert!(repo.exists_by_name("Olympic").await?);
    assert!(!repo.exists_by_name("Denali").await?);

    Ok(())
}

/// Tests the ID existence check for a present and an absent record.
///
/// Expected: true for the stored ID, false otherwise
#[tokio::test]
async fn checks_existence_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::national_park::create_park(db).await?;

    let repo = NationalParkRepository::new(db);

    assert!(repo.exists_by_id(park.id).await?);
    assert!(!repo.exists_by_id(park.id + 1000).await?);

    Ok(())
}
