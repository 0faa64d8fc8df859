use super::*;

/// Tests finding a park by its ID.
///
/// Expected: Ok(Some(NationalPark)) with matching fields
#[tokio::test]
async fn gets_existing_park() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::national_park::NationalParkFactory::new(db)
        .name("Glacier")
        .state("Montana")
        .build()
        .await?;

    let repo = NationalParkRepository::new(db);
    let park = repo.get_by_id(created.id).await?;

    assert!(park.is_some());
    let park = park.unwrap();
    assert_eq!(park.id, created.id);
    assert_eq!(park.name, "Glacier");
    assert_eq!(park.state, "Montana");

    Ok(())
}

/// Tests looking up an ID with no matching park.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_park() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NationalParkRepository::new(db);
    let park = repo.get_by_id(9999).await?;

    assert!(park.is_none());

    Ok(())
}
