use super::*;

/// Tests deleting an existing park.
///
/// Expected: Ok(true) and the record is gone
#[tokio::test]
async fn deletes_existing_park() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::national_park::create_park(db).await?;

    let repo = NationalParkRepository::new(db);

    assert!(repo.delete(park.id).await?);

    let remaining = entity::prelude::NationalPark::find_by_id(park.id)
        .one(db)
        .await?;
    assert!(remaining.is_none());

    Ok(())
}

/// Tests deleting a park that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn delete_missing_park_returns_false() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NationalParkRepository::new(db);

    assert!(!repo.delete(777).await?);

    Ok(())
}
