use super::*;

/// Tests deleting an existing trail.
///
/// Expected: Ok(true) and the record is gone
#[tokio::test]
async fn deletes_existing_trail() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trail) = factory::helpers::create_trail_with_park(db).await?;

    let repo = TrailRepository::new(db);

    assert!(repo.delete(trail.id).await?);

    let remaining = entity::prelude::Trail::find_by_id(trail.id).one(db).await?;
    assert!(remaining.is_none());

    Ok(())
}

/// Tests deleting a trail that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn delete_missing_trail_returns_false() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TrailRepository::new(db);

    assert!(!repo.delete(424242).await?);

    Ok(())
}
