use super::*;

/// Tests finding a trail by ID with its owning park joined in.
///
/// Expected: Ok(Some(Trail)) with national_park populated
#[tokio::test]
async fn gets_trail_with_owning_park() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (park, created) = factory::helpers::create_trail_with_park(db).await?;

    let repo = TrailRepository::new(db);
    let trail = repo.get_by_id(created.id).await?;

    assert!(trail.is_some());
    let trail = trail.unwrap();
    assert_eq!(trail.id, created.id);
    assert_eq!(trail.national_park_id, park.id);

    let joined = trail.national_park.unwrap();
    assert_eq!(joined.id, park.id);
    assert_eq!(joined.name, park.name);

    Ok(())
}

/// Tests looking up an ID with no matching trail.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_trail() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TrailRepository::new(db);
    let trail = repo.get_by_id(12345).await?;

    assert!(trail.is_none());

    Ok(())
}

/// Tests reading a trail whose stored difficulty string is not a known rating.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn unknown_stored_difficulty_is_an_error() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::national_park::create_park(db).await?;
    let created = factory::trail::TrailFactory::new(db, park.id)
        .difficulty("Vertical")
        .build()
        .await?;

    let repo = TrailRepository::new(db);
    let result = repo.get_by_id(created.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
