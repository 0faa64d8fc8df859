use super::*;

/// Tests filtering trails by their owning park.
///
/// Creates trails in two parks and verifies only the requested park's
/// trails come back.
///
/// Expected: Ok with trails from the requested park only
#[tokio::test]
async fn filters_trails_by_park() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let park_a = factory::national_park::create_park(db).await?;
    let park_b = factory::national_park::create_park(db).await?;

    factory::trail::create_trail(db, park_a.id).await?;
    factory::trail::create_trail(db, park_a.id).await?;
    factory::trail::create_trail(db, park_b.id).await?;

    let repo = TrailRepository::new(db);
    let trails = repo.get_in_national_park(park_a.id).await?;

    assert_eq!(trails.len(), 2);
    assert!(trails
        .iter()
        .all(|trail| trail.national_park_id == park_a.id));

    Ok(())
}

/// Tests querying trails for a park ID with no trails.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_list_for_park_without_trails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::national_park::create_park(db).await?;

    let repo = TrailRepository::new(db);
    let trails = repo.get_in_national_park(park.id).await?;

    assert!(trails.is_empty());

    Ok(())
}
