use super::*;

/// Tests that all trails are returned ordered by name with parks joined.
///
/// Expected: Ok with trails sorted alphabetically, each carrying its park
#[tokio::test]
async fn gets_all_trails_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::national_park::create_park(db).await?;
    factory::trail::TrailFactory::new(db, park.id)
        .name("Skyline Loop")
        .build()
        .await?;
    factory::trail::TrailFactory::new(db, park.id)
        .name("Bright Angel")
        .build()
        .await?;

    let repo = TrailRepository::new(db);
    let trails = repo.get_all().await?;

    let names: Vec<&str> = trails.iter().map(|trail| trail.name.as_str()).collect();
    assert_eq!(names, vec!["Bright Angel", "Skyline Loop"]);
    assert!(trails.iter().all(|trail| trail.national_park.is_some()));

    Ok(())
}

/// Tests fetching trails from an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_list_when_no_trails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TrailRepository::new(db);
    let trails = repo.get_all().await?;

    assert!(trails.is_empty());

    Ok(())
}
