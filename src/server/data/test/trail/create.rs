use super::*;

/// Tests creating a trail inside an existing park.
///
/// Verifies the difficulty is stored in its canonical string form and the
/// created timestamp is assigned on insert.
///
/// Expected: Ok with the created trail
#[tokio::test]
async fn creates_trail_in_park() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::national_park::create_park(db).await?;

    let repo = TrailRepository::new(db);
    let trail = repo
        .create(CreateTrailParams {
            name: "Angels Landing".to_string(),
            distance: 8.7,
            elevation: 450.0,
            difficulty: Difficulty::Experienced,
            national_park_id: park.id,
        })
        .await?;

    assert_eq!(trail.name, "Angels Landing");
    assert_eq!(trail.distance, 8.7);
    assert_eq!(trail.elevation, 450.0);
    assert_eq!(trail.difficulty, Difficulty::Experienced);
    assert_eq!(trail.national_park_id, park.id);

    // Verify the stored difficulty string
    let db_trail = entity::prelude::Trail::find_by_id(trail.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_trail.difficulty, "Experienced");

    Ok(())
}

/// Tests that inserting a second trail with the same name fails.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::national_park::create_park(db).await?;

    let repo = TrailRepository::new(db);
    let params = CreateTrailParams {
        name: "Mist Trail".to_string(),
        distance: 4.8,
        elevation: 600.0,
        difficulty: Difficulty::Moderate,
        national_park_id: park.id,
    };

    repo.create(params.clone()).await?;
    let result = repo.create(params).await;

    assert!(result.is_err());

    Ok(())
}
