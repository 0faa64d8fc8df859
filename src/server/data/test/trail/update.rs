use super::*;

/// Tests updating every mutable field of a trail, including moving it to a
/// different park.
///
/// Expected: Ok with updated fields and unchanged created timestamp
#[tokio::test]
async fn updates_trail_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, created) = factory::helpers::create_trail_with_park(db).await?;
    let other_park = factory::national_park::create_park(db).await?;

    let repo = TrailRepository::new(db);

    let updated = repo
        .update(UpdateTrailParams {
            id: created.id,
            name: "Kalalau Trail".to_string(),
            distance: 17.7,
            elevation: 1500.0,
            difficulty: Difficulty::Difficult,
            national_park_id: other_park.id,
        })
        .await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Kalalau Trail");
    assert_eq!(updated.distance, 17.7);
    assert_eq!(updated.elevation, 1500.0);
    assert_eq!(updated.difficulty, Difficulty::Difficult);
    assert_eq!(updated.national_park_id, other_park.id);
    assert_eq!(updated.created, created.created);

    Ok(())
}

/// Tests updating a trail that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn update_missing_trail_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::national_park::create_park(db).await?;

    let repo = TrailRepository::new(db);

    let result = repo
        .update(UpdateTrailParams {
            id: 31337,
            name: "Ghost Trail".to_string(),
            distance: 1.0,
            elevation: 10.0,
            difficulty: Difficulty::Easy,
            national_park_id: park.id,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
