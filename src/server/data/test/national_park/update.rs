use super::*;

/// Tests updating every mutable field of a park.
///
/// Verifies that name, state, established, and picture are replaced while
/// the created timestamp keeps its original value.
///
/// Expected: Ok with updated fields and unchanged created timestamp
#[tokio::test]
async fn updates_park_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::national_park::NationalParkFactory::new(db)
        .name("Old Name")
        .state("Old State")
        .build()
        .await?;

    let repo = NationalParkRepository::new(db);
    let established = Utc.with_ymd_and_hms(1890, 10, 1, 0, 0, 0).unwrap();

    let updated = repo
        .update(UpdateNationalParkParams {
            id: created.id,
            name: "Yosemite".to_string(),
            state: "California".to_string(),
            established,
            picture: Some(vec![1, 2, 3]),
        })
        .await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Yosemite");
    assert_eq!(updated.state, "California");
    assert_eq!(updated.established, established);
    assert_eq!(updated.picture, Some(vec![1, 2, 3]));
    assert_eq!(updated.created, created.created);

    Ok(())
}

/// Tests clearing the stored picture through an update.
///
/// Expected: Ok with picture set to None
#[tokio::test]
async fn update_can_clear_picture() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::national_park::NationalParkFactory::new(db)
        .picture(vec![9, 9, 9])
        .build()
        .await?;

    let repo = NationalParkRepository::new(db);

    let updated = repo
        .update(UpdateNationalParkParams {
            id: created.id,
            name: created.name.clone(),
            state: created.state.clone(),
            established: created.established,
            picture: None,
        })
        .await?;

    assert_eq!(updated.picture, None);

    Ok(())
}

/// Tests updating a park that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn update_missing_park_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NationalParkRepository::new(db);

    let result = repo
        .update(UpdateNationalParkParams {
            id: 4242,
            name: "Ghost Park".to_string(),
            state: "Nowhere".to_string(),
            established: Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
            picture: None,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
