use super::*;

/// Tests creating a national park with every field supplied.
///
/// Verifies that the repository persists the name, state, established date,
/// and picture bytes, and that the created timestamp is assigned on insert.
///
/// Expected: Ok with the created park
#[tokio::test]
async fn creates_park_with_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NationalParkRepository::new(db);
    let established = Utc.with_ymd_and_hms(1872, 3, 1, 0, 0, 0).unwrap();

    let park = repo
        .create(CreateNationalParkParams {
            name: "Yellowstone".to_string(),
            state: "Wyoming".to_string(),
            established,
            picture: Some(vec![0xFF, 0xD8, 0xFF]),
        })
        .await?;

    assert_eq!(park.name, "Yellowstone");
    assert_eq!(park.state, "Wyoming");
    assert_eq!(park.established, established);
    assert_eq!(park.picture, Some(vec![0xFF, 0xD8, 0xFF]));

    // Verify the park exists in the database
    let db_park = entity::prelude::NationalPark::find_by_id(park.id)
        .one(db)
        .await?;
    assert!(db_park.is_some());
    assert_eq!(db_park.unwrap().name, "Yellowstone");

    Ok(())
}

/// Tests creating a national park without a picture.
///
/// Expected: Ok with picture stored as None
#[tokio::test]
async fn creates_park_without_picture() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NationalParkRepository::new(db);

    let park = repo
        .create(CreateNationalParkParams {
            name: "Zion".to_string(),
            state: "Utah".to_string(),
            established: Utc.with_ymd_and_hms(1919, 11, 19, 0, 0, 0).unwrap(),
            picture: None,
        })
        .await?;

    assert_eq!(park.picture, None);

    Ok(())
}

/// Tests that inserting a second park with the same name fails.
///
/// The name column carries a unique constraint; duplicate checks in the
/// service layer are a courtesy, the database enforces the invariant.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NationalParkRepository::new(db);
    let params = CreateNationalParkParams {
        name: "Acadia".to_string(),
        state: "Maine".to_string(),
        established: Utc.with_ymd_and_hms(1916, 7, 8, 0, 0, 0).unwrap(),
        picture: None,
    };

    repo.create(params.clone()).await?;
    let result = repo.create(params).await;

    assert!(result.is_err());

    Ok(())
}
