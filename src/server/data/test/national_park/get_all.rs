use super::*;

/// Tests that all parks are returned ordered by name.
///
/// Expected: Ok with parks sorted alphabetically regardless of insert order
#[tokio::test]
async fn gets_all_parks_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::national_park::NationalParkFactory::new(db)
        .name("Zion")
        .build()
        .await?;
    factory::national_park::NationalParkFactory::new(db)
        .name("Acadia")
        .build()
        .await?;
    factory::national_park::NationalParkFactory::new(db)
        .name("Glacier")
        .build()
        .await?;

    let repo = NationalParkRepository::new(db);
    let parks = repo.get_all().await?;

    let names: Vec<&str> = parks.iter().map(|park| park.name.as_str()).collect();
    assert_eq!(names, vec!["Acadia", "Glacier", "Zion"]);

    Ok(())
}

/// Tests fetching parks from an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_list_when_no_parks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NationalParkRepository::new(db);
    let parks = repo.get_all().await?;

    assert!(parks.is_empty());

    Ok(())
}
