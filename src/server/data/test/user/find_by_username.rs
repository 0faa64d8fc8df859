use super::*;

/// Tests looking up an existing user by username.
///
/// Expected: Ok(Some(Model)) with the stored hash available for verification
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(UserEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("alice")
        .password_hash("stored-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_username("alice").await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.password_hash, "stored-hash");

    Ok(())
}

/// Tests looking up a username with no matching account.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(UserEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let found = repo.find_by_username("nobody").await?;

    assert!(found.is_none());

    Ok(())
}
