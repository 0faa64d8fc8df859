use super::*;

/// Tests creating a user account with a pre-hashed password.
///
/// The returned domain model must not expose the stored hash.
///
/// Expected: Ok with the created account
#[tokio::test]
async fn creates_user_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(UserEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(
            "ranger_rick".to_string(),
            "$argon2id$fake-hash-for-test".to_string(),
            "Admin".to_string(),
        )
        .await?;

    assert_eq!(user.username, "ranger_rick");
    assert_eq!(user.role, "Admin");

    // The stored hash is still in the database
    let entity = repo.find_by_username("ranger_rick").await?.unwrap();
    assert_eq!(entity.password_hash, "$argon2id$fake-hash-for-test");

    Ok(())
}

/// Tests that a duplicate username is rejected by the unique constraint.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(UserEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    repo.create("dupe".to_string(), "hash1".to_string(), "Admin".to_string())
        .await?;
    let result = repo
        .create("dupe".to_string(), "hash2".to_string(), "Admin".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}
