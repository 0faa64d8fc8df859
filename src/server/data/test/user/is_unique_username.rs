use super::*;

/// Tests the uniqueness check for a free and a taken username.
///
/// Expected: true when unclaimed, false once an account holds the name
#[tokio::test]
async fn reports_username_availability() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(UserEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.is_unique_username("fresh_name").await?);

    factory::user::UserFactory::new(db)
        .username("fresh_name")
        .build()
        .await?;

    assert!(!repo.is_unique_username("fresh_name").await?);

    Ok(())
}
