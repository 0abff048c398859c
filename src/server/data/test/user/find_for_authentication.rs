use super::*;

/// Tests loading a user with hash and roles.
///
/// Expected: Ok(Some) with the stored hash verifying the factory password
#[tokio::test]
async fn returns_user_hash_and_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .role("ROLE_VET_ADMIN")
        .build()
        .await?;

    let (user, hash) = UserRepository::new(db)
        .find_for_authentication(&created.username)
        .await?
        .unwrap();

    assert_eq!(user.username, created.username);
    assert_eq!(user.roles, vec!["ROLE_VET_ADMIN"]);
    assert!(bcrypt::verify(factory::user::DEFAULT_PASSWORD, &hash).unwrap());

    Ok(())
}

/// Tests loading an unknown user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_for_authentication("nobody").await?.is_none());
    assert!(repo.find_by_username("nobody").await?.is_none());
    assert!(!repo.exists("nobody").await?);

    Ok(())
}
