use super::*;

/// Tests creating a user with roles.
///
/// Verifies that the stored password is the supplied hash and one role row is
/// written per role.
///
/// Expected: Ok(User) with both roles
#[tokio::test]
async fn creates_user_with_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(
            CreateUserParam {
                username: "secondAdmin".to_string(),
                password: "password".to_string(),
                enabled: true,
                roles: vec!["ROLE_OWNER_ADMIN".to_string(), "ROLE_ADMIN".to_string()],
            },
            "$2b$04$hash".to_string(),
        )
        .await?;

    assert_eq!(user.username, "secondAdmin");
    assert!(user.has_role("ROLE_ADMIN"));
    assert!(user.has_role("ROLE_OWNER_ADMIN"));
    assert_eq!(Role::find().count(db).await?, 2);

    let stored = User::find_by_id("secondAdmin".to_string()).one(db).await?.unwrap();
    assert_eq!(stored.password, "$2b$04$hash");

    Ok(())
}

/// Tests creating a user whose username is taken.
///
/// Expected: Err(DbErr) with the original roles untouched
#[tokio::test]
async fn fails_for_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("admin")
        .role("ROLE_ADMIN")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(
            CreateUserParam {
                username: "admin".to_string(),
                password: "password".to_string(),
                enabled: true,
                roles: vec!["ROLE_VET_ADMIN".to_string()],
            },
            "$2b$04$hash".to_string(),
        )
        .await;

    assert!(result.is_err());
    assert_eq!(Role::find().count(db).await?, 1);

    Ok(())
}
