use super::*;

/// Tests a user holding the required role.
///
/// Verifies that the AuthGuard authenticates the Basic credentials and returns the
/// user when they hold the role.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn grants_access_with_matching_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .username("owneradmin")
        .password("pw")
        .role("ROLE_OWNER_ADMIN")
        .build()
        .await?;

    let state = secured_state(db);
    let headers = basic_headers("owneradmin", "pw");
    let user = AuthGuard::new(&state, &headers)
        .require(&[Permission::OwnerAdmin])
        .await?
        .unwrap();

    assert_eq!(user.username, "owneradmin");

    Ok(())
}

/// Tests a guard accepting several roles.
///
/// Verifies that holding any one of the listed roles is enough.
///
/// Expected: Ok(Some(User)) for a vet admin on an owner-or-vet endpoint
#[tokio::test]
async fn accepts_any_listed_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .username("vetadmin")
        .password("pw")
        .role("ROLE_VET_ADMIN")
        .build()
        .await?;

    let state = secured_state(db);
    let headers = basic_headers("vetadmin", "pw");
    let result = AuthGuard::new(&state, &headers)
        .require(&[Permission::OwnerAdmin, Permission::VetAdmin])
        .await?;

    assert!(result.is_some());

    Ok(())
}

/// Tests a valid user lacking the required role.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_user_without_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .username("vetadmin")
        .password("pw")
        .role("ROLE_VET_ADMIN")
        .build()
        .await?;

    let state = secured_state(db);
    let headers = basic_headers("vetadmin", "pw");
    let result = AuthGuard::new(&state, &headers)
        .require(&[Permission::OwnerAdmin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingCredentials)
#[tokio::test]
async fn rejects_missing_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let state = secured_state(db);
    let headers = HeaderMap::new();
    let result = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingCredentials))
    ));

    Ok(())
}

/// Tests a wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .username("admin")
        .password("admin")
        .role("ROLE_ADMIN")
        .build()
        .await?;

    let state = secured_state(db);
    let headers = basic_headers("admin", "nope");
    let result = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
    ));

    Ok(())
}

/// Tests the guard with security disabled.
///
/// Verifies that no credentials are required and no user is returned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn skips_check_when_security_disabled() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let state = AppState::new(db.clone(), false, TEST_BCRYPT_COST);
    let headers = HeaderMap::new();
    let result = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert!(result.is_none());

    Ok(())
}
