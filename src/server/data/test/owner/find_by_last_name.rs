use super::*;

/// Tests filtering owners by last name prefix.
///
/// Verifies that every owner whose last name starts with the prefix is returned
/// in ascending id order, and no one else.
///
/// Expected: Ok with Betty and Harold Davis in id order
#[tokio::test]
async fn returns_matching_owners_in_id_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::owner::create_owner_named(db, "George", "Franklin").await?;
    let betty = factory::owner::create_owner_named(db, "Betty", "Davis").await?;
    factory::owner::create_owner_named(db, "Eduardo", "Rodriquez").await?;
    let harold = factory::owner::create_owner_named(db, "Harold", "Davis").await?;

    let owners = OwnerRepository::new(db).find_by_last_name("Davis").await?;

    let ids: Vec<i32> = owners.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![betty.id, harold.id]);

    Ok(())
}

/// Tests that the filter matches a prefix rather than the full name.
///
/// Expected: Ok with the owner whose last name begins with the prefix
#[tokio::test]
async fn matches_prefix() -> Result<(), AppError> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::owner::create_owner_named(db, "Maria", "Escobito").await?;
    factory::owner::create_owner_named(db, "Jean", "Coleman").await?;

    let owners = OwnerRepository::new(db).find_by_last_name("Esc").await?;

    assert_eq!(owners.len(), 1);
    assert_eq!(owners[0].id, owner.id);

    Ok(())
}

/// Tests filtering with a prefix no owner matches.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_when_nothing_matches() -> Result<(), AppError> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::owner::create_owner_named(db, "George", "Franklin").await?;

    let owners = OwnerRepository::new(db).find_by_last_name("Zzz").await?;

    assert!(owners.is_empty());

    Ok(())
}

/// Tests that LIKE wildcards in the prefix only match themselves.
///
/// Expected: Ok with the owner whose name contains the underscore, and nobody for `%`
#[tokio::test]
async fn treats_wildcards_literally() -> Result<(), AppError> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::owner::create_owner_named(db, "Ann", "O_Hara").await?;
    factory::owner::create_owner_named(db, "Peter", "Olsen").await?;

    let owners = OwnerRepository::new(db).find_by_last_name("O_").await?;
    assert_eq!(owners.len(), 1);
    assert_eq!(owners[0].id, owner.id);

    let owners = OwnerRepository::new(db).find_by_last_name("%").await?;
    assert!(owners.is_empty());

    Ok(())
}
