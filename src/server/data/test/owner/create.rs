use super::*;

/// Tests creating an owner.
///
/// Verifies that the repository inserts the owner, assigns an id and returns
/// the stored contact details without pets.
///
/// Expected: Ok with owner persisted
#[tokio::test]
async fn creates_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OwnerRepository::new(db);
    let owner = repo.create(owner_param("George", "Franklin")).await?;

    assert!(owner.id > 0);
    assert_eq!(owner.first_name, "George");
    assert_eq!(owner.last_name, "Franklin");
    assert!(owner.pets.is_empty());

    let db_owner = Owner::find_by_id(owner.id).one(db).await?;
    assert!(db_owner.is_some());

    Ok(())
}

/// Tests creating several owners.
///
/// Verifies that each created owner receives a distinct id.
///
/// Expected: Ok with two rows in the owners table
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OwnerRepository::new(db);
    let first = repo.create(owner_param("George", "Franklin")).await?;
    let second = repo.create(owner_param("Betty", "Davis")).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(Owner::find().count(db).await?, 2);

    Ok(())
}
