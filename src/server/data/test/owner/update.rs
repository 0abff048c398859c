use super::*;

/// Tests replacing the contact details of an owner.
///
/// Verifies that all fields are overwritten and the owner keeps their pets.
///
/// Expected: Ok(Some(Owner)) with new values and the existing pet
#[tokio::test]
async fn updates_owner_and_keeps_pets() -> Result<(), AppError> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, pet) = factory::helpers::create_pet_with_dependencies(db).await?;

    let updated = OwnerRepository::new(db)
        .update(owner.id, owner_param("Georgina", "Frank"))
        .await?
        .unwrap();

    assert_eq!(updated.id, owner.id);
    assert_eq!(updated.first_name, "Georgina");
    assert_eq!(updated.last_name, "Frank");
    assert_eq!(updated.pets.len(), 1);
    assert_eq!(updated.pets[0].id, pet.id);

    let db_owner = Owner::find_by_id(owner.id).one(db).await?.unwrap();
    assert_eq!(db_owner.first_name, "Georgina");

    Ok(())
}

/// Tests updating a nonexistent owner.
///
/// Expected: Ok(None) and no row inserted
#[tokio::test]
async fn returns_none_for_missing_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = OwnerRepository::new(db)
        .update(999, owner_param("George", "Franklin"))
        .await?;

    assert!(result.is_none());
    assert_eq!(Owner::find().count(db).await?, 0);

    Ok(())
}
