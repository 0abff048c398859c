use super::*;

/// Tests finding an owner with pets and visits.
///
/// Verifies that the owner is returned with their pet, the pet's type and the
/// pet's visit attached.
///
/// Expected: Ok(Some(Owner)) with one pet holding one visit
#[tokio::test]
async fn finds_owner_with_pets_and_visits() -> Result<(), AppError> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, pet_type, pet, visit) =
        factory::helpers::create_visit_with_dependencies(db).await?;

    let repo = OwnerRepository::new(db);
    let found = repo.find_by_id(owner.id).await?.unwrap();

    assert_eq!(found.id, owner.id);
    assert_eq!(found.pets.len(), 1);
    assert_eq!(found.pets[0].id, pet.id);
    assert_eq!(found.pets[0].pet_type.name, pet_type.name);
    assert_eq!(found.pets[0].visits.len(), 1);
    assert_eq!(found.pets[0].visits[0].id, visit.id);

    Ok(())
}

/// Tests that pets of other owners are not attached.
///
/// Expected: Ok(Some(Owner)) with only the owner's own pet
#[tokio::test]
async fn excludes_pets_of_other_owners() -> Result<(), AppError> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pet_type = factory::create_pet_type(db).await?;
    let owner = factory::create_owner(db).await?;
    let other = factory::create_owner(db).await?;
    let own_pet = factory::create_pet(db, pet_type.id, Some(owner.id)).await?;
    factory::create_pet(db, pet_type.id, Some(other.id)).await?;
    factory::create_pet(db, pet_type.id, None).await?;

    let found = OwnerRepository::new(db).find_by_id(owner.id).await?.unwrap();

    assert_eq!(found.pets.len(), 1);
    assert_eq!(found.pets[0].id, own_pet.id);

    Ok(())
}

/// Tests finding a nonexistent owner.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = OwnerRepository::new(db).find_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
