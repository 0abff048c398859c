use super::*;

/// Tests deleting an owner cascades to pets and visits.
///
/// Verifies that the owner, their pet and the pet's visit are all removed while
/// the pet type remains.
///
/// Expected: Ok(true) with owner, pet and visit rows gone
#[tokio::test]
async fn deletes_owner_with_pets_and_visits() -> Result<(), AppError> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, pet_type, pet, visit) =
        factory::helpers::create_visit_with_dependencies(db).await?;

    let deleted = OwnerRepository::new(db).delete(owner.id).await?;

    assert!(deleted);
    assert!(Owner::find_by_id(owner.id).one(db).await?.is_none());
    assert!(Pet::find_by_id(pet.id).one(db).await?.is_none());
    assert!(Visit::find_by_id(visit.id).one(db).await?.is_none());
    assert!(PetType::find_by_id(pet_type.id).one(db).await?.is_some());

    Ok(())
}

/// Tests that other owners' pets survive the delete.
///
/// Expected: Ok(true) with the other owner's pet still present
#[tokio::test]
async fn keeps_pets_of_other_owners() -> Result<(), AppError> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pet_type = factory::create_pet_type(db).await?;
    let owner = factory::create_owner(db).await?;
    let other = factory::create_owner(db).await?;
    factory::create_pet(db, pet_type.id, Some(owner.id)).await?;
    let other_pet = factory::create_pet(db, pet_type.id, Some(other.id)).await?;

    OwnerRepository::new(db).delete(owner.id).await?;

    assert!(Pet::find_by_id(other_pet.id).one(db).await?.is_some());
    assert_eq!(Pet::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a nonexistent owner.
///
/// Expected: Ok(false) without error
#[tokio::test]
async fn returns_false_for_missing_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = OwnerRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}
