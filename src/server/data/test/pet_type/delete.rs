use super::*;

/// Tests deleting an unused pet type.
///
/// Expected: Ok(true)
#[tokio::test]
async fn deletes_unused_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pet_type = factory::create_pet_type(db).await?;

    let deleted = PetTypeRepository::new(db).delete(pet_type.id).await?;

    assert!(deleted);
    assert!(PetType::find_by_id(pet_type.id).one(db).await?.is_none());

    Ok(())
}

/// Tests deleting a pet type still referenced by a pet.
///
/// Verifies that the foreign key on `pets.type_id` blocks the delete.
///
/// Expected: Err(DbErr) with the type still present
#[tokio::test]
async fn fails_while_referenced_by_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, pet_type, _) = factory::helpers::create_pet_with_dependencies(db).await?;

    let result = PetTypeRepository::new(db).delete(pet_type.id).await;

    assert!(result.is_err());
    assert!(PetType::find_by_id(pet_type.id).one(db).await?.is_some());

    Ok(())
}

/// Tests deleting a nonexistent pet type.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = PetTypeRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}
