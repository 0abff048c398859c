use super::*;

/// Tests renaming a pet type.
///
/// Expected: Ok(Some(PetType)) with the new name stored
#[tokio::test]
async fn renames_pet_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pet_type = factory::create_pet_type(db).await?;

    let updated = PetTypeRepository::new(db)
        .update(pet_type.id, pet_type_param("snake"))
        .await?
        .unwrap();

    assert_eq!(updated.name, "snake");
    let stored = PetType::find_by_id(pet_type.id).one(db).await?.unwrap();
    assert_eq!(stored.name, "snake");

    Ok(())
}

/// Tests renaming a nonexistent pet type.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PetTypeRepository::new(db)
        .update(999, pet_type_param("snake"))
        .await?;

    assert!(result.is_none());

    Ok(())
}
