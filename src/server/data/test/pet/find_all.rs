use super::*;

/// Tests listing all pets.
///
/// Verifies that owned and unowned pets are returned in ascending id order.
///
/// Expected: Ok with both pets
#[tokio::test]
async fn returns_all_pets_in_id_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, pet_type, owned) = factory::helpers::create_pet_with_dependencies(db).await?;
    let stray = factory::create_pet(db, pet_type.id, None).await?;

    let pets = PetRepository::new(db).find_all().await?;

    let ids: Vec<i32> = pets.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![owned.id, stray.id]);

    Ok(())
}

/// Tests listing pets when none exist.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_without_pets() -> Result<(), AppError> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pets = PetRepository::new(db).find_all().await?;

    assert!(pets.is_empty());

    Ok(())
}

/// Tests listing pets of selected owners.
///
/// Expected: Ok with only the pets of the requested owners
#[tokio::test]
async fn filters_by_owner_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pet_type = factory::create_pet_type(db).await?;
    let owner = factory::create_owner(db).await?;
    let other = factory::create_owner(db).await?;
    let pet = factory::create_pet(db, pet_type.id, Some(owner.id)).await?;
    factory::create_pet(db, pet_type.id, Some(other.id)).await?;

    let pets = PetRepository::new(db).find_by_owner_ids(&[owner.id]).await?;

    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0].id, pet.id);
    assert!(PetRepository::new(db).find_by_owner_ids(&[]).await?.is_empty());

    Ok(())
}
