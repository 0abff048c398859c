use super::*;

/// Tests creating a pet for an owner.
///
/// Verifies that the created pet carries its resolved pet type, its owner and an
/// empty visit history.
///
/// Expected: Ok(Pet) with type name and owner set
#[tokio::test]
async fn creates_pet_for_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let pet_type = factory::pet_type::create_pet_type_named(db, "hamster").await?;

    let pet = PetRepository::new(db)
        .create(CreatePetParam {
            name: "Basil".to_string(),
            birth_date: birth_date(),
            type_id: pet_type.id,
            owner_id: Some(owner.id),
        })
        .await?;

    assert!(pet.id > 0);
    assert_eq!(pet.name, "Basil");
    assert_eq!(pet.birth_date, birth_date());
    assert_eq!(pet.pet_type.name, "hamster");
    assert_eq!(pet.owner_id, Some(owner.id));
    assert!(pet.visits.is_empty());

    Ok(())
}

/// Tests creating a pet without an owner.
///
/// Expected: Ok(Pet) with no owner
#[tokio::test]
async fn creates_pet_without_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pet_type = factory::create_pet_type(db).await?;

    let pet = PetRepository::new(db)
        .create(CreatePetParam {
            name: "Stray".to_string(),
            birth_date: birth_date(),
            type_id: pet_type.id,
            owner_id: None,
        })
        .await?;

    assert_eq!(pet.owner_id, None);
    assert!(Pet::find_by_id(pet.id).one(db).await?.is_some());

    Ok(())
}
