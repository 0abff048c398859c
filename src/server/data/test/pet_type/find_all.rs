use super::*;

/// Tests creating pet types and listing them.
///
/// Expected: Ok with the created types in id order
#[tokio::test]
async fn returns_created_types_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PetTypeRepository::new(db);
    let cat = repo.create(pet_type_param("cat")).await?;
    let dog = repo.create(pet_type_param("dog")).await?;

    let types = repo.find_all().await?;

    assert_eq!(types, vec![cat, dog]);

    Ok(())
}

/// Tests finding a pet type by id.
///
/// Expected: Ok(Some) for an existing type and Ok(None) otherwise
#[tokio::test]
async fn finds_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let lizard = factory::pet_type::create_pet_type_named(db, "lizard").await?;

    let repo = PetTypeRepository::new(db);
    assert_eq!(repo.find_by_id(lizard.id).await?.unwrap().name, "lizard");
    assert!(repo.find_by_id(999).await?.is_none());
    assert!(repo.exists(lizard.id).await?);

    Ok(())
}
