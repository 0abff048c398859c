use super::*;

/// Tests replacing a pet's fields.
///
/// Verifies that name, birth date and type change while the owner and visits
/// are kept.
///
/// Expected: Ok(Some(Pet)) with new values
#[tokio::test]
async fn updates_pet_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, pet, visit) = factory::helpers::create_visit_with_dependencies(db).await?;
    let bird = factory::pet_type::create_pet_type_named(db, "bird").await?;

    let updated = PetRepository::new(db)
        .update(
            pet.id,
            UpdatePetParam {
                name: "Tweety".to_string(),
                birth_date: birth_date(),
                type_id: bird.id,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Tweety");
    assert_eq!(updated.birth_date, birth_date());
    assert_eq!(updated.pet_type.name, "bird");
    assert_eq!(updated.owner_id, Some(owner.id));
    assert_eq!(updated.visits[0].id, visit.id);

    Ok(())
}

/// Tests updating a nonexistent pet.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_pet() -> Result<(), AppError> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pet_type = factory::create_pet_type(db).await?;

    let result = PetRepository::new(db)
        .update(
            999,
            UpdatePetParam {
                name: "Ghost".to_string(),
                birth_date: birth_date(),
                type_id: pet_type.id,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
