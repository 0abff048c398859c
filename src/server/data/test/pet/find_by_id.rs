use super::*;

/// Tests finding a pet with its visits.
///
/// Verifies that the visits of the pet are loaded in id order and visits of
/// other pets are not included.
///
/// Expected: Ok(Some(Pet)) with exactly its two visits
#[tokio::test]
async fn finds_pet_with_visits() -> Result<(), AppError> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, pet_type, pet) = factory::helpers::create_pet_with_dependencies(db).await?;
    let other = factory::create_pet(db, pet_type.id, Some(owner.id)).await?;
    let first = factory::create_visit(db, pet.id).await?;
    let second = factory::create_visit(db, pet.id).await?;
    factory::create_visit(db, other.id).await?;

    let found = PetRepository::new(db).find_by_id(pet.id).await?.unwrap();

    let visit_ids: Vec<i32> = found.visits.iter().map(|v| v.id).collect();
    assert_eq!(visit_ids, vec![first.id, second.id]);
    assert_eq!(found.pet_type.id, pet_type.id);

    Ok(())
}

/// Tests finding a nonexistent pet.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_pet() -> Result<(), AppError> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = PetRepository::new(db).find_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
