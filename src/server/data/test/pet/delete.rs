use super::*;

/// Tests deleting a pet removes its visits.
///
/// Expected: Ok(true) with pet and visit rows gone, owner kept
#[tokio::test]
async fn deletes_pet_with_visits() -> Result<(), AppError> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, pet, visit) = factory::helpers::create_visit_with_dependencies(db).await?;

    let deleted = PetRepository::new(db).delete(pet.id).await?;

    assert!(deleted);
    assert!(Pet::find_by_id(pet.id).one(db).await?.is_none());
    assert!(Visit::find_by_id(visit.id).one(db).await?.is_none());
    assert!(Owner::find_by_id(owner.id).one(db).await?.is_some());

    Ok(())
}

/// Tests deleting a nonexistent pet.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_pet() -> Result<(), AppError> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = PetRepository::new(db).delete(999).await?;

    assert!(!deleted);
    assert!(!PetRepository::new(db).exists(999).await?);

    Ok(())
}
