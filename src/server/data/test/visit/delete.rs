use super::*;

/// Tests deleting a visit.
///
/// Expected: Ok(true) with the visit row gone and the pet kept
#[tokio::test]
async fn deletes_visit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, pet, visit) = factory::helpers::create_visit_with_dependencies(db).await?;

    let deleted = VisitRepository::new(db).delete(visit.id).await?;

    assert!(deleted);
    assert!(Visit::find_by_id(visit.id).one(db).await?.is_none());
    assert!(Pet::find_by_id(pet.id).one(db).await?.is_some());

    Ok(())
}

/// Tests deleting a nonexistent visit.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_visit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = VisitRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}
