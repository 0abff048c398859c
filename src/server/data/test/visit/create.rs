use super::*;

/// Tests creating a visit for a pet.
///
/// Expected: Ok(Visit) with the given date, description and pet
#[tokio::test]
async fn creates_visit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, pet) = factory::helpers::create_pet_with_dependencies(db).await?;

    let visit = VisitRepository::new(db)
        .create(CreateVisitParam {
            date: visit_date(),
            description: "rabies shot".to_string(),
            pet_id: pet.id,
        })
        .await?;

    assert!(visit.id > 0);
    assert_eq!(visit.date, visit_date());
    assert_eq!(visit.description, "rabies shot");
    assert_eq!(visit.pet_id, pet.id);

    Ok(())
}

/// Tests creating a visit for a nonexistent pet.
///
/// Verifies that the foreign key on `visits.pet_id` rejects the insert.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_missing_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = VisitRepository::new(db)
        .create(CreateVisitParam {
            date: visit_date(),
            description: "rabies shot".to_string(),
            pet_id: 999,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
