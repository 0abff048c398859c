use super::*;

/// Tests replacing a visit's date and description.
///
/// Expected: Ok(Some(Visit)) with new values and the same pet
#[tokio::test]
async fn updates_visit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, pet, visit) = factory::helpers::create_visit_with_dependencies(db).await?;

    let updated = VisitRepository::new(db)
        .update(
            visit.id,
            UpdateVisitParam {
                date: visit_date(),
                description: "neutered".to_string(),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, visit.id);
    assert_eq!(updated.date, visit_date());
    assert_eq!(updated.description, "neutered");
    assert_eq!(updated.pet_id, pet.id);

    Ok(())
}

/// Tests updating a nonexistent visit.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_visit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = VisitRepository::new(db)
        .update(
            999,
            UpdateVisitParam {
                date: visit_date(),
                description: "neutered".to_string(),
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
