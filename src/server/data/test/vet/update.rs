use super::*;

/// Tests replacing a vet's specialty set.
///
/// Verifies that the old links are removed and only the new ones remain.
///
/// Expected: Ok(Some(Vet)) with exactly the new specialty
#[tokio::test]
async fn replaces_specialties() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let surgery = factory::specialty::create_specialty_named(db, "surgery").await?;
    let radiology = factory::specialty::create_specialty_named(db, "radiology").await?;
    let vet = factory::vet::VetFactory::new(db)
        .specialty(surgery.id)
        .build()
        .await?;

    let updated = VetRepository::new(db)
        .update(
            vet.id,
            VetParam {
                first_name: "Helen".to_string(),
                last_name: "Leary".to_string(),
                specialty_ids: vec![radiology.id],
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.first_name, "Helen");
    assert_eq!(updated.specialties.len(), 1);
    assert_eq!(updated.specialties[0].id, radiology.id);
    assert_eq!(link_count(db, vet.id).await?, 1);

    Ok(())
}

/// Tests updating a nonexistent vet.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_vet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = VetRepository::new(db).update(999, vet_param(Vec::new())).await?;

    assert!(result.is_none());

    Ok(())
}
