use super::*;

/// Tests deleting a specialty detaches it from vets.
///
/// Expected: Ok(true) with the link removed and the vet kept
#[tokio::test]
async fn deletes_specialty_and_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let surgery = factory::create_specialty(db).await?;
    let vet = factory::vet::VetFactory::new(db)
        .specialty(surgery.id)
        .build()
        .await?;

    let deleted = SpecialtyRepository::new(db).delete(surgery.id).await?;

    assert!(deleted);
    assert_eq!(VetSpecialty::find().count(db).await?, 0);
    assert!(Vet::find_by_id(vet.id).one(db).await?.is_some());

    Ok(())
}

/// Tests deleting a nonexistent specialty.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_specialty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = SpecialtyRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}
