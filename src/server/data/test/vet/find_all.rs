use super::*;

/// Tests listing vets with their specialties.
///
/// Expected: Ok with vets in id order, each with its own specialties
#[tokio::test]
async fn returns_vets_with_specialties() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let radiology = factory::specialty::create_specialty_named(db, "radiology").await?;
    let first = factory::create_vet(db).await?;
    let second = factory::vet::VetFactory::new(db)
        .specialty(radiology.id)
        .build()
        .await?;

    let vets = VetRepository::new(db).find_all().await?;

    assert_eq!(vets.len(), 2);
    assert_eq!(vets[0].id, first.id);
    assert!(vets[0].specialties.is_empty());
    assert_eq!(vets[1].id, second.id);
    assert_eq!(vets[1].specialties[0].name, "radiology");

    Ok(())
}

/// Tests finding a nonexistent vet.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_by_id_returns_none_for_missing_vet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = VetRepository::new(db).find_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
