use super::*;

/// Tests creating a vet with specialties.
///
/// Verifies that the vet row and one link per specialty are written and the
/// returned vet lists the specialties by name.
///
/// Expected: Ok(Vet) with two specialties
#[tokio::test]
async fn creates_vet_with_specialties() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let surgery = factory::specialty::create_specialty_named(db, "surgery").await?;
    let dentistry = factory::specialty::create_specialty_named(db, "dentistry").await?;

    let vet = VetRepository::new(db)
        .create(vet_param(vec![surgery.id, dentistry.id]))
        .await?;

    assert_eq!(vet.first_name, "James");
    let names: Vec<&str> = vet.specialties.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["dentistry", "surgery"]);
    assert_eq!(link_count(db, vet.id).await?, 2);

    Ok(())
}

/// Tests creating a vet without specialties.
///
/// Expected: Ok(Vet) with no specialties and no links
#[tokio::test]
async fn creates_vet_without_specialties() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let vet = VetRepository::new(db).create(vet_param(Vec::new())).await?;

    assert!(vet.specialties.is_empty());
    assert_eq!(link_count(db, vet.id).await?, 0);

    Ok(())
}

/// Tests that a failing link insert rolls back the vet row.
///
/// Verifies that an unknown specialty id aborts the whole transaction.
///
/// Expected: Err(DbErr) with no vet row left behind
#[tokio::test]
async fn rolls_back_on_unknown_specialty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = VetRepository::new(db).create(vet_param(vec![999])).await;

    assert!(result.is_err());
    assert_eq!(Vet::find().count(db).await?, 0);

    Ok(())
}
