use super::*;

/// Tests reporting unknown specialty ids.
///
/// Expected: Ok with only the ids that have no row, in input order
#[tokio::test]
async fn returns_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let surgery = factory::create_specialty(db).await?;

    let missing = SpecialtyRepository::new(db)
        .find_missing_ids(&[998, surgery.id, 999])
        .await?;

    assert_eq!(missing, vec![998, 999]);

    Ok(())
}

/// Tests that an empty id list has nothing missing.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_empty_input() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let missing = SpecialtyRepository::new(db).find_missing_ids(&[]).await?;

    assert!(missing.is_empty());

    Ok(())
}
