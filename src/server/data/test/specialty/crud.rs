use super::*;

/// Tests creating, reading and renaming a specialty.
///
/// Expected: Ok with each step reflecting the stored name
#[tokio::test]
async fn creates_finds_and_renames() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpecialtyRepository::new(db);
    let created = repo
        .create(SpecialtyParam {
            name: "radiology".to_string(),
        })
        .await?;

    let found = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(found.name, "radiology");

    let renamed = repo
        .update(
            created.id,
            SpecialtyParam {
                name: "oncology".to_string(),
            },
        )
        .await?
        .unwrap();
    assert_eq!(renamed.name, "oncology");
    assert_eq!(repo.find_all().await?, vec![renamed]);

    Ok(())
}

/// Tests renaming a nonexistent specialty.
///
/// Expected: Ok(None)
#[tokio::test]
async fn update_returns_none_for_missing_specialty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SpecialtyRepository::new(db)
        .update(
            999,
            SpecialtyParam {
                name: "oncology".to_string(),
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
