use super::*;

/// Tests loading the visits of one pet.
///
/// Expected: Ok with the pet's visits only, in id order
#[tokio::test]
async fn returns_visits_of_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, pet_type, pet) = factory::helpers::create_pet_with_dependencies(db).await?;
    let other = factory::create_pet(db, pet_type.id, Some(owner.id)).await?;
    let first = factory::create_visit(db, pet.id).await?;
    factory::create_visit(db, other.id).await?;
    let second = factory::create_visit(db, pet.id).await?;

    let visits = VisitRepository::new(db).find_by_pet_id(pet.id).await?;

    let ids: Vec<i32> = visits.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests loading visits of a pet that has none.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_pet_without_visits() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, pet) = factory::helpers::create_pet_with_dependencies(db).await?;

    let visits = VisitRepository::new(db).find_by_pet_id(pet.id).await?;

    assert!(visits.is_empty());

    Ok(())
}

/// Tests listing all visits.
///
/// Expected: Ok with visits of every pet
#[tokio::test]
async fn find_all_returns_every_visit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_owner_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, pet_type, pet) = factory::helpers::create_pet_with_dependencies(db).await?;
    let other = factory::create_pet(db, pet_type.id, Some(owner.id)).await?;
    factory::create_visit(db, pet.id).await?;
    factory::create_visit(db, other.id).await?;

    let visits = VisitRepository::new(db).find_all().await?;

    assert_eq!(visits.len(), 2);

    Ok(())
}
