//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation and convenience methods for creating entities
//! together with the rows they depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Turns a counter value into a letters-only suffix.
///
/// Person names are validated against a letters-only pattern, so factory defaults
/// cannot embed digits. `1` becomes `"b"`, `26` becomes `"ba"`.
pub fn alpha_suffix(mut value: u64) -> String {
    let mut out = Vec::new();
    loop {
        out.push(b'a' + (value % 26) as u8);
        value /= 26;
        if value == 0 {
            break;
        }
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

/// Creates an owner, a pet type and a pet belonging to both.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, pet_type, pet))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_pet_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::owner::Model,
        entity::pet_type::Model,
        entity::pet::Model,
    ),
    DbErr,
> {
    let owner = crate::factory::owner::create_owner(db).await?;
    let pet_type = crate::factory::pet_type::create_pet_type(db).await?;
    let pet = crate::factory::pet::create_pet(db, pet_type.id, Some(owner.id)).await?;

    Ok((owner, pet_type, pet))
}

/// Creates an owner, pet type, pet and one visit for that pet.
///
/// # Returns
/// - `Ok((owner, pet_type, pet, visit))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_visit_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::owner::Model,
        entity::pet_type::Model,
        entity::pet::Model,
        entity::visit::Model,
    ),
    DbErr,
> {
    let (owner, pet_type, pet) = create_pet_with_dependencies(db).await?;
    let visit = crate::factory::visit::create_visit(db, pet.id).await?;

    Ok((owner, pet_type, pet, visit))
}
