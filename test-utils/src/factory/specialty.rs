//! Specialty factory for creating test specialty entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a specialty named `"specialty {id}"`.
pub async fn create_specialty(
    db: &DatabaseConnection,
) -> Result<entity::specialty::Model, DbErr> {
    create_specialty_named(db, format!("specialty {}", next_id())).await
}

/// Creates a specialty with the provided name.
pub async fn create_specialty_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::specialty::Model, DbErr> {
    entity::specialty::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(name.into()),
    }
    .insert(db)
    .await
}
