//! Visit factory for creating test visit entities.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test visits for an existing pet.
pub struct VisitFactory<'a> {
    db: &'a DatabaseConnection,
    pet_id: i32,
    visit_date: NaiveDate,
    description: String,
}

impl<'a> VisitFactory<'a> {
    /// Creates a new VisitFactory dated `2013-01-01` with description `"visit {id}"`.
    pub fn new(db: &'a DatabaseConnection, pet_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            pet_id,
            visit_date: NaiveDate::from_ymd_opt(2013, 1, 1).unwrap_or_default(),
            description: format!("visit {}", id),
        }
    }

    pub fn visit_date(mut self, visit_date: NaiveDate) -> Self {
        self.visit_date = visit_date;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds and inserts the visit entity into the database.
    pub async fn build(self) -> Result<entity::visit::Model, DbErr> {
        entity::visit::ActiveModel {
            id: ActiveValue::NotSet,
            pet_id: ActiveValue::Set(self.pet_id),
            visit_date: ActiveValue::Set(self.visit_date),
            description: ActiveValue::Set(self.description),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a visit with default values for the given pet.
pub async fn create_visit(
    db: &DatabaseConnection,
    pet_id: i32,
) -> Result<entity::visit::Model, DbErr> {
    VisitFactory::new(db, pet_id).build().await
}
