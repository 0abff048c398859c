//! Specialty data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::specialty::{Specialty, SpecialtyParam};

/// Repository providing database operations for specialty management.
pub struct SpecialtyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpecialtyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: SpecialtyParam) -> Result<Specialty, DbErr> {
        let entity = entity::specialty::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(param.name),
        }
        .insert(self.db)
        .await?;

        Ok(Specialty::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Specialty>, DbErr> {
        let entity = entity::prelude::Specialty::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Specialty::from_entity))
    }

    /// Gets all specialties in ascending ID order.
    pub async fn find_all(&self) -> Result<Vec<Specialty>, DbErr> {
        let entities = entity::prelude::Specialty::find()
            .order_by_asc(entity::specialty::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Specialty::from_entity).collect())
    }

    /// Returns the ids from `ids` that have no specialty row, in input order.
    ///
    /// # Arguments
    /// - `ids` - Specialty ids to look up, may be empty
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Unknown ids, empty when all exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_missing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let existing: Vec<i32> = entity::prelude::Specialty::find()
            .select_only()
            .column(entity::specialty::Column::Id)
            .filter(entity::specialty::Column::Id.is_in(ids.iter().copied()))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(ids
            .iter()
            .copied()
            .filter(|id| !existing.contains(id))
            .collect())
    }

    /// Renames a specialty.
    ///
    /// # Returns
    /// - `Ok(Some(Specialty))` - The updated specialty
    /// - `Ok(None)` - No specialty with that ID exists
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: SpecialtyParam) -> Result<Option<Specialty>, DbErr> {
        let Some(entity) = entity::prelude::Specialty::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(param.name);
        let entity = active.update(self.db).await?;

        Ok(Some(Specialty::from_entity(entity)))
    }

    /// Deletes the specialty with the provided ID and its links to vets.
    ///
    /// Both deletes run in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - The specialty was deleted
    /// - `Ok(false)` - No specialty with that ID existed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::VetSpecialty::delete_many()
            .filter(entity::vet_specialty::Column::SpecialtyId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Specialty::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
