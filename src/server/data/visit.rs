//! Visit data repository for database operations.
//!
//! Provides the `VisitRepository` for managing visit records. Besides the plain CRUD
//! operations it loads the visits of one or several pets, which is how pets get their
//! visit history attached when they are read.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::visit::{CreateVisitParam, UpdateVisitParam, Visit};

/// Repository providing database operations for visit management.
pub struct VisitRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VisitRepository<'a> {
    /// Creates a new VisitRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `VisitRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new visit.
    ///
    /// # Arguments
    /// - `param` - Date, description and pet of the visit
    ///
    /// # Returns
    /// - `Ok(Visit)` - The created visit
    /// - `Err(DbErr)` - Database error during insert, including an unknown pet id
    pub async fn create(&self, param: CreateVisitParam) -> Result<Visit, DbErr> {
        let entity = entity::visit::ActiveModel {
            id: ActiveValue::NotSet,
            pet_id: ActiveValue::Set(param.pet_id),
            visit_date: ActiveValue::Set(param.date),
            description: ActiveValue::Set(param.description),
        }
        .insert(self.db)
        .await?;

        Ok(Visit::from_entity(entity))
    }

    /// Finds a visit by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Visit))` - The visit if found
    /// - `Ok(None)` - No visit with that ID exists
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Visit>, DbErr> {
        let entity = entity::prelude::Visit::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Visit::from_entity))
    }

    /// Gets all visits in ascending ID order.
    pub async fn find_all(&self) -> Result<Vec<Visit>, DbErr> {
        let entities = entity::prelude::Visit::find()
            .order_by_asc(entity::visit::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Visit::from_entity).collect())
    }

    /// Gets the visits of a single pet in ascending ID order.
    ///
    /// # Arguments
    /// - `pet_id` - ID of the pet
    ///
    /// # Returns
    /// - `Ok(Vec<Visit>)` - The pet's visits, empty if it has none or does not exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_pet_id(&self, pet_id: i32) -> Result<Vec<Visit>, DbErr> {
        self.find_by_pet_ids(&[pet_id]).await
    }

    /// Gets the visits of several pets in one query, in ascending ID order.
    ///
    /// # Arguments
    /// - `pet_ids` - IDs of the pets, may be empty
    ///
    /// # Returns
    /// - `Ok(Vec<Visit>)` - Visits of all listed pets (returns early if slice is empty)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_pet_ids(&self, pet_ids: &[i32]) -> Result<Vec<Visit>, DbErr> {
        if pet_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Visit::find()
            .filter(entity::visit::Column::PetId.is_in(pet_ids.iter().copied()))
            .order_by_asc(entity::visit::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Visit::from_entity).collect())
    }

    /// Replaces the date and description of a visit.
    ///
    /// # Returns
    /// - `Ok(Some(Visit))` - The updated visit
    /// - `Ok(None)` - No visit with that ID exists
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpdateVisitParam) -> Result<Option<Visit>, DbErr> {
        let Some(entity) = entity::prelude::Visit::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.visit_date = ActiveValue::Set(param.date);
        active.description = ActiveValue::Set(param.description);
        let entity = active.update(self.db).await?;

        Ok(Some(Visit::from_entity(entity)))
    }

    /// Deletes the visit with the provided ID.
    ///
    /// # Returns
    /// - `Ok(true)` - The visit was deleted
    /// - `Ok(false)` - No visit with that ID existed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Visit::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
