//! Pet type data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryOrder,
};

use crate::server::model::pet_type::{PetType, PetTypeParam};

/// Repository providing database operations for pet type management.
pub struct PetTypeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PetTypeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: PetTypeParam) -> Result<PetType, DbErr> {
        let entity = entity::pet_type::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(param.name),
        }
        .insert(self.db)
        .await?;

        Ok(PetType::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<PetType>, DbErr> {
        let entity = entity::prelude::PetType::find_by_id(id).one(self.db).await?;

        Ok(entity.map(PetType::from_entity))
    }

    /// Gets all pet types in ascending ID order.
    pub async fn find_all(&self) -> Result<Vec<PetType>, DbErr> {
        let entities = entity::prelude::PetType::find()
            .order_by_asc(entity::pet_type::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(PetType::from_entity).collect())
    }

    /// Renames a pet type.
    ///
    /// # Returns
    /// - `Ok(Some(PetType))` - The updated pet type
    /// - `Ok(None)` - No pet type with that ID exists
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: PetTypeParam) -> Result<Option<PetType>, DbErr> {
        let Some(entity) = entity::prelude::PetType::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(param.name);
        let entity = active.update(self.db).await?;

        Ok(Some(PetType::from_entity(entity)))
    }

    /// Deletes the pet type with the provided ID.
    ///
    /// Fails with a foreign key violation while pets still reference the type.
    ///
    /// # Returns
    /// - `Ok(true)` - The pet type was deleted
    /// - `Ok(false)` - No pet type with that ID existed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::PetType::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::PetType::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }
}
