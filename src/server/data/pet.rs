//! Pet data repository for database operations.
//!
//! Provides the `PetRepository` for managing pets. Every read assembles the complete pet
//! domain model: the pet row joined with its pet type, plus its visits loaded through
//! `VisitRepository` in a single batched query.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::visit::VisitRepository,
    error::{internal::InternalError, AppError},
    model::{
        pet::{CreatePetParam, Pet, UpdatePetParam},
        visit::Visit,
    },
};

/// Repository providing database operations for pet management.
pub struct PetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PetRepository<'a> {
    /// Creates a new PetRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PetRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new pet.
    ///
    /// # Arguments
    /// - `param` - Name, birth date, pet type and optional owner of the pet
    ///
    /// # Returns
    /// - `Ok(Pet)` - The created pet with its type and no visits
    /// - `Err(AppError::DbErr)` - Database error during insert, including unknown type or owner ids
    pub async fn create(&self, param: CreatePetParam) -> Result<Pet, AppError> {
        let entity = entity::pet::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(param.name),
            birth_date: ActiveValue::Set(param.birth_date),
            type_id: ActiveValue::Set(param.type_id),
            owner_id: ActiveValue::Set(param.owner_id),
        }
        .insert(self.db)
        .await?;

        let pet_type = entity::prelude::PetType::find_by_id(entity.type_id)
            .one(self.db)
            .await?;

        Pet::from_entity(entity, pet_type, Vec::new())
    }

    /// Finds a pet by ID with its type and visits.
    ///
    /// # Returns
    /// - `Ok(Some(Pet))` - The pet if found
    /// - `Ok(None)` - No pet with that ID exists
    /// - `Err(AppError)` - Database error or dangling pet type reference
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Pet>, AppError> {
        let Some((pet, pet_type)) = entity::prelude::Pet::find_by_id(id)
            .find_also_related(entity::prelude::PetType)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let visits = VisitRepository::new(self.db).find_by_pet_id(pet.id).await?;

        Ok(Some(Pet::from_entity(pet, pet_type, visits)?))
    }

    /// Gets all pets in ascending ID order.
    pub async fn find_all(&self) -> Result<Vec<Pet>, AppError> {
        let rows = entity::prelude::Pet::find()
            .find_also_related(entity::prelude::PetType)
            .order_by_asc(entity::pet::Column::Id)
            .all(self.db)
            .await?;

        self.hydrate(rows).await
    }

    /// Gets the pets of several owners in one query, in ascending ID order.
    ///
    /// # Arguments
    /// - `owner_ids` - IDs of the owners, may be empty
    ///
    /// # Returns
    /// - `Ok(Vec<Pet>)` - Pets of all listed owners (returns early if slice is empty)
    /// - `Err(AppError)` - Database error or dangling pet type reference
    pub async fn find_by_owner_ids(&self, owner_ids: &[i32]) -> Result<Vec<Pet>, AppError> {
        if owner_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::Pet::find()
            .filter(entity::pet::Column::OwnerId.is_in(owner_ids.iter().copied()))
            .find_also_related(entity::prelude::PetType)
            .order_by_asc(entity::pet::Column::Id)
            .all(self.db)
            .await?;

        self.hydrate(rows).await
    }

    /// Replaces the name, birth date and type of a pet.
    ///
    /// The owner and the visits of the pet are left untouched.
    ///
    /// # Returns
    /// - `Ok(Some(Pet))` - The updated pet with its type and visits
    /// - `Ok(None)` - No pet with that ID exists
    /// - `Err(AppError)` - Database error during update
    pub async fn update(&self, id: i32, param: UpdatePetParam) -> Result<Option<Pet>, AppError> {
        let Some(entity) = entity::prelude::Pet::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(param.name);
        active.birth_date = ActiveValue::Set(param.birth_date);
        active.type_id = ActiveValue::Set(param.type_id);
        active.update(self.db).await?;

        let pet = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| InternalError::MissingAfterWrite {
                entity: "Pet",
                id: id.to_string(),
            })?;

        Ok(Some(pet))
    }

    /// Deletes the pet with the provided ID together with its visits.
    ///
    /// Both deletes run in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - The pet was deleted
    /// - `Ok(false)` - No pet with that ID existed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Visit::delete_many()
            .filter(entity::visit::Column::PetId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Pet::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether a pet with the provided ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Pet::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Attaches visits to pet rows and converts them to domain models.
    async fn hydrate(
        &self,
        rows: Vec<(entity::pet::Model, Option<entity::pet_type::Model>)>,
    ) -> Result<Vec<Pet>, AppError> {
        let pet_ids: Vec<i32> = rows.iter().map(|(pet, _)| pet.id).collect();

        let mut visits_by_pet: HashMap<i32, Vec<Visit>> = HashMap::new();
        for visit in VisitRepository::new(self.db)
            .find_by_pet_ids(&pet_ids)
            .await?
        {
            visits_by_pet.entry(visit.pet_id).or_default().push(visit);
        }

        rows.into_iter()
            .map(|(pet, pet_type)| {
                let visits = visits_by_pet.remove(&pet.id).unwrap_or_default();
                Pet::from_entity(pet, pet_type, visits)
            })
            .collect()
    }
}
