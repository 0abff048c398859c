//! Owner data repository for database operations.
//!
//! Provides the `OwnerRepository` for managing owners. Reads return complete owners:
//! each owner is assembled with its pets, and each pet with its type and visits, using
//! one batched query per level rather than one query per row.

use std::collections::HashMap;

use sea_orm::{
    sea_query::LikeExpr,
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::{
    data::pet::PetRepository,
    error::AppError,
    model::{
        owner::{Owner, OwnerParam},
        pet::Pet,
    },
};

/// Repository providing database operations for owner management.
pub struct OwnerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnerRepository<'a> {
    /// Creates a new OwnerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `OwnerRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new owner without pets.
    ///
    /// # Arguments
    /// - `param` - Contact details of the owner
    ///
    /// # Returns
    /// - `Ok(Owner)` - The created owner
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: OwnerParam) -> Result<Owner, DbErr> {
        let entity = entity::owner::ActiveModel {
            id: ActiveValue::NotSet,
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            address: ActiveValue::Set(param.address),
            city: ActiveValue::Set(param.city),
            telephone: ActiveValue::Set(param.telephone),
        }
        .insert(self.db)
        .await?;

        Ok(Owner::from_entity(entity, Vec::new()))
    }

    /// Finds an owner by ID with their pets and the pets' visits.
    ///
    /// # Returns
    /// - `Ok(Some(Owner))` - The owner if found
    /// - `Ok(None)` - No owner with that ID exists
    /// - `Err(AppError)` - Database error or dangling pet type reference
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Owner>, AppError> {
        let Some(entity) = entity::prelude::Owner::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut owners = self.hydrate(vec![entity]).await?;

        Ok(owners.pop())
    }

    /// Gets all owners in ascending ID order.
    pub async fn find_all(&self) -> Result<Vec<Owner>, AppError> {
        let entities = entity::prelude::Owner::find()
            .order_by_asc(entity::owner::Column::Id)
            .all(self.db)
            .await?;

        self.hydrate(entities).await
    }

    /// Gets owners whose last name starts with the provided prefix, in ascending ID order.
    ///
    /// An empty prefix matches every owner. `%` and `_` in the prefix match themselves.
    ///
    /// # Arguments
    /// - `last_name` - Prefix the owner's last name must start with
    ///
    /// # Returns
    /// - `Ok(Vec<Owner>)` - Matching owners, possibly empty
    /// - `Err(AppError)` - Database error or dangling pet type reference
    pub async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Owner>, AppError> {
        let entities = entity::prelude::Owner::find()
            .filter(entity::owner::Column::LastName.like(prefix_pattern(last_name)))
            .order_by_asc(entity::owner::Column::Id)
            .all(self.db)
            .await?;

        self.hydrate(entities).await
    }

    /// Replaces the contact details of an owner.
    ///
    /// # Returns
    /// - `Ok(Some(Owner))` - The updated owner with their pets
    /// - `Ok(None)` - No owner with that ID exists
    /// - `Err(AppError)` - Database error during update
    pub async fn update(&self, id: i32, param: OwnerParam) -> Result<Option<Owner>, AppError> {
        let Some(entity) = entity::prelude::Owner::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.first_name = ActiveValue::Set(param.first_name);
        active.last_name = ActiveValue::Set(param.last_name);
        active.address = ActiveValue::Set(param.address);
        active.city = ActiveValue::Set(param.city);
        active.telephone = ActiveValue::Set(param.telephone);
        let entity = active.update(self.db).await?;

        let mut owners = self.hydrate(vec![entity]).await?;

        Ok(owners.pop())
    }

    /// Deletes the owner with the provided ID along with their pets and the pets' visits.
    ///
    /// All deletes run in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - The owner was deleted
    /// - `Ok(false)` - No owner with that ID existed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let pet_ids: Vec<i32> = entity::prelude::Pet::find()
            .select_only()
            .column(entity::pet::Column::Id)
            .filter(entity::pet::Column::OwnerId.eq(id))
            .into_tuple()
            .all(&txn)
            .await?;

        if !pet_ids.is_empty() {
            entity::prelude::Visit::delete_many()
                .filter(entity::visit::Column::PetId.is_in(pet_ids.iter().copied()))
                .exec(&txn)
                .await?;
            entity::prelude::Pet::delete_many()
                .filter(entity::pet::Column::Id.is_in(pet_ids.iter().copied()))
                .exec(&txn)
                .await?;
        }

        let result = entity::prelude::Owner::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether an owner with the provided ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Owner::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Attaches pets to owner rows and converts them to domain models.
    async fn hydrate(&self, entities: Vec<entity::owner::Model>) -> Result<Vec<Owner>, AppError> {
        let owner_ids: Vec<i32> = entities.iter().map(|owner| owner.id).collect();

        let mut pets_by_owner: HashMap<i32, Vec<Pet>> = HashMap::new();
        for pet in PetRepository::new(self.db)
            .find_by_owner_ids(&owner_ids)
            .await?
        {
            if let Some(owner_id) = pet.owner_id {
                pets_by_owner.entry(owner_id).or_default().push(pet);
            }
        }

        Ok(entities
            .into_iter()
            .map(|entity| {
                let pets = pets_by_owner.remove(&entity.id).unwrap_or_default();
                Owner::from_entity(entity, pets)
            })
            .collect())
    }
}

/// Builds a `LIKE` pattern matching names that start with `prefix` literally.
fn prefix_pattern(prefix: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape('\\')
}
