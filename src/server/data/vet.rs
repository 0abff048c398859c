//! Vet data repository for database operations.
//!
//! Provides the `VetRepository` for managing vets and their links to specialties. Vet
//! rows and their `vet_specialties` links are always written together inside a single
//! transaction, so a vet is never observed with a partially replaced specialty set.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::vet::{Vet, VetParam};

/// Repository providing database operations for vet management.
pub struct VetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VetRepository<'a> {
    /// Creates a new VetRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `VetRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new vet linked to the given specialties.
    ///
    /// # Arguments
    /// - `param` - Names and specialty ids of the vet
    ///
    /// # Returns
    /// - `Ok(Vet)` - The created vet with its specialties
    /// - `Err(DbErr)` - Database error during insert, including unknown specialty ids
    pub async fn create(&self, param: VetParam) -> Result<Vet, DbErr> {
        let txn = self.db.begin().await?;

        let entity = entity::vet::ActiveModel {
            id: ActiveValue::NotSet,
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
        }
        .insert(&txn)
        .await?;

        link_specialties(&txn, entity.id, &param.specialty_ids).await?;

        txn.commit().await?;

        self.find_by_id(entity.id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("vet {}", entity.id)))
    }

    /// Finds a vet by ID with their specialties.
    ///
    /// # Returns
    /// - `Ok(Some(Vet))` - The vet if found
    /// - `Ok(None)` - No vet with that ID exists
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Vet>, DbErr> {
        let rows = entity::prelude::Vet::find_by_id(id)
            .find_with_related(entity::prelude::Specialty)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .next()
            .map(|(vet, specialties)| Vet::from_entity(vet, specialties)))
    }

    /// Gets all vets with their specialties in ascending ID order.
    pub async fn find_all(&self) -> Result<Vec<Vet>, DbErr> {
        let rows = entity::prelude::Vet::find()
            .order_by_asc(entity::vet::Column::Id)
            .find_with_related(entity::prelude::Specialty)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(vet, specialties)| Vet::from_entity(vet, specialties))
            .collect())
    }

    /// Replaces the names and the complete specialty set of a vet.
    ///
    /// # Returns
    /// - `Ok(Some(Vet))` - The updated vet
    /// - `Ok(None)` - No vet with that ID exists
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: VetParam) -> Result<Option<Vet>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(entity) = entity::prelude::Vet::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.first_name = ActiveValue::Set(param.first_name);
        active.last_name = ActiveValue::Set(param.last_name);
        active.update(&txn).await?;

        entity::prelude::VetSpecialty::delete_many()
            .filter(entity::vet_specialty::Column::VetId.eq(id))
            .exec(&txn)
            .await?;
        link_specialties(&txn, id, &param.specialty_ids).await?;

        txn.commit().await?;

        self.find_by_id(id).await
    }

    /// Deletes the vet with the provided ID and its specialty links.
    ///
    /// # Returns
    /// - `Ok(true)` - The vet was deleted
    /// - `Ok(false)` - No vet with that ID existed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::VetSpecialty::delete_many()
            .filter(entity::vet_specialty::Column::VetId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Vet::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}

async fn link_specialties(
    txn: &DatabaseTransaction,
    vet_id: i32,
    specialty_ids: &[i32],
) -> Result<(), DbErr> {
    if specialty_ids.is_empty() {
        return Ok(());
    }

    let links = specialty_ids
        .iter()
        .map(|specialty_id| entity::vet_specialty::ActiveModel {
            vet_id: ActiveValue::Set(vet_id),
            specialty_id: ActiveValue::Set(*specialty_id),
        });

    entity::prelude::VetSpecialty::insert_many(links)
        .exec_without_returning(txn)
        .await?;

    Ok(())
}
