use crate::server::{
    data::owner::OwnerRepository,
    error::AppError,
    model::owner::{Owner, OwnerParam},
    service::clinic::ClinicService,
};

impl<'a> ClinicService<'a> {
    pub async fn find_owner_by_id(&self, id: i32) -> Result<Option<Owner>, AppError> {
        OwnerRepository::new(self.db).find_by_id(id).await
    }

    pub async fn find_all_owners(&self) -> Result<Vec<Owner>, AppError> {
        OwnerRepository::new(self.db).find_all().await
    }

    /// Gets owners whose last name starts with `last_name`, in ascending id order.
    pub async fn find_owners_by_last_name(&self, last_name: &str) -> Result<Vec<Owner>, AppError> {
        OwnerRepository::new(self.db)
            .find_by_last_name(last_name)
            .await
    }

    pub async fn save_owner(&self, param: OwnerParam) -> Result<Owner, AppError> {
        Ok(OwnerRepository::new(self.db).create(param).await?)
    }

    /// Replaces the contact details of an owner, `None` if the owner does not exist.
    pub async fn update_owner(&self, id: i32, param: OwnerParam) -> Result<Option<Owner>, AppError> {
        OwnerRepository::new(self.db).update(id, param).await
    }

    /// Deletes an owner with their pets and visits. Returns whether the owner existed.
    pub async fn delete_owner(&self, id: i32) -> Result<bool, AppError> {
        Ok(OwnerRepository::new(self.db).delete(id).await?)
    }
}
