use crate::server::{
    data::{pet::PetRepository, visit::VisitRepository},
    error::AppError,
    model::visit::{CreateVisitParam, UpdateVisitParam, Visit},
    service::clinic::{unknown_reference, ClinicService},
};

impl<'a> ClinicService<'a> {
    pub async fn find_visit_by_id(&self, id: i32) -> Result<Option<Visit>, AppError> {
        Ok(VisitRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn find_all_visits(&self) -> Result<Vec<Visit>, AppError> {
        Ok(VisitRepository::new(self.db).find_all().await?)
    }

    pub async fn find_visits_by_pet_id(&self, pet_id: i32) -> Result<Vec<Visit>, AppError> {
        Ok(VisitRepository::new(self.db).find_by_pet_id(pet_id).await?)
    }

    /// Creates a visit after checking that its pet exists.
    ///
    /// # Returns
    /// - `Ok(Visit)` - The created visit
    /// - `Err(AppError::ValidationErr)` - The pet does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn save_visit(&self, param: CreateVisitParam) -> Result<Visit, AppError> {
        if !PetRepository::new(self.db).exists(param.pet_id).await? {
            return Err(unknown_reference("visit", "petId", param.pet_id, "Pet").into());
        }

        Ok(VisitRepository::new(self.db).create(param).await?)
    }

    pub async fn update_visit(
        &self,
        id: i32,
        param: UpdateVisitParam,
    ) -> Result<Option<Visit>, AppError> {
        Ok(VisitRepository::new(self.db).update(id, param).await?)
    }

    pub async fn delete_visit(&self, id: i32) -> Result<bool, AppError> {
        Ok(VisitRepository::new(self.db).delete(id).await?)
    }

    /// Adds a visit to a pet reached through its owner.
    ///
    /// # Returns
    /// - `Ok(Some(Visit))` - The created visit
    /// - `Ok(None)` - The owner does not exist, or does not own `param.pet_id`
    pub async fn add_visit_to_owner_pet(
        &self,
        owner_id: i32,
        param: CreateVisitParam,
    ) -> Result<Option<Visit>, AppError> {
        if self.find_owner_pet(owner_id, param.pet_id).await?.is_none() {
            return Ok(None);
        }

        Ok(Some(VisitRepository::new(self.db).create(param).await?))
    }
}
