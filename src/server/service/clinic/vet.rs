use crate::server::{
    data::{specialty::SpecialtyRepository, vet::VetRepository},
    error::{validation::ValidationError, AppError},
    model::vet::{Vet, VetParam},
    service::clinic::{unknown_reference, ClinicService},
};

impl<'a> ClinicService<'a> {
    pub async fn find_vet_by_id(&self, id: i32) -> Result<Option<Vet>, AppError> {
        Ok(VetRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn find_all_vets(&self) -> Result<Vec<Vet>, AppError> {
        Ok(VetRepository::new(self.db).find_all().await?)
    }

    /// Creates a vet after checking that every referenced specialty exists.
    ///
    /// # Returns
    /// - `Ok(Vet)` - The created vet with its specialties
    /// - `Err(AppError::ValidationErr)` - One or more specialty ids are unknown
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn save_vet(&self, param: VetParam) -> Result<Vet, AppError> {
        self.check_specialties(&param.specialty_ids).await?;

        Ok(VetRepository::new(self.db).create(param).await?)
    }

    /// Replaces a vet's names and specialties, `None` if the vet does not exist.
    pub async fn update_vet(&self, id: i32, param: VetParam) -> Result<Option<Vet>, AppError> {
        let repo = VetRepository::new(self.db);
        if repo.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        self.check_specialties(&param.specialty_ids).await?;

        Ok(repo.update(id, param).await?)
    }

    pub async fn delete_vet(&self, id: i32) -> Result<bool, AppError> {
        Ok(VetRepository::new(self.db).delete(id).await?)
    }

    async fn check_specialties(&self, specialty_ids: &[i32]) -> Result<(), AppError> {
        let missing = SpecialtyRepository::new(self.db)
            .find_missing_ids(specialty_ids)
            .await?;

        if missing.is_empty() {
            return Ok(());
        }

        let errors = missing
            .into_iter()
            .flat_map(|id| unknown_reference("vet", "specialties", id, "Specialty").errors)
            .collect();

        Err(ValidationError { errors }.into())
    }
}
