use crate::server::{
    data::pet_type::PetTypeRepository,
    error::AppError,
    model::pet_type::{PetType, PetTypeParam},
    service::clinic::ClinicService,
};

impl<'a> ClinicService<'a> {
    pub async fn find_pet_type_by_id(&self, id: i32) -> Result<Option<PetType>, AppError> {
        Ok(PetTypeRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn find_all_pet_types(&self) -> Result<Vec<PetType>, AppError> {
        Ok(PetTypeRepository::new(self.db).find_all().await?)
    }

    pub async fn save_pet_type(&self, param: PetTypeParam) -> Result<PetType, AppError> {
        Ok(PetTypeRepository::new(self.db).create(param).await?)
    }

    pub async fn update_pet_type(
        &self,
        id: i32,
        param: PetTypeParam,
    ) -> Result<Option<PetType>, AppError> {
        Ok(PetTypeRepository::new(self.db).update(id, param).await?)
    }

    /// Deletes a pet type. Fails with a database error while pets still use it.
    pub async fn delete_pet_type(&self, id: i32) -> Result<bool, AppError> {
        Ok(PetTypeRepository::new(self.db).delete(id).await?)
    }
}
