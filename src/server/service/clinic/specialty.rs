use crate::server::{
    data::specialty::SpecialtyRepository,
    error::AppError,
    model::specialty::{Specialty, SpecialtyParam},
    service::clinic::ClinicService,
};

impl<'a> ClinicService<'a> {
    pub async fn find_specialty_by_id(&self, id: i32) -> Result<Option<Specialty>, AppError> {
        Ok(SpecialtyRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn find_all_specialties(&self) -> Result<Vec<Specialty>, AppError> {
        Ok(SpecialtyRepository::new(self.db).find_all().await?)
    }

    pub async fn save_specialty(&self, param: SpecialtyParam) -> Result<Specialty, AppError> {
        Ok(SpecialtyRepository::new(self.db).create(param).await?)
    }

    pub async fn update_specialty(
        &self,
        id: i32,
        param: SpecialtyParam,
    ) -> Result<Option<Specialty>, AppError> {
        Ok(SpecialtyRepository::new(self.db).update(id, param).await?)
    }

    pub async fn delete_specialty(&self, id: i32) -> Result<bool, AppError> {
        Ok(SpecialtyRepository::new(self.db).delete(id).await?)
    }
}
