use crate::server::{
    data::{owner::OwnerRepository, pet::PetRepository, pet_type::PetTypeRepository},
    error::AppError,
    model::pet::{CreatePetParam, Pet, UpdatePetParam},
    service::clinic::{unknown_reference, ClinicService},
};

impl<'a> ClinicService<'a> {
    pub async fn find_pet_by_id(&self, id: i32) -> Result<Option<Pet>, AppError> {
        PetRepository::new(self.db).find_by_id(id).await
    }

    pub async fn find_all_pets(&self) -> Result<Vec<Pet>, AppError> {
        PetRepository::new(self.db).find_all().await
    }

    /// Creates a pet after resolving its pet type and optional owner.
    ///
    /// # Returns
    /// - `Ok(Pet)` - The created pet
    /// - `Err(AppError::ValidationErr)` - The pet type or owner does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn save_pet(&self, param: CreatePetParam) -> Result<Pet, AppError> {
        self.check_pet_type(param.type_id).await?;

        if let Some(owner_id) = param.owner_id {
            if !OwnerRepository::new(self.db).exists(owner_id).await? {
                return Err(unknown_reference("pet", "ownerId", owner_id, "Owner").into());
            }
        }

        PetRepository::new(self.db).create(param).await
    }

    /// Replaces a pet's name, birth date and type, `None` if the pet does not exist.
    ///
    /// # Returns
    /// - `Ok(Some(Pet))` - The updated pet
    /// - `Ok(None)` - No pet with that id exists
    /// - `Err(AppError::ValidationErr)` - The new pet type does not exist
    pub async fn update_pet(&self, id: i32, param: UpdatePetParam) -> Result<Option<Pet>, AppError> {
        let repo = PetRepository::new(self.db);
        if !repo.exists(id).await? {
            return Ok(None);
        }

        self.check_pet_type(param.type_id).await?;

        repo.update(id, param).await
    }

    /// Deletes a pet with its visits. Returns whether the pet existed.
    pub async fn delete_pet(&self, id: i32) -> Result<bool, AppError> {
        Ok(PetRepository::new(self.db).delete(id).await?)
    }

    /// Finds a pet through its owner.
    ///
    /// # Returns
    /// - `Ok(Some(Pet))` - The owner exists and owns the pet
    /// - `Ok(None)` - The owner does not exist, or the pet does not belong to them
    pub async fn find_owner_pet(&self, owner_id: i32, pet_id: i32) -> Result<Option<Pet>, AppError> {
        if !OwnerRepository::new(self.db).exists(owner_id).await? {
            return Ok(None);
        }

        let pet = PetRepository::new(self.db).find_by_id(pet_id).await?;

        Ok(pet.filter(|pet| pet.owner_id == Some(owner_id)))
    }

    /// Adds a new pet to an owner, `None` if the owner does not exist.
    pub async fn add_pet_to_owner(
        &self,
        owner_id: i32,
        param: CreatePetParam,
    ) -> Result<Option<Pet>, AppError> {
        if !OwnerRepository::new(self.db).exists(owner_id).await? {
            return Ok(None);
        }

        let param = CreatePetParam {
            owner_id: Some(owner_id),
            ..param
        };

        Ok(Some(self.save_pet(param).await?))
    }

    /// Replaces a pet reached through its owner, `None` unless the owner owns the pet.
    pub async fn update_owner_pet(
        &self,
        owner_id: i32,
        pet_id: i32,
        param: UpdatePetParam,
    ) -> Result<Option<Pet>, AppError> {
        if self.find_owner_pet(owner_id, pet_id).await?.is_none() {
            return Ok(None);
        }

        self.update_pet(pet_id, param).await
    }

    async fn check_pet_type(&self, type_id: i32) -> Result<(), AppError> {
        if PetTypeRepository::new(self.db).exists(type_id).await? {
            Ok(())
        } else {
            Err(unknown_reference("pet", "type", type_id, "Pet type").into())
        }
    }
}
