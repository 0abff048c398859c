pub use super::owner::Entity as Owner;
pub use super::pet::Entity as Pet;
pub use super::pet_type::Entity as PetType;
pub use super::role::Entity as Role;
pub use super::specialty::Entity as Specialty;
pub use super::user::Entity as User;
pub use super::vet::Entity as Vet;
pub use super::vet_specialty::Entity as VetSpecialty;
pub use super::visit::Entity as Visit;
