mod owner;
mod pet;
mod pet_type;
mod specialty;
mod user;
mod vet;
mod visit;
