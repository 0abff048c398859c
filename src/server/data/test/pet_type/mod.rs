use crate::server::{
    data::pet_type::PetTypeRepository,
    model::pet_type::PetTypeParam,
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_all;
mod update;

fn pet_type_param(name: &str) -> PetTypeParam {
    PetTypeParam {
        name: name.to_string(),
    }
}
