use crate::server::{
    data::owner::OwnerRepository,
    error::AppError,
    model::owner::OwnerParam,
};
use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod find_by_last_name;
mod update;

fn owner_param(first_name: &str, last_name: &str) -> OwnerParam {
    OwnerParam {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        address: "110 W. Liberty St.".to_string(),
        city: "Madison".to_string(),
        telephone: "6085551023".to_string(),
    }
}
