use crate::server::{
    data::pet::PetRepository,
    error::AppError,
    model::pet::{CreatePetParam, UpdatePetParam},
};
use chrono::NaiveDate;
use entity::prelude::*;
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_all;
mod find_by_id;
mod update;

fn birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2012, 8, 6).unwrap()
}
