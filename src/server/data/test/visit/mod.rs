use crate::server::{
    data::visit::VisitRepository,
    model::visit::{CreateVisitParam, UpdateVisitParam},
};
use chrono::NaiveDate;
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_pet_id;
mod update;

fn visit_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2013, 1, 1).unwrap()
}
