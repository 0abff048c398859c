use crate::server::{
    data::specialty::SpecialtyRepository,
    model::specialty::SpecialtyParam,
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod crud;
mod delete;
mod find_missing_ids;
