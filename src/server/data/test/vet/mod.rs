use crate::server::{data::vet::VetRepository, model::vet::VetParam};
use entity::prelude::*;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_all;
mod update;

fn vet_param(specialty_ids: Vec<i32>) -> VetParam {
    VetParam {
        first_name: "James".to_string(),
        last_name: "Carter".to_string(),
        specialty_ids,
    }
}

async fn link_count(db: &sea_orm::DatabaseConnection, vet_id: i32) -> Result<u64, DbErr> {
    VetSpecialty::find()
        .filter(entity::vet_specialty::Column::VetId.eq(vet_id))
        .count(db)
        .await
}
