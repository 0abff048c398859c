use sea_orm::entity::prelude::*;

/// Join table between vets and their specialties.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vet_specialties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub vet_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub specialty_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vet::Entity",
        from = "Column::VetId",
        to = "super::vet::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Vet,
    #[sea_orm(
        belongs_to = "super::specialty::Entity",
        from = "Column::SpecialtyId",
        to = "super::specialty::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Specialty,
}

impl Related<super::vet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vet.def()
    }
}

impl Related<super::specialty::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Specialty.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
