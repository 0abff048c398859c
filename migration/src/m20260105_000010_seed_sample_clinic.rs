use sea_orm_migration::prelude::*;

use super::{
    m20260105_000001_create_owners_table::Owners, m20260105_000002_create_types_table::Types,
    m20260105_000003_create_pets_table::Pets, m20260105_000004_create_visits_table::Visits,
    m20260105_000005_create_vets_table::Vets,
    m20260105_000006_create_specialties_table::Specialties,
    m20260105_000007_create_vet_specialties_table::VetSpecialties,
};

const VETS: &[(i32, &str, &str)] = &[
    (1, "James", "Carter"),
    (2, "Helen", "Leary"),
    (3, "Linda", "Douglas"),
    (4, "Rafael", "Ortega"),
    (5, "Henry", "Stevens"),
    (6, "Sharon", "Jenkins"),
];

const SPECIALTIES: &[(i32, &str)] = &[(1, "radiology"), (2, "surgery"), (3, "dentistry")];

const VET_SPECIALTIES: &[(i32, i32)] = &[(2, 1), (3, 2), (3, 3), (4, 2), (5, 1)];

const TYPES: &[(i32, &str)] = &[
    (1, "cat"),
    (2, "dog"),
    (3, "lizard"),
    (4, "snake"),
    (5, "bird"),
    (6, "hamster"),
];

const OWNERS: &[(i32, &str, &str, &str, &str, &str)] = &[
    (1, "George", "Franklin", "110 W. Liberty St.", "Madison", "6085551023"),
    (2, "Betty", "Davis", "638 Cardinal Ave.", "Sun Prairie", "6085551749"),
    (3, "Eduardo", "Rodriquez", "2693 Commerce St.", "McFarland", "6085558763"),
    (4, "Harold", "Davis", "563 Friendly St.", "Windsor", "6085553198"),
    (5, "Peter", "McTavish", "2387 S. Fair Way", "Madison", "6085552765"),
    (6, "Jean", "Coleman", "105 N. Lake St.", "Monona", "6085552654"),
    (7, "Jeff", "Black", "1450 Oak Blvd.", "Monona", "6085555387"),
    (8, "Maria", "Escobito", "345 Maple St.", "Madison", "6085557683"),
    (9, "David", "Schroeder", "2749 Blackhawk Trail", "Madison", "6085559435"),
    (10, "Carlos", "Estaban", "2335 Independence La.", "Waunakee", "6085555487"),
];

// (id, name, birth_date, type_id, owner_id)
const PETS: &[(i32, &str, &str, i32, i32)] = &[
    (1, "Leo", "2010-09-07", 1, 1),
    (2, "Basil", "2012-08-06", 6, 2),
    (3, "Rosy", "2011-04-17", 2, 3),
    (4, "Jewel", "2010-03-07", 2, 3),
    (5, "Iggy", "2010-11-30", 3, 4),
    (6, "George", "2010-01-20", 4, 5),
    (7, "Samantha", "2012-09-04", 1, 6),
    (8, "Max", "2012-09-04", 1, 6),
    (9, "Lucky", "2011-08-06", 5, 7),
    (10, "Mulligan", "2007-02-24", 2, 8),
    (11, "Freddy", "2010-03-09", 5, 9),
    (12, "Lucky", "2010-06-24", 2, 10),
    (13, "Sly", "2012-06-08", 1, 10),
];

const VISITS: &[(i32, i32, &str, &str)] = &[
    (1, 7, "2013-01-01", "rabies shot"),
    (2, 8, "2013-01-02", "rabies shot"),
    (3, 8, "2013-01-03", "neutered"),
    (4, 7, "2013-01-04", "spayed"),
];

/// Seeds the sample clinic: vets, specialties, pet types, ten owners with their pets,
/// and a handful of visits.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut vets = Query::insert()
            .into_table(Vets::Table)
            .columns([Vets::Id, Vets::FirstName, Vets::LastName])
            .to_owned();
        for (id, first_name, last_name) in VETS {
            vets.values_panic([(*id).into(), (*first_name).into(), (*last_name).into()]);
        }
        manager.exec_stmt(vets).await?;

        let mut specialties = Query::insert()
            .into_table(Specialties::Table)
            .columns([Specialties::Id, Specialties::Name])
            .to_owned();
        for (id, name) in SPECIALTIES {
            specialties.values_panic([(*id).into(), (*name).into()]);
        }
        manager.exec_stmt(specialties).await?;

        let mut vet_specialties = Query::insert()
            .into_table(VetSpecialties::Table)
            .columns([VetSpecialties::VetId, VetSpecialties::SpecialtyId])
            .to_owned();
        for (vet_id, specialty_id) in VET_SPECIALTIES {
            vet_specialties.values_panic([(*vet_id).into(), (*specialty_id).into()]);
        }
        manager.exec_stmt(vet_specialties).await?;

        let mut types = Query::insert()
            .into_table(Types::Table)
            .columns([Types::Id, Types::Name])
            .to_owned();
        for (id, name) in TYPES {
            types.values_panic([(*id).into(), (*name).into()]);
        }
        manager.exec_stmt(types).await?;

        let mut owners = Query::insert()
            .into_table(Owners::Table)
            .columns([
                Owners::Id,
                Owners::FirstName,
                Owners::LastName,
                Owners::Address,
                Owners::City,
                Owners::Telephone,
            ])
            .to_owned();
        for (id, first_name, last_name, address, city, telephone) in OWNERS {
            owners.values_panic([
                (*id).into(),
                (*first_name).into(),
                (*last_name).into(),
                (*address).into(),
                (*city).into(),
                (*telephone).into(),
            ]);
        }
        manager.exec_stmt(owners).await?;

        let mut pets = Query::insert()
            .into_table(Pets::Table)
            .columns([
                Pets::Id,
                Pets::Name,
                Pets::BirthDate,
                Pets::TypeId,
                Pets::OwnerId,
            ])
            .to_owned();
        for (id, name, birth_date, type_id, owner_id) in PETS {
            pets.values_panic([
                (*id).into(),
                (*name).into(),
                (*birth_date).into(),
                (*type_id).into(),
                (*owner_id).into(),
            ]);
        }
        manager.exec_stmt(pets).await?;

        let mut visits = Query::insert()
            .into_table(Visits::Table)
            .columns([
                Visits::Id,
                Visits::PetId,
                Visits::VisitDate,
                Visits::Description,
            ])
            .to_owned();
        for (id, pet_id, visit_date, description) in VISITS {
            visits.values_panic([
                (*id).into(),
                (*pet_id).into(),
                (*visit_date).into(),
                (*description).into(),
            ]);
        }
        manager.exec_stmt(visits).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(Visits::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(Pets::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(Owners::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(Types::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(VetSpecialties::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(Specialties::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(Vets::Table).to_owned())
            .await
    }
}
