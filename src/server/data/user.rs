//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing login accounts and their roles.
//! Stored password hashes are only handed out by `find_for_authentication`; every other
//! read returns the `User` domain model which has no password field.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::user::{CreateUserParam, User};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating and querying user records together with their roles.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user and its role rows in one transaction.
    ///
    /// # Arguments
    /// - `param` - Username, enabled flag and roles of the user
    /// - `password_hash` - bcrypt hash of the password, stored instead of `param.password`
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error during insert, including a duplicate username
    pub async fn create(&self, param: CreateUserParam, password_hash: String) -> Result<User, DbErr> {
        let txn = self.db.begin().await?;

        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username.clone()),
            password: ActiveValue::Set(password_hash),
            enabled: ActiveValue::Set(param.enabled),
        }
        .insert(&txn)
        .await?;

        let mut roles = Vec::with_capacity(param.roles.len());
        for role in param.roles {
            let role = entity::role::ActiveModel {
                id: ActiveValue::NotSet,
                username: ActiveValue::Set(param.username.clone()),
                role: ActiveValue::Set(role),
            }
            .insert(&txn)
            .await?;
            roles.push(role);
        }

        txn.commit().await?;

        Ok(User::from_entity(user, roles))
    }

    /// Finds a user by username with their roles.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The user if found
    /// - `Ok(None)` - No user with that username exists
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        Ok(self
            .find_for_authentication(username)
            .await?
            .map(|(user, _)| user))
    }

    /// Finds a user together with their stored password hash.
    ///
    /// Used only to verify HTTP Basic credentials.
    ///
    /// # Returns
    /// - `Ok(Some((User, String)))` - The user and their bcrypt password hash
    /// - `Ok(None)` - No user with that username exists
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_for_authentication(
        &self,
        username: &str,
    ) -> Result<Option<(User, String)>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(username.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let roles = entity::prelude::Role::find()
            .filter(entity::role::Column::Username.eq(username))
            .order_by_asc(entity::role::Column::Id)
            .all(self.db)
            .await?;

        let password_hash = entity.password.clone();

        Ok(Some((User::from_entity(entity, roles), password_hash)))
    }

    /// Checks whether a user with the provided username exists.
    pub async fn exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find_by_id(username.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
