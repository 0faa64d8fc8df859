//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user accounts. The
//! password hash only crosses this boundary during creation and credential
//! lookup; domain models returned elsewhere never carry it.

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::server::model::user::User;

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by username, returning the full entity.
    ///
    /// This is the credential lookup used during authentication, so the
    /// returned entity includes the stored password hash.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Checks whether the given username is still unclaimed.
    ///
    /// # Returns
    /// - `Ok(true)` - No account uses the username
    /// - `Ok(false)` - The username is taken
    /// - `Err(DbErr)` - Database error during count query
    pub async fn is_unique_username(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count == 0)
    }

    /// Creates a user account with an already-hashed password.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account without credential material
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        username: String,
        password_hash: String,
        role: String,
    ) -> Result<User, DbErr> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            username: ActiveValue::Set(username),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(role),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }
}
