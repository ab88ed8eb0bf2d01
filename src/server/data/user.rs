//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for the lookups and credential
//! updates the authentication flow needs on top of the generic CRUD operations:
//! lookups by email, and updates of the pending one-time password and the last
//! issued access token. It runs on a plain connection or inside a transaction.

use chrono::Utc;
use entity::sea_orm_active_enums::ItemStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Repository providing database operations for user credentials.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a user by email address.
    ///
    /// Emails are stored lowercased, so the lookup lowercases its argument.
    ///
    /// # Arguments
    /// - `email` - Email address in any case
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The user with this email
    /// - `Ok(None)` - No user has this email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.trim().to_lowercase()))
            .one(self.db)
            .await
    }

    /// Finds a user that has not been deleted.
    pub async fn find_active_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::Status.ne(ItemStatus::Deleted))
            .one(self.db)
            .await
    }

    /// Counts every stored user regardless of status.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    /// Stores or clears the pending one-time password.
    pub async fn set_otp(
        &self,
        id: i32,
        otp: Option<String>,
    ) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            otp: ActiveValue::Set(otp),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Records the access token last issued to the user.
    pub async fn set_access_token(
        &self,
        id: i32,
        token: String,
    ) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            access_token: ActiveValue::Set(Some(token)),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await
    }
}
