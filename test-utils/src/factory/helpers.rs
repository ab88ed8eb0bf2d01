//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including unique value generation and shortcuts for creating entities
//! together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// Keeps unique columns (product codes, names, emails) distinct across
/// every factory-created row.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user holding a freshly created role with the given name.
///
/// Requires the tables added by `TestBuilder::with_user_tables()`.
///
/// # Arguments
/// - `db` - Database connection
/// - `role` - Machine name of the role, e.g. `"admin"`
///
/// # Returns
/// - `Ok((user, role, user_role))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_role(
    db: &DatabaseConnection,
    role: &str,
) -> Result<
    (
        entity::user::Model,
        entity::role::Model,
        entity::user_role::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let role = crate::factory::role::RoleFactory::new(db)
        .role(role)
        .build()
        .await?;
    let user_role = crate::factory::user_role::create_user_role(db, user.id, role.id).await?;

    Ok((user, role, user_role))
}
