use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

/// Role assignments of users, read together with the role they grant.
pub struct UserRoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRoleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every role assignment of a user, each joined with its role row.
    ///
    /// # Arguments
    /// - `user_id` - User id
    ///
    /// # Returns
    /// - `Ok(Vec<(user_role, Option<role>)>)` - Assignments ordered by id
    /// - `Err(DbErr)` - Database error during query
    pub async fn roles_of(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::user_role::Model, Option<entity::role::Model>)>, DbErr> {
        entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Role)
            .order_by_asc(entity::user_role::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes every role assignment of a user.
    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::UserRole::delete_many()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
