//! User accounts: creation with mailed credentials, password changes,
//! removal together with role assignments, and the administrator seed.

use chrono::Utc;
use entity::{role, sea_orm_active_enums::ItemStatus, user, user_role};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use crate::{
    model::{
        query::FindRequest,
        user::{UpsertUserDto, UserRoleDto},
    },
    server::{
        data::{crud::CrudRepository, user::UserRepository, user_role::UserRoleRepository},
        error::AppError,
        model::{query::Page, resource::Resource},
        service::{
            mail::{Mail, Mailer},
            resource::ResourceService,
        },
        util::password::{generate_password, hash_password},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    mailer: &'a dyn Mailer,
    company_name: &'a str,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection, mailer: &'a dyn Mailer, company_name: &'a str) -> Self {
        Self {
            db,
            mailer,
            company_name,
        }
    }

    /// Creates an account and mails its login details to the user.
    ///
    /// A random password is generated when the body has none. The account is
    /// kept when the mail cannot be delivered; the failure is logged.
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored user
    /// - `Err(AppError::Validation)` - `email` missing
    /// - `Err(AppError::DbErr)` - Email already taken or database error
    pub async fn create(&self, mut payload: UpsertUserDto) -> Result<user::Model, AppError> {
        let password = payload
            .password
            .take()
            .filter(|password| !password.is_empty())
            .unwrap_or_else(generate_password);

        let mut model = user::Entity::into_new(payload);
        if !model.email.is_set() {
            return Err(AppError::validation("email", "is required"));
        }
        model.password = ActiveValue::Set(hash_password(&password)?);

        let user = CrudRepository::<user::Entity>::new(self.db).create(model).await?;

        let mail = Mail::account_info(&user.email, &password, self.company_name);
        if let Err(err) = self.mailer.send(mail).await {
            tracing::error!("Failed to mail account details to {}: {}", user.email, err);
        }

        Ok(user)
    }

    pub async fn get(&self, id: i32) -> Result<user::Model, AppError> {
        ResourceService::<user::Entity>::new(self.db).get(id).await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<user::Model, AppError> {
        ResourceService::<user::Entity>::new(self.db)
            .get_by("email", email.trim().to_lowercase())
            .await
    }

    pub async fn find(&self, request: &FindRequest) -> Result<Page<user::Model>, AppError> {
        ResourceService::<user::Entity>::new(self.db).find(request).await
    }

    /// Updates a user by id; a present password is hashed first.
    pub async fn update(&self, id: i32, payload: UpsertUserDto) -> Result<user::Model, AppError> {
        let model = changes(payload)?;

        CrudRepository::<user::Entity>::new(self.db)
            .update_by(user::Column::Id, id, model)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// Updates a user by email; a present password is hashed first.
    pub async fn update_by_email(
        &self,
        email: &str,
        payload: UpsertUserDto,
    ) -> Result<user::Model, AppError> {
        let email = email.trim().to_lowercase();
        let model = changes(payload)?;

        CrudRepository::<user::Entity>::new(self.db)
            .update_by(user::Column::Email, email.clone(), model)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("User with email {} not found", email)))
    }

    /// Deletes a user together with the user's role assignments.
    ///
    /// Both deletes run in one transaction; when no user has this id nothing
    /// is removed.
    ///
    /// # Returns
    /// - `Ok(())` - User and assignments removed
    /// - `Err(AppError::NotFound)` - No user with this id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        UserRoleRepository::new(&txn).delete_by_user(id).await?;
        let deleted = user::Entity::delete_by_id(id).exec(&txn).await?;
        if deleted.rows_affected == 0 {
            txn.rollback().await?;
            return Err(AppError::NotFound(format!("User with id {} not found", id)));
        }

        txn.commit().await?;

        Ok(())
    }

    pub async fn roles_of(&self, user_id: i32) -> Result<Vec<UserRoleDto>, AppError> {
        let roles = UserRoleRepository::new(self.db).roles_of(user_id).await?;

        Ok(roles.into_iter().map(UserRoleDto::from).collect())
    }

    /// Creates an administrator when the user table is empty.
    ///
    /// Reuses a role named `admin` if one exists, otherwise creates it. The
    /// check and the inserts share one transaction.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The seeded administrator
    /// - `Ok(None)` - Users already exist, nothing was created
    pub async fn seed_admin(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<user::Model>, AppError> {
        let txn = self.db.begin().await?;
        if UserRepository::new(&txn).count().await? > 0 {
            return Ok(None);
        }

        let now = Utc::now();
        let existing = role::Entity::find()
            .filter(role::Column::Role.eq("admin"))
            .order_by_asc(role::Column::Id)
            .one(&txn)
            .await?;
        let admin_role = match existing {
            Some(role) => role,
            None => {
                role::ActiveModel {
                    role: ActiveValue::Set("admin".to_string()),
                    short_name: ActiveValue::Set(Some("Admin".to_string())),
                    desc: ActiveValue::Set(None),
                    is_admin: ActiveValue::Set(true),
                    status: ActiveValue::Set(ItemStatus::Active),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(&txn)
                .await?
            }
        };

        let admin = user::ActiveModel {
            email: ActiveValue::Set(email.trim().to_lowercase()),
            password: ActiveValue::Set(hash_password(password)?),
            full_name: ActiveValue::Set(Some("Administrator".to_string())),
            status: ActiveValue::Set(ItemStatus::Active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        user_role::ActiveModel {
            user_id: ActiveValue::Set(admin.id),
            role_id: ActiveValue::Set(admin_role.id),
            status: ActiveValue::Set(ItemStatus::Active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        tracing::info!("Seeded administrator {}", admin.email);

        Ok(Some(admin))
    }
}

fn changes(mut payload: UpsertUserDto) -> Result<user::ActiveModel, AppError> {
    let password = payload.password.take().filter(|password| !password.is_empty());

    let mut model = user::Entity::into_changes(payload);
    if let Some(password) = password {
        model.password = ActiveValue::Set(hash_password(&password)?);
    }

    Ok(model)
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;
    use test_utils::{builder::TestBuilder, factory};

    use super::*;
    use crate::server::{service::mail::test::RecordingMailer, util::password::verify_password};

    fn new_user(email: &str, password: Option<&str>) -> UpsertUserDto {
        UpsertUserDto {
            email: Some(email.to_string()),
            password: password.map(str::to_string),
            full_name: Some("Line Lead".to_string()),
            ..Default::default()
        }
    }

    /// Tests creating a user with a password.
    ///
    /// Expected: Ok with a lowercased email, a hashed password and one mail
    #[tokio::test]
    async fn create_hashes_password_and_mails_details() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let mailer = RecordingMailer::default();
        let service = UserService::new(db, &mailer, "Garment Co");

        let user = service
            .create(new_user("Lead@Example.com", Some("chosen-pass")))
            .await
            .unwrap();

        assert_eq!(user.email, "lead@example.com");
        assert_eq!(user.status, ItemStatus::Active);
        assert_ne!(user.password, "chosen-pass");
        assert!(verify_password("chosen-pass", &user.password));
        let mails = mailer.sent();
        assert_eq!(mails.len(), 1);
        assert_eq!(mails[0].to, "lead@example.com");
        assert!(mails[0].body.contains("chosen-pass"));

        Ok(())
    }

    /// Tests creating a user without a password.
    ///
    /// Expected: Ok with a generated password that was mailed and verifies
    #[tokio::test]
    async fn create_generates_missing_password() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let mailer = RecordingMailer::default();
        let service = UserService::new(db, &mailer, "Garment Co");

        let user = service.create(new_user("new@example.com", None)).await.unwrap();

        let body = &mailer.sent()[0].body;
        let marker = "<strong>Password:</strong> ";
        let start = body.find(marker).unwrap() + marker.len();
        let generated = &body[start..start + 10];
        assert!(verify_password(generated, &user.password));

        Ok(())
    }

    /// Tests creating a user without email.
    ///
    /// Expected: Err(Validation) and no mail
    #[tokio::test]
    async fn create_requires_email() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let mailer = RecordingMailer::default();
        let service = UserService::new(db, &mailer, "Garment Co");

        let result = service.create(UpsertUserDto::default()).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(mailer.sent().is_empty());

        Ok(())
    }

    /// Tests changing the password through an update by email.
    ///
    /// Expected: Ok with the new password verifying and other members kept
    #[tokio::test]
    async fn update_by_email_rehashes_password() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let existing = factory::user::UserFactory::new(db)
            .email("cutter@example.com")
            .full_name("Cutter")
            .build()
            .await?;
        let mailer = RecordingMailer::default();
        let service = UserService::new(db, &mailer, "Garment Co");

        let updated = service
            .update_by_email(
                "CUTTER@example.com",
                UpsertUserDto {
                    password: Some("fresh-pass".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, existing.id);
        assert_eq!(updated.full_name.as_deref(), Some("Cutter"));
        assert!(verify_password("fresh-pass", &updated.password));

        Ok(())
    }

    /// Tests updating a user that does not exist.
    ///
    /// Expected: Err(NotFound)
    #[tokio::test]
    async fn update_missing_user_is_not_found() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let mailer = RecordingMailer::default();
        let service = UserService::new(db, &mailer, "Garment Co");

        let result = service.update(99, UpsertUserDto::default()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }

    /// Tests deleting a user holding roles.
    ///
    /// Expected: Ok with the user and the assignments gone, the role kept
    #[tokio::test]
    async fn delete_removes_role_assignments() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (user, role, _) = factory::helpers::create_user_with_role(db, "cutter").await?;
        let mailer = RecordingMailer::default();
        let service = UserService::new(db, &mailer, "Garment Co");

        service.delete(user.id).await.unwrap();

        assert!(user::Entity::find_by_id(user.id).one(db).await?.is_none());
        assert!(UserRoleRepository::new(db).roles_of(user.id).await?.is_empty());
        let roles = CrudRepository::<role::Entity>::new(db);
        assert!(roles.find_by_id(role.id).await?.is_some());

        Ok(())
    }

    /// Tests seeding the administrator on an empty and on a populated table.
    ///
    /// Expected: Some on the first call with an admin role attached, None afterwards
    #[tokio::test]
    async fn seeds_admin_only_once() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let mailer = RecordingMailer::default();
        let service = UserService::new(db, &mailer, "Garment Co");

        let admin = service
            .seed_admin("Admin@Example.com", "admin-pass")
            .await
            .unwrap()
            .unwrap();
        let again = service.seed_admin("other@example.com", "x").await.unwrap();

        assert_eq!(admin.email, "admin@example.com");
        assert!(again.is_none());
        let roles = service.roles_of(admin.id).await.unwrap();
        assert_eq!(roles.len(), 1);
        assert!(roles[0].role.as_ref().unwrap().is_admin);

        Ok(())
    }

    /// Tests seeding when a role named `admin` is already stored.
    ///
    /// Expected: the stored role is assigned and no second admin role is created
    #[tokio::test]
    async fn seed_reuses_admin_role() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let existing = factory::role::RoleFactory::new(db)
            .role("admin")
            .build()
            .await?;
        let mailer = RecordingMailer::default();
        let service = UserService::new(db, &mailer, "Garment Co");

        let admin = service
            .seed_admin("admin@example.com", "admin-pass")
            .await
            .unwrap()
            .unwrap();

        let roles = service.roles_of(admin.id).await.unwrap();
        assert_eq!(roles[0].role_id, existing.id);
        assert_eq!(role::Entity::find().all(db).await?.len(), 1);

        Ok(())
    }

    /// Tests deleting a user id that does not exist.
    ///
    /// Expected: Err(NotFound) and other users' assignments untouched
    #[tokio::test]
    async fn delete_missing_user_is_not_found() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (other, _, _) = factory::helpers::create_user_with_role(db, "packer").await?;
        let mailer = RecordingMailer::default();
        let service = UserService::new(db, &mailer, "Garment Co");

        let result = service.delete(other.id + 100).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(UserRoleRepository::new(db).roles_of(other.id).await?.len(), 1);

        Ok(())
    }
}
