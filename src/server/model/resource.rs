//! Generic description of a CRUD resource.
//!
//! Every table exposed over the API implements [`Resource`] on its SeaORM entity.
//! The trait ties the entity to its request body, lists the JSON field names
//! clients may filter, search and sort on, and converts request bodies into
//! active models. The repository, service and controller layers are written
//! once against this trait.

use async_trait::async_trait;
use chrono::Utc;
use entity::sea_orm_active_enums::ItemStatus;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, FromQueryResult, IntoActiveModel, ModelTrait,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    model::api::FieldError,
    server::{error::AppError, middleware::auth::RoleName, model::related::Embedded},
};

#[async_trait]
pub trait Resource: Send + Sync + 'static {
    type Entity: EntityTrait<
        Model = Self::Model,
        ActiveModel = Self::ActiveModel,
        Column = Self::Column,
    > + 'static;
    type Model: ModelTrait<Entity = Self::Entity>
        + FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + Serialize
        + Clone
        + Send
        + Sync
        + 'static;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + Send
        + Sync
        + 'static;
    type Column: ColumnTrait + Send + Sync + 'static;
    /// Request body accepted by create, update and upsert.
    type Payload: DeserializeOwned + Send + Sync + 'static;

    /// Human readable name used in not-found messages.
    const NAME: &'static str;

    /// JSON field names that must be present when a row is created.
    const REQUIRED: &'static [&'static str];

    /// Roles allowed to create, update or delete rows. Empty means any
    /// authenticated user.
    const WRITE_ROLES: &'static [RoleName] = &[];

    fn id_column() -> Self::Column;
    fn id_of(model: &Self::Model) -> i32;
    fn status_column() -> Self::Column;
    fn created_at_column() -> Self::Column;
    fn updated_at_column() -> Self::Column;

    /// Resolves a JSON field name to its column, `None` for unknown names.
    fn column(field: &str) -> Option<Self::Column>;

    /// Converts a request body into an active model carrying only the members
    /// present in the body, plus a fresh `updated_at`.
    fn into_changes(payload: Self::Payload) -> Self::ActiveModel;

    /// Fills the values a new row needs but the body may omit.
    fn fill_defaults(model: &mut Self::ActiveModel) {
        fill_common_defaults::<Self>(model);
    }

    /// Converts a request body into an active model ready for insertion.
    fn into_new(payload: Self::Payload) -> Self::ActiveModel {
        let mut model = Self::into_changes(payload);
        Self::fill_defaults(&mut model);
        model
    }

    /// Attaches the rows this resource's foreign keys point at, for read
    /// responses. The default attaches nothing.
    async fn embed(
        _db: &DatabaseConnection,
        rows: Vec<Self::Model>,
    ) -> Result<Vec<Embedded<Self::Model>>, AppError> {
        Ok(rows.into_iter().map(Embedded::plain).collect())
    }
}

/// Resolves the members every resource shares.
pub fn common_column<R: Resource + ?Sized>(field: &str) -> Option<R::Column> {
    match field {
        "id" => Some(R::id_column()),
        "status" => Some(R::status_column()),
        "createdAt" => Some(R::created_at_column()),
        "updatedAt" => Some(R::updated_at_column()),
        _ => None,
    }
}

/// Sets `status` to active unless given, and both timestamps to the same instant.
pub fn fill_common_defaults<R: Resource + ?Sized>(model: &mut R::ActiveModel) {
    let now = Utc::now();

    if !model.get(R::status_column()).is_set() {
        model.set(R::status_column(), ItemStatus::Active.into());
    }
    model.set(R::created_at_column(), now.into());
    model.set(R::updated_at_column(), now.into());
}

/// Lists required members that are absent from a model about to be inserted.
///
/// # Arguments
/// - `model` - Active model after defaults and path keys were applied
/// - `prefix` - Prepended to each field name, used to point into bulk bodies
///
/// # Returns
/// - `Vec<FieldError>` - One entry per missing member, empty when the model is complete
pub fn missing_fields<R: Resource + ?Sized>(model: &R::ActiveModel, prefix: &str) -> Vec<FieldError> {
    R::REQUIRED
        .iter()
        .filter(|field| {
            R::column(field)
                .map(|column| !model.get(column).is_set())
                .unwrap_or(false)
        })
        .map(|field| FieldError::new(format!("{prefix}{field}"), "is required"))
        .collect()
}

/// Wraps a present body member for an active model.
pub(crate) fn set<T>(value: Option<T>) -> ActiveValue<T>
where
    T: Into<sea_orm::Value>,
{
    value.map_or(ActiveValue::NotSet, ActiveValue::Set)
}

/// Wraps a present body member for a nullable column.
pub(crate) fn set_some<T>(value: Option<T>) -> ActiveValue<Option<T>>
where
    T: Into<sea_orm::Value> + sea_orm::sea_query::Nullable,
{
    value.map_or(ActiveValue::NotSet, |value| ActiveValue::Set(Some(value)))
}

/// Implements the column accessors shared by every table.
macro_rules! common_columns {
    ($table:ident) => {
        fn id_column() -> $table::Column {
            $table::Column::Id
        }

        fn id_of(model: &$table::Model) -> i32 {
            model.id
        }

        fn status_column() -> $table::Column {
            $table::Column::Status
        }

        fn created_at_column() -> $table::Column {
            $table::Column::CreatedAt
        }

        fn updated_at_column() -> $table::Column {
            $table::Column::UpdatedAt
        }
    };
}

pub(crate) use common_columns;
