//! Generic service behind every CRUD resource.
//!
//! Wraps [`CrudRepository`] with the checks the API promises: required members
//! on insert, 404 when a keyed operation matches nothing, and the
//! create-or-update decision of the upsert routes. Read results can be
//! embedded with their related rows through [`Resource::embed`].

use std::fmt::Display;

use entity::sea_orm_active_enums::ItemStatus;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Value};

use crate::{
    model::{api::FieldError, query::FindRequest},
    server::{
        data::crud::CrudRepository,
        error::AppError,
        model::{
            query::{FindQuery, Page},
            related::Embedded,
            resource::{missing_fields, Resource},
        },
    },
};

/// Outcome of an upsert, telling the controller which status to answer with.
#[derive(Debug)]
pub enum Upserted<T> {
    Created(T),
    Updated(T),
}

pub struct ResourceService<'a, R: Resource> {
    db: &'a DatabaseConnection,
    repo: CrudRepository<'a, R>,
}

impl<'a, R: Resource> ResourceService<'a, R> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            repo: CrudRepository::new(db),
        }
    }

    /// Creates one row.
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored row, status `active` unless the body says otherwise
    /// - `Err(AppError::Validation)` - A required member is missing
    /// - `Err(AppError::DbErr)` - Constraint violation or database error
    pub async fn create(&self, payload: R::Payload) -> Result<R::Model, AppError> {
        let model = R::into_new(payload);
        validate::<R>(&model, "")?;

        Ok(self.repo.create(model).await?)
    }

    /// Creates every row of a bulk body in one transaction, each with status `active`.
    ///
    /// Missing members of all items are reported together, pointing into the
    /// body as `items[i].field`.
    pub async fn create_many(&self, payloads: Vec<R::Payload>) -> Result<Vec<R::Model>, AppError> {
        if payloads.is_empty() {
            return Err(AppError::validation("items", "must not be empty"));
        }

        let mut models = Vec::with_capacity(payloads.len());
        let mut errors = Vec::new();
        for (index, payload) in payloads.into_iter().enumerate() {
            let mut model = R::into_new(payload);
            model.set(R::status_column(), ItemStatus::Active.into());
            errors.extend(missing_fields::<R>(&model, &format!("items[{index}].")));
            models.push(model);
        }
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        Ok(self.repo.create_many(models).await?)
    }

    pub async fn get(&self, id: i32) -> Result<R::Model, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found::<R>("id", id))
    }

    /// Gets the first row, by id, whose `field` equals `value`.
    pub async fn get_by<V>(&self, field: &str, value: V) -> Result<R::Model, AppError>
    where
        V: Into<Value> + Display + Clone,
    {
        let column = column::<R>(field)?;

        self.repo
            .find_one_by(column, value.clone())
            .await?
            .ok_or_else(|| not_found::<R>(field, value))
    }

    pub async fn find(&self, request: &FindRequest) -> Result<Page<R::Model>, AppError> {
        let query = FindQuery::<R>::from_request(request)?;

        Ok(self.repo.find(&query).await?)
    }

    /// Embeds the related rows of one row.
    pub async fn embed_one(&self, row: R::Model) -> Result<Embedded<R::Model>, AppError> {
        R::embed(self.db, vec![row])
            .await?
            .pop()
            .ok_or_else(|| AppError::InternalError(format!("{} lost while embedding", R::NAME)))
    }

    /// Embeds the related rows of a page, one query per related table.
    pub async fn embed_page(
        &self,
        page: Page<R::Model>,
    ) -> Result<Page<Embedded<R::Model>>, AppError> {
        let Page {
            items,
            page,
            page_size,
            total,
        } = page;

        Ok(Page {
            items: R::embed(self.db, items).await?,
            page,
            page_size,
            total,
        })
    }

    /// Updates the row with `id`; members absent from the body keep their value.
    pub async fn update(&self, id: i32, payload: R::Payload) -> Result<R::Model, AppError> {
        self.repo
            .update_by(R::id_column(), id, R::into_changes(payload))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| not_found::<R>("id", id))
    }

    /// Updates every row whose `field` equals `value`.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - The updated rows, never empty
    /// - `Err(AppError::NotFound)` - No row matched
    pub async fn update_by<V>(
        &self,
        field: &str,
        value: V,
        payload: R::Payload,
    ) -> Result<Vec<R::Model>, AppError>
    where
        V: Into<Value> + Display + Clone,
    {
        let column = column::<R>(field)?;

        let updated = self
            .repo
            .update_by(column, value.clone(), R::into_changes(payload))
            .await?;
        if updated.is_empty() {
            return Err(not_found::<R>(field, value));
        }

        Ok(updated)
    }

    /// Applies bulk changes, each paired with the id of the row it targets.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - The rows that existed, after the update
    /// - `Err(AppError::Validation)` - An item carries no id
    pub async fn update_each(
        &self,
        items: Vec<(Option<i32>, R::Payload)>,
    ) -> Result<Vec<R::Model>, AppError> {
        let mut changes = Vec::with_capacity(items.len());
        let mut errors = Vec::new();
        for (index, (id, payload)) in items.into_iter().enumerate() {
            match id {
                Some(id) => changes.push((id, R::into_changes(payload))),
                None => errors.push(FieldError::new(format!("items[{index}].id"), "is required")),
            }
        }
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        Ok(self.repo.update_each(changes).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        match self.repo.delete_by(R::id_column(), id).await? {
            0 => Err(not_found::<R>("id", id)),
            _ => Ok(()),
        }
    }

    /// Deletes every row whose `field` equals `value` and returns how many were removed.
    pub async fn delete_by<V>(&self, field: &str, value: V) -> Result<u64, AppError>
    where
        V: Into<Value> + Display + Clone,
    {
        let column = column::<R>(field)?;

        match self.repo.delete_by(column, value.clone()).await? {
            0 => Err(not_found::<R>(field, value)),
            deleted => Ok(deleted),
        }
    }

    /// Updates the row with `id` if it exists, otherwise creates it under that id.
    pub async fn upsert(&self, id: i32, payload: R::Payload) -> Result<Upserted<R::Model>, AppError> {
        if self.repo.find_by_id(id).await?.is_some() {
            return Ok(Upserted::Updated(self.update(id, payload).await?));
        }

        let mut model = R::into_new(payload);
        model.set(R::id_column(), id.into());
        validate::<R>(&model, "")?;

        Ok(Upserted::Created(self.repo.create(model).await?))
    }

    /// Updates the rows whose `field` equals `value`, or creates one carrying
    /// `value` in `field` when none exists.
    ///
    /// # Returns
    /// - `Ok(Upserted::Updated(Model))` - First updated row, by id
    /// - `Ok(Upserted::Created(Model))` - The new row
    /// - `Err(AppError::Validation)` - Creation needed but a required member is missing
    pub async fn upsert_by<V>(
        &self,
        field: &str,
        value: V,
        payload: R::Payload,
    ) -> Result<Upserted<R::Model>, AppError>
    where
        V: Into<Value> + Display + Clone,
    {
        let column = column::<R>(field)?;

        if self.repo.find_one_by(column, value.clone()).await?.is_some() {
            let updated = self.update_by(field, value, payload).await?;
            return updated
                .into_iter()
                .next()
                .map(Upserted::Updated)
                .ok_or_else(|| AppError::InternalError(format!("{} vanished during upsert", R::NAME)));
        }

        let mut model = R::into_new(payload);
        model.set(column, value.into());
        validate::<R>(&model, "")?;

        Ok(Upserted::Created(self.repo.create(model).await?))
    }

    /// Replaces the rows under a parent with the submitted list.
    ///
    /// # Arguments
    /// - `parent_field` - JSON name of the parent column, e.g. `productID`
    /// - `parent_value` - Parent id from the path
    /// - `match_field` - JSON name of the column matching submitted rows to stored ones
    /// - `payloads` - Submitted rows; each must carry `match_field`
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Rows under the parent after the sync
    /// - `Err(AppError::Validation)` - A submitted row lacks `match_field`
    pub async fn sync<V>(
        &self,
        parent_field: &str,
        parent_value: V,
        match_field: &str,
        payloads: Vec<R::Payload>,
    ) -> Result<Vec<R::Model>, AppError>
    where
        V: Into<Value>,
    {
        let parent_column = column::<R>(parent_field)?;
        let match_column = column::<R>(match_field)?;

        let models: Vec<R::ActiveModel> = payloads.into_iter().map(R::into_changes).collect();
        let errors: Vec<FieldError> = models
            .iter()
            .enumerate()
            .filter(|(_, model)| !model.get(match_column).is_set())
            .map(|(index, _)| FieldError::new(format!("items[{index}].{match_field}"), "is required"))
            .collect();
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        tracing::debug!("Syncing {} rows by {} under {}", R::NAME, match_field, parent_field);

        Ok(self
            .repo
            .sync_by(parent_column, parent_value.into(), match_column, models)
            .await?)
    }
}

fn column<R: Resource>(field: &str) -> Result<R::Column, AppError> {
    R::column(field).ok_or_else(|| AppError::validation("path", format!("unknown field '{field}'")))
}

fn validate<R: Resource>(model: &R::ActiveModel, prefix: &str) -> Result<(), AppError> {
    let errors = missing_fields::<R>(model, prefix);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

fn not_found<R: Resource>(field: &str, value: impl Display) -> AppError {
    AppError::NotFound(format!("{} with {} {} not found", R::NAME, field, value))
}
