//! Batch loading of related rows for read responses.
//!
//! A page of rows is embedded with one `IN` query per related table instead
//! of one query per row.

use std::collections::HashMap;

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use serde::Serialize;

use crate::server::{
    error::AppError,
    model::{related::Embedded, resource::Resource},
};

/// Rows of `P` fetched by id.
pub struct Lookup<P: Resource> {
    rows: HashMap<i32, P::Model>,
}

impl<P: Resource> Lookup<P> {
    /// Fetches every row whose id is in `ids`; duplicates are queried once and
    /// an empty list skips the query.
    pub async fn load(db: &DatabaseConnection, mut ids: Vec<i32>) -> Result<Self, DbErr> {
        ids.sort_unstable();
        ids.dedup();
        if ids.is_empty() {
            return Ok(Self {
                rows: HashMap::new(),
            });
        }

        let rows = P::Entity::find()
            .filter(P::id_column().is_in(ids))
            .all(db)
            .await?;

        Ok(Self {
            rows: rows.into_iter().map(|row| (P::id_of(&row), row)).collect(),
        })
    }

    pub fn get(&self, id: i32) -> Option<&P::Model> {
        self.rows.get(&id)
    }
}

/// Embeds related rows into a list of `R` rows, one related table at a time.
///
/// ```rust,ignore
/// Embedder::<product_color::Entity>::new(rows)
///     .attach::<product::Entity>(db, "product", |row| Some(row.product_id))
///     .await?
///     .into_rows()
/// ```
pub struct Embedder<R: Resource> {
    rows: Vec<Embedded<R::Model>>,
}

impl<R: Resource> Embedder<R> {
    pub fn new(rows: Vec<R::Model>) -> Self {
        Self {
            rows: rows.into_iter().map(Embedded::plain).collect(),
        }
    }

    /// Embeds the `P` row each row's `key` points at under `member`.
    pub async fn attach<P: Resource>(
        self,
        db: &DatabaseConnection,
        member: &str,
        key: fn(&R::Model) -> Option<i32>,
    ) -> Result<Self, AppError> {
        self.attach_as::<P, P::Model>(db, member, key, <P::Model as Clone>::clone)
            .await
    }

    /// Like [`Embedder::attach`], embedding `view` of the related row instead
    /// of the row itself.
    pub async fn attach_as<P: Resource, V: Serialize>(
        mut self,
        db: &DatabaseConnection,
        member: &str,
        key: fn(&R::Model) -> Option<i32>,
        view: fn(&P::Model) -> V,
    ) -> Result<Self, AppError> {
        let ids = self.rows.iter().filter_map(|row| key(&row.row)).collect();
        let lookup = Lookup::<P>::load(db, ids).await?;

        for row in &mut self.rows {
            let related = key(&row.row).and_then(|id| lookup.get(id)).map(view);
            row.insert(member, related)?;
        }

        Ok(self)
    }

    pub fn into_rows(self) -> Vec<Embedded<R::Model>> {
        self.rows
    }
}
