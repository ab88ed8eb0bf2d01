use std::marker::PhantomData;

use entity::sea_orm_active_enums::ItemStatus;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait, Value,
};

use crate::server::model::{
    query::{FindQuery, Page},
    resource::Resource,
};

/// Table operations shared by every resource.
///
/// Statements issued inside a transaction only ever go through the transaction
/// handle, never through `db`, so a pool of one connection cannot deadlock.
pub struct CrudRepository<'a, R: Resource> {
    db: &'a DatabaseConnection,
    resource: PhantomData<R>,
}

impl<'a, R: Resource> CrudRepository<'a, R> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            resource: PhantomData,
        }
    }

    /// Inserts one row and returns it as stored.
    pub async fn create(&self, model: R::ActiveModel) -> Result<R::Model, DbErr> {
        model.insert(self.db).await
    }

    /// Inserts every row inside one transaction, so either all rows are stored or none.
    pub async fn create_many(&self, models: Vec<R::ActiveModel>) -> Result<Vec<R::Model>, DbErr> {
        let txn = self.db.begin().await?;

        let mut created = Vec::with_capacity(models.len());
        for model in models {
            created.push(model.insert(&txn).await?);
        }

        txn.commit().await?;

        Ok(created)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<R::Model>, DbErr> {
        self.find_one_by(R::id_column(), id).await
    }

    /// Gets the first row, by id, whose `column` equals `value`.
    pub async fn find_one_by(
        &self,
        column: R::Column,
        value: impl Into<Value>,
    ) -> Result<Option<R::Model>, DbErr> {
        R::Entity::find()
            .filter(column.eq(value))
            .order_by_asc(R::id_column())
            .one(self.db)
            .await
    }

    /// Gets one page of rows matching a list query.
    ///
    /// # Arguments
    /// - `query` - Validated list query
    ///
    /// # Returns
    /// - `Ok(Page)` - Rows of the requested page; `total` counts the rows matching
    ///   the search when a search term is present, otherwise the rows with the
    ///   filtered status
    /// - `Err(DbErr)` - Database error
    pub async fn find(&self, query: &FindQuery<R>) -> Result<Page<R::Model>, DbErr> {
        let filtered = R::Entity::find().filter(query.condition.clone());

        let mut select = filtered
            .clone()
            .order_by(query.sort_column, query.order.clone())
            .order_by_asc(R::id_column())
            .offset(query.offset);
        if let Some(limit) = query.limit {
            select = select.limit(limit);
        }
        let items = select.all(self.db).await?;

        let total = if query.searching {
            filtered.count(self.db).await?
        } else {
            self.count_by_status(query.status).await?
        };

        Ok(Page {
            items,
            page: query.page,
            page_size: query.page_size,
            total,
        })
    }

    pub async fn count_by_status(&self, status: ItemStatus) -> Result<u64, DbErr> {
        R::Entity::find()
            .filter(R::status_column().eq(status))
            .count(self.db)
            .await
    }

    /// Applies `changes` to every row whose `column` equals `value`.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - The updated rows ordered by id, empty when nothing matched
    /// - `Err(DbErr)` - Database error
    pub async fn update_by(
        &self,
        column: R::Column,
        value: impl Into<Value>,
        changes: R::ActiveModel,
    ) -> Result<Vec<R::Model>, DbErr> {
        let ids: Vec<i32> = R::Entity::find()
            .select_only()
            .column(R::id_column())
            .filter(column.eq(value))
            .into_tuple()
            .all(self.db)
            .await?;

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        R::Entity::update_many()
            .set(changes)
            .filter(R::id_column().is_in(ids.clone()))
            .exec(self.db)
            .await?;

        R::Entity::find()
            .filter(R::id_column().is_in(ids))
            .order_by_asc(R::id_column())
            .all(self.db)
            .await
    }

    /// Applies each change set to the row with the paired id, inside one transaction.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - The rows that existed, after the update
    /// - `Err(DbErr)` - Database error, nothing is updated
    pub async fn update_each(
        &self,
        changes: Vec<(i32, R::ActiveModel)>,
    ) -> Result<Vec<R::Model>, DbErr> {
        let txn = self.db.begin().await?;

        let mut ids = Vec::with_capacity(changes.len());
        for (id, model) in changes {
            let result = R::Entity::update_many()
                .set(model)
                .filter(R::id_column().eq(id))
                .exec(&txn)
                .await?;
            if result.rows_affected > 0 {
                ids.push(id);
            }
        }

        let updated = R::Entity::find()
            .filter(R::id_column().is_in(ids))
            .order_by_asc(R::id_column())
            .all(&txn)
            .await?;

        txn.commit().await?;

        Ok(updated)
    }

    /// Deletes every row whose `column` equals `value` and returns how many were removed.
    pub async fn delete_by(&self, column: R::Column, value: impl Into<Value>) -> Result<u64, DbErr> {
        let result = R::Entity::delete_many()
            .filter(column.eq(value))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Replaces the rows under a parent with a submitted list.
    ///
    /// Submitted rows are matched against the parent's existing rows on
    /// `match_column`: matches are updated, the others inserted, and existing
    /// rows whose match value was not submitted are deleted. Only rows under
    /// the parent are touched. Runs inside one transaction.
    ///
    /// # Arguments
    /// - `parent_column` - Column holding the parent id, e.g. `productID`
    /// - `parent_value` - Parent id, written onto every submitted row
    /// - `match_column` - Column identifying a row under the parent, e.g. `sewingLineID`
    /// - `models` - Submitted rows as change sets
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Rows under the parent after the sync, ordered by id
    /// - `Err(DbErr)` - Database error, nothing is changed
    pub async fn sync_by(
        &self,
        parent_column: R::Column,
        parent_value: Value,
        match_column: R::Column,
        models: Vec<R::ActiveModel>,
    ) -> Result<Vec<R::Model>, DbErr> {
        let txn = self.db.begin().await?;

        let existing = R::Entity::find()
            .filter(parent_column.eq(parent_value.clone()))
            .all(&txn)
            .await?;

        let mut kept: Vec<Value> = Vec::new();
        for mut model in models {
            model.set(parent_column, parent_value.clone());

            let key = model.get(match_column).into_value();
            let matched = key
                .as_ref()
                .and_then(|key| existing.iter().find(|row| &row.get(match_column) == key));

            match matched {
                Some(row) => {
                    let id = row.get(R::id_column());
                    R::Entity::update_many()
                        .set(model)
                        .filter(R::id_column().eq(id.clone()))
                        .exec(&txn)
                        .await?;
                    kept.push(id);
                }
                None => {
                    R::fill_defaults(&mut model);
                    model.insert(&txn).await?;
                }
            }
        }

        let stale: Vec<Value> = existing
            .iter()
            .map(|row| row.get(R::id_column()))
            .filter(|id| !kept.contains(id))
            .collect();
        if !stale.is_empty() {
            R::Entity::delete_many()
                .filter(R::id_column().is_in(stale))
                .exec(&txn)
                .await?;
        }

        let rows = R::Entity::find()
            .filter(parent_column.eq(parent_value))
            .order_by_asc(R::id_column())
            .all(&txn)
            .await?;

        txn.commit().await?;

        Ok(rows)
    }
}
