//! Translation of a [`FindRequest`] into a typed query for one resource.

use entity::sea_orm_active_enums::ItemStatus;
use sea_orm::{ColumnTrait, Condition, Order, Value};

use crate::{
    model::query::{FilterValue, FindRequest, SortDirection, UNLIMITED},
    server::{error::AppError, model::resource::Resource},
};

/// A validated list query.
///
/// Field names from the request have been resolved to columns and the paging
/// members normalised, so the repository only assembles the statement.
pub struct FindQuery<R: Resource> {
    pub condition: Condition,
    /// Status counted for `total` when no search term is present.
    pub status: ItemStatus,
    pub searching: bool,
    pub sort_column: R::Column,
    pub order: Order,
    pub page: u64,
    pub page_size: i64,
    pub offset: u64,
    /// `None` when the page size disables the limit.
    pub limit: Option<u64>,
}

impl<R: Resource> FindQuery<R> {
    /// Validates a list request against the resource's field whitelist.
    ///
    /// # Arguments
    /// - `request` - List request as received from the client
    ///
    /// # Returns
    /// - `Ok(FindQuery)` - Query ready for `CrudRepository::find`
    /// - `Err(AppError::Validation)` - Unknown field name, a page size that is neither positive nor -1,
    ///   or a page whose offset does not fit a signed 64-bit integer
    pub fn from_request(request: &FindRequest) -> Result<Self, AppError> {
        let condition = build_condition::<R>(request)?;
        let sort_column = resolve::<R>("sorting.column", &request.sorting.column)?;

        let page = request.paginator.page.max(1) as u64;
        let page_size = request.paginator.page_size;
        let (offset, limit) = match page_size {
            UNLIMITED => (0, None),
            size if size > 0 => (offset_of(page, size as u64)?, Some(size as u64)),
            _ => {
                return Err(AppError::validation(
                    "paginator.pageSize",
                    "must be positive or -1",
                ))
            }
        };

        Ok(Self {
            condition,
            status: request.filter.status,
            searching: !request.search.term.is_empty(),
            sort_column,
            order: match request.sorting.direction {
                SortDirection::Asc => Order::Asc,
                SortDirection::Desc => Order::Desc,
            },
            page,
            page_size,
            offset,
            limit,
        })
    }
}

/// Rows skipped before `page`; SQLite takes the offset as a signed integer.
fn offset_of(page: u64, size: u64) -> Result<u64, AppError> {
    (page - 1)
        .checked_mul(size)
        .filter(|offset| *offset <= i64::MAX as u64)
        .ok_or_else(|| AppError::validation("paginator.page", "is too large for the page size"))
}

/// One page of rows with the paging members echoed back to the client.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub page_size: i64,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total: self.total,
        }
    }
}

/// Builds the WHERE condition of a list request.
///
/// Filter items containing the `-1` sentinel select rows by `filter.status`,
/// any other items select rows whose `filter.field` is one of them. A non-empty
/// search term further restricts `search.field` with a substring match; the
/// term is used as sent, so a term of spaces matches values containing them.
///
/// # Returns
/// - `Ok(Condition)` - Condition over the resource's columns
/// - `Err(AppError::Validation)` - `filter.field` or `search.field` is not a known field
pub fn build_condition<R: Resource>(request: &FindRequest) -> Result<Condition, AppError> {
    let filter = &request.filter;

    let mut condition = if filter.selects_all() {
        Condition::all().add(R::status_column().eq(filter.status))
    } else {
        let column = resolve::<R>("filter.field", &filter.field)?;
        Condition::all().add(column.is_in(filter.items.iter().map(filter_value)))
    };

    let term = &request.search.term;
    if !term.is_empty() {
        let column = resolve::<R>("search.field", &request.search.field)?;
        condition = condition.add(column.like(format!("%{term}%")));
    }

    Ok(condition)
}

fn resolve<R: Resource>(member: &str, field: &str) -> Result<R::Column, AppError> {
    R::column(field)
        .ok_or_else(|| AppError::validation(member, format!("unknown field '{field}'")))
}

fn filter_value(item: &FilterValue) -> Value {
    match item {
        FilterValue::Int(value) => Value::from(*value),
        FilterValue::Text(value) => Value::from(value.clone()),
    }
}

#[cfg(test)]
mod tests {
    use entity::color;
    use sea_orm::{EntityTrait, QueryFilter, QueryTrait};

    use super::*;
    use crate::model::query::{FilterDto, PaginatorDto, SearchDto};

    fn where_clause(request: &FindRequest) -> String {
        let condition = build_condition::<color::Entity>(request).unwrap();
        color::Entity::find()
            .filter(condition)
            .build(sea_orm::DbBackend::Sqlite)
            .to_string()
            .split_once(" WHERE ")
            .map(|(_, clause)| clause.to_string())
            .unwrap_or_default()
    }

    #[test]
    fn sentinel_filters_by_status() {
        let sql = where_clause(&FindRequest::default());

        assert!(sql.contains(r#""color"."status" = 'active'"#), "{sql}");
    }

    #[test]
    fn explicit_items_filter_by_field() {
        let request = FindRequest {
            filter: FilterDto {
                field: "name".to_string(),
                items: vec![FilterValue::Text("Red".to_string()), FilterValue::Text("Blue".to_string())],
                ..Default::default()
            },
            ..Default::default()
        };

        let sql = where_clause(&request);

        assert!(sql.contains(r#""color"."name" IN ('Red', 'Blue')"#), "{sql}");
        assert!(!sql.contains("status"), "{sql}");
    }

    #[test]
    fn search_term_adds_like() {
        let request = FindRequest {
            search: SearchDto {
                field: "hexColor".to_string(),
                term: "ff".to_string(),
            },
            ..Default::default()
        };

        let sql = where_clause(&request);

        assert!(sql.contains(r#""color"."hex_color" LIKE '%ff%'"#), "{sql}");
        assert!(sql.contains("status"), "{sql}");
    }

    #[test]
    fn unknown_field_is_rejected() {
        let request = FindRequest {
            search: SearchDto {
                field: "password".to_string(),
                term: "x".to_string(),
            },
            ..Default::default()
        };

        let result = build_condition::<color::Entity>(&request);

        assert!(matches!(result, Err(AppError::Validation(errors)) if errors[0].field == "search.field"));
    }

    #[test]
    fn paging_is_normalised() {
        let request = FindRequest {
            paginator: PaginatorDto {
                page: 0,
                page_size: 20,
            },
            ..Default::default()
        };

        let query = FindQuery::<color::Entity>::from_request(&request).unwrap();

        assert_eq!(query.page, 1);
        assert_eq!(query.offset, 0);
        assert_eq!(query.limit, Some(20));
    }

    #[test]
    fn third_page_skips_two_pages() {
        let request = FindRequest {
            paginator: PaginatorDto {
                page: 3,
                page_size: 10,
            },
            ..Default::default()
        };

        let query = FindQuery::<color::Entity>::from_request(&request).unwrap();

        assert_eq!(query.offset, 20);
    }

    #[test]
    fn minus_one_disables_limit() {
        let request = FindRequest {
            paginator: PaginatorDto {
                page: 4,
                page_size: UNLIMITED,
            },
            ..Default::default()
        };

        let query = FindQuery::<color::Entity>::from_request(&request).unwrap();

        assert_eq!(query.limit, None);
        assert_eq!(query.offset, 0);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let request = FindRequest {
            paginator: PaginatorDto {
                page: 1,
                page_size: 0,
            },
            ..Default::default()
        };

        assert!(FindQuery::<color::Entity>::from_request(&request).is_err());
    }

    #[test]
    fn whitespace_term_is_searched_verbatim() {
        let request = FindRequest {
            search: SearchDto {
                field: "name".to_string(),
                term: "  ".to_string(),
            },
            ..Default::default()
        };

        let sql = where_clause(&request);
        let query = FindQuery::<color::Entity>::from_request(&request).unwrap();

        assert!(sql.contains(r#""color"."name" LIKE '%  %'"#), "{sql}");
        assert!(query.searching);
    }

    #[test]
    fn huge_page_is_rejected() {
        let request = FindRequest {
            paginator: PaginatorDto {
                page: i64::MAX,
                page_size: 100,
            },
            ..Default::default()
        };

        let result = FindQuery::<color::Entity>::from_request(&request);

        assert!(matches!(result, Err(AppError::Validation(errors)) if errors[0].field == "paginator.page"));
    }

    #[test]
    fn last_representable_offset_is_accepted() {
        let request = FindRequest {
            paginator: PaginatorDto {
                page: i64::MAX,
                page_size: 1,
            },
            ..Default::default()
        };

        let query = FindQuery::<color::Entity>::from_request(&request).unwrap();

        assert_eq!(query.offset, i64::MAX as u64 - 1);
    }
}
