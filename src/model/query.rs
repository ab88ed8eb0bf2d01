use entity::sea_orm_active_enums::ItemStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sentinel placed in `filter.items` to select rows by status instead of by value.
pub const ALL_ITEMS: i64 = -1;

/// Page size that disables the row limit.
pub const UNLIMITED: i64 = -1;

/// Body of every `POST /find` endpoint.
///
/// Every section is optional and falls back to the defaults below, so `{}`
/// lists the first ten active rows ordered by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct FindRequest {
    pub filter: FilterDto,
    pub paginator: PaginatorDto,
    pub search: SearchDto,
    pub sorting: SortingDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct FilterDto {
    #[schema(value_type = String, example = "active")]
    pub status: ItemStatus,
    pub field: String,
    pub items: Vec<FilterValue>,
}

impl Default for FilterDto {
    fn default() -> Self {
        Self {
            status: ItemStatus::Active,
            field: "id".to_string(),
            items: vec![FilterValue::Int(ALL_ITEMS)],
        }
    }
}

impl FilterDto {
    /// Whether the filter selects by status rather than by `field IN items`.
    pub fn selects_all(&self) -> bool {
        self.items.is_empty() || self.items.contains(&FilterValue::Int(ALL_ITEMS))
    }
}

/// A filter item, either numeric ids or textual values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum FilterValue {
    Int(i64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginatorDto {
    pub page: i64,
    pub page_size: i64,
}

impl Default for PaginatorDto {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SearchDto {
    pub field: String,
    pub term: String,
}

impl Default for SearchDto {
    fn default() -> Self {
        Self {
            field: "id".to_string(),
            term: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SortingDto {
    pub column: String,
    pub direction: SortDirection,
}

impl Default for SortingDto {
    fn default() -> Self {
        Self {
            column: "id".to_string(),
            direction: SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "ASC", alias = "Asc")]
    Asc,
    #[serde(alias = "DESC", alias = "Desc")]
    Desc,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_uses_defaults() {
        let request: FindRequest = serde_json::from_str("{}").unwrap();

        assert_eq!(request, FindRequest::default());
        assert!(request.filter.selects_all());
        assert_eq!(request.paginator.page_size, 10);
    }

    #[test]
    fn parses_mixed_filter_items_and_upper_case_direction() {
        let request: FindRequest = serde_json::from_value(serde_json::json!({
            "filter": { "status": "inactive", "field": "name", "items": ["Red", 3] },
            "paginator": { "page": 2, "pageSize": -1 },
            "sorting": { "column": "name", "direction": "DESC" }
        }))
        .unwrap();

        assert_eq!(request.filter.status, ItemStatus::Inactive);
        assert_eq!(
            request.filter.items,
            vec![FilterValue::Text("Red".to_string()), FilterValue::Int(3)]
        );
        assert!(!request.filter.selects_all());
        assert_eq!(request.paginator.page_size, UNLIMITED);
        assert_eq!(request.sorting.direction, SortDirection::Desc);
        assert_eq!(request.search, SearchDto::default());
    }
}
