//! Read rows serialised together with the rows their foreign keys point at.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::server::error::AppError;

/// A row plus the related rows embedded under their own JSON members, such
/// as `product` or `sewingLine`. A foreign key without a matching row is
/// embedded as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct Embedded<T> {
    #[serde(flatten)]
    pub row: T,
    #[serde(flatten)]
    pub related: Map<String, Value>,
}

impl<T> Embedded<T> {
    pub fn plain(row: T) -> Self {
        Self {
            row,
            related: Map::new(),
        }
    }

    /// Embeds `related` under `member`, replacing what was there.
    pub fn insert<M: Serialize>(&mut self, member: &str, related: Option<M>) -> Result<(), AppError> {
        let value = serde_json::to_value(related).map_err(|e| {
            AppError::InternalError(format!("Failed to serialise related {}: {}", member, e))
        })?;
        self.related.insert(member.to_string(), value);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Row {
        id: i32,
        product_id: i32,
    }

    #[test]
    fn related_rows_sit_beside_row_members() {
        let mut embedded = Embedded::plain(Row { id: 1, product_id: 7 });
        embedded.insert("product", Some(json!({ "id": 7 }))).unwrap();
        embedded.insert::<Value>("color", None).unwrap();

        let json = serde_json::to_value(&embedded).unwrap();

        assert_eq!(json, json!({ "id": 1, "productId": 7, "product": { "id": 7 }, "color": null }));
    }
}
