use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

pub const SUCCESS: &str = "Success!";
pub const CREATED: &str = "Created!";
pub const UPDATED: &str = "Updated!";
pub const DELETED: &str = "Deleted!";
pub const BAD_REQUEST: &str = "Bad request!";
pub const FORBIDDEN: &str = "Forbidden!";
pub const NOT_FOUND: &str = "Not found!";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed!";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error!";
pub const VALIDATION_FAILED: &str = "Error validate request";

/// Response envelope shared by every endpoint.
///
/// Optional members are left out of the JSON when absent, so a plain
/// get-by-id reply only carries `success`, `message` and `data` while list
/// replies additionally carry the paging members.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
    /// Number of rows in the returned page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl<T> ApiResponse<T> {
    /// Creates an envelope without payload.
    ///
    /// # Arguments
    /// - `status` - HTTP status code the envelope is sent with
    /// - `message` - Human readable message
    ///
    /// # Returns
    /// - `ApiResponse<T>` - Envelope with `success` derived from `status`
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            success: status < 400,
            message: message.into(),
            data: None,
            meta: None,
            length: None,
            page: None,
            page_size: None,
            total: None,
        }
    }

    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }
}

/// Default envelope message for a status code, used when a response is
/// produced without a handler of its own.
pub fn default_message(status: u16) -> &'static str {
    match status {
        201 => CREATED,
        403 => FORBIDDEN,
        404 => NOT_FOUND,
        405 => METHOD_NOT_ALLOWED,
        s if s >= 500 => INTERNAL_SERVER_ERROR,
        s if s >= 400 => BAD_REQUEST,
        _ => SUCCESS,
    }
}

/// One rejected request member, listed under `meta.errors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Payload of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub name: String,
    pub version: String,
}
