//! Error types for study-catalog
//!
//! This module provides error handling for the library, including:
//! - The boundary-layer error kinds (not found, invalid enum, validation, malformed id)
//! - HTTP status code mapping for API integration
//! - Structured error responses with machine-readable error codes

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::types::{EnumKind, MaterialId};

/// Result type alias for study-catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for study-catalog
///
/// The store and the query engine never produce the boundary variants
/// (`InvalidEnum`, `Validation`, `MalformedId`) for well-typed input; those
/// are raised while parsing requests, before anything reaches the store.
#[derive(Debug, Error)]
pub enum Error {
    /// No material with this id
    #[error("material {0} not found")]
    NotFound(MaterialId),

    /// A category, subject or year level outside its fixed set
    #[error("invalid {kind}: '{value}'")]
    InvalidEnum {
        /// Which enumeration the value was checked against
        kind: EnumKind,
        /// The rejected value, as received
        value: String,
    },

    /// Creation payload failed validation; one entry per offending field
    #[error("invalid material data: {}", summarize_fields(.0))]
    Validation(Vec<FieldError>),

    /// Non-numeric id in a path segment
    #[error("invalid ID format: '{0}'")]
    MalformedId(String),

    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "bind_address")
        key: Option<String>,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// API server error
    #[error("API server error: {0}")]
    ApiServerError(String),

    /// Storage backend failure, surfaced to callers as an opaque internal error
    #[error("storage error: {0}")]
    Storage(String),
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// JSON field name, as sent by the client (e.g., "yearLevel")
    pub field: String,
    /// What is wrong with the value
    pub message: String,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

fn summarize_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| format!("{}: {}", f.field, f.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// API error response format
///
/// This structure is returned by API endpoints when an error occurs.
///
/// # Example JSON Response
///
/// ```json
/// {
///   "error": {
///     "code": "invalid_enum",
///     "message": "invalid category: 'novels'",
///     "details": {
///       "kind": "category",
///       "value": "novels",
///       "allowed": ["book", "notes", "past_paper", "research"]
///     }
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// The error details
    pub error: ErrorDetail,
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "not_found", "validation_error")
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional context about the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Create a new API error with code and message
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                details: None,
            },
        }
    }

    /// Create an API error with additional details
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                details: Some(details),
            },
        }
    }

    /// Create an "internal server error"
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("internal_error", message)
    }
}

/// Convert errors to HTTP status codes for API responses
pub trait ToHttpStatus {
    /// Get the HTTP status code for this error
    fn status_code(&self) -> u16;

    /// Get the machine-readable error code
    fn error_code(&self) -> &str;
}

impl ToHttpStatus for Error {
    fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - rejected at the boundary
            Error::InvalidEnum { .. } => 400,
            Error::Validation(_) => 400,
            Error::MalformedId(_) => 400,
            Error::Config { .. } => 400,

            // 404 Not Found
            Error::NotFound(_) => 404,

            // 500 Internal Server Error
            Error::Io(_) => 500,
            Error::Serialization(_) => 500,
            Error::ApiServerError(_) => 500,
            Error::Storage(_) => 500,
        }
    }

    fn error_code(&self) -> &str {
        match self {
            Error::NotFound(_) => "not_found",
            Error::InvalidEnum { .. } => "invalid_enum",
            Error::Validation(_) => "validation_error",
            Error::MalformedId(_) => "malformed_id",
            Error::Config { .. } => "config_error",
            Error::Io(_) => "io_error",
            Error::Serialization(_) => "serialization_error",
            Error::ApiServerError(_) => "api_server_error",
            Error::Storage(_) => "internal_error",
        }
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        let code = error.error_code().to_string();

        // Storage failures stay opaque to clients
        let message = match &error {
            Error::Storage(_) => "internal server error".to_string(),
            _ => error.to_string(),
        };

        let details = match &error {
            Error::NotFound(id) => Some(serde_json::json!({
                "material_id": id,
            })),
            Error::InvalidEnum { kind, value } => Some(serde_json::json!({
                "kind": kind,
                "value": value,
                "allowed": kind.allowed_values(),
            })),
            Error::Validation(fields) => Some(serde_json::json!({
                "fields": fields,
            })),
            Error::MalformedId(raw) => Some(serde_json::json!({
                "id": raw,
            })),
            Error::Config { key: Some(key), .. } => Some(serde_json::json!({
                "key": key,
            })),
            _ => None,
        };

        ApiError {
            error: ErrorDetail {
                code,
                message,
                details,
            },
        }
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    /// Every Error variant with its expected (status, code)
    fn all_error_variants() -> Vec<(Error, u16, &'static str)> {
        vec![
            (Error::NotFound(MaterialId(9)), 404, "not_found"),
            (
                Error::InvalidEnum {
                    kind: EnumKind::Category,
                    value: "novels".into(),
                },
                400,
                "invalid_enum",
            ),
            (
                Error::Validation(vec![FieldError::new("title", "must not be empty")]),
                400,
                "validation_error",
            ),
            (Error::MalformedId("abc".into()), 400, "malformed_id"),
            (
                Error::Config {
                    message: "bad value".into(),
                    key: Some("bind_address".into()),
                },
                400,
                "config_error",
            ),
            (
                Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")),
                500,
                "io_error",
            ),
            (
                Error::ApiServerError("bind failed".into()),
                500,
                "api_server_error",
            ),
            (Error::Storage("backend down".into()), 500, "internal_error"),
        ]
    }

    #[test]
    fn every_variant_maps_to_expected_status_and_code() {
        for (error, status, code) in all_error_variants() {
            assert_eq!(error.status_code(), status, "status for {error:?}");
            assert_eq!(error.error_code(), code, "code for {error:?}");
        }
    }

    #[test]
    fn invalid_enum_is_bad_request_not_not_found() {
        let invalid = Error::InvalidEnum {
            kind: EnumKind::Subject,
            value: "biology".into(),
        };
        assert_ne!(
            invalid.status_code(),
            Error::NotFound(MaterialId(1)).status_code()
        );
    }

    #[test]
    fn invalid_enum_details_list_allowed_values() {
        let api: ApiError = Error::InvalidEnum {
            kind: EnumKind::Category,
            value: "novels".into(),
        }
        .into();

        let details = api.error.details.unwrap();
        assert_eq!(details["kind"], "category");
        assert_eq!(details["value"], "novels");
        assert_eq!(
            details["allowed"],
            serde_json::json!(["book", "notes", "past_paper", "research"])
        );
    }

    #[test]
    fn validation_details_enumerate_fields() {
        let api: ApiError = Error::Validation(vec![
            FieldError::new("title", "must not be empty"),
            FieldError::new("category", "unknown category 'novels'"),
        ])
        .into();

        assert_eq!(api.error.code, "validation_error");
        assert!(api.error.message.contains("title: must not be empty"));
        let fields = api.error.details.unwrap()["fields"].clone();
        assert_eq!(fields.as_array().unwrap().len(), 2);
        assert_eq!(fields[1]["field"], "category");
    }

    #[test]
    fn storage_errors_do_not_leak_backend_messages() {
        let api: ApiError = Error::Storage("connection refused to 10.0.0.3".into()).into();
        assert_eq!(api.error.code, "internal_error");
        assert!(!api.error.message.contains("10.0.0.3"));
        assert!(api.error.details.is_none());
    }

    #[test]
    fn not_found_includes_material_id() {
        let api: ApiError = Error::NotFound(MaterialId(42)).into();
        assert_eq!(api.error.details.unwrap()["material_id"], 42);
        assert_eq!(api.error.message, "material 42 not found");
    }

    #[test]
    fn details_are_omitted_from_json_when_absent() {
        let json = serde_json::to_value(ApiError::internal("boom")).unwrap();
        assert!(json["error"].get("details").is_none());
    }
}
