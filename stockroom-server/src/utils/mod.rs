//! Utility module - shared types and helpers
//!
//! - [`AppError`] - application error type
//! - [`AppResponse`] - uniform API envelope
//! - logging setup

pub mod error;
pub mod logger;
pub mod result;

pub use error::AppError;
pub use result::AppResult;

/// Uniform API envelope
///
/// Every public catalog operation resolves to this shape; failures are
/// carried as a value, never as a transport error:
///
/// ```json
/// {"success": true, "data": ...}
/// {"success": false, "error": "..."}
/// ```
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> AppResponse<T> {
    /// Successful response carrying data
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Failed response carrying an error message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

impl AppResponse<()> {
    /// Successful response with no data (delete operations)
    pub fn ok() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_omits_error_key() {
        let json = serde_json::to_value(AppResponse::success(5)).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": 5}));
    }

    #[test]
    fn error_envelope_omits_data_key() {
        let json = serde_json::to_value(AppResponse::<()>::error("boom")).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "error": "boom"}));
    }

    #[test]
    fn ok_envelope_is_bare_success() {
        let json = serde_json::to_value(AppResponse::ok()).unwrap();
        assert_eq!(json, serde_json::json!({"success": true}));
    }
}
