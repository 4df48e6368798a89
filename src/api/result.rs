use serde::Serialize;

/// Uniform success/failure envelope returned by every `ApiClient`
/// operation. Transport failures, bad statuses, and unparseable bodies
/// all end up here; client methods never return `Err` and never panic.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub status_code: Option<u16>,
}

impl<T> ApiResult<T> {
    /// A 2xx response with a parsed body.
    pub fn ok(data: T, status_code: u16) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            status_code: Some(status_code),
        }
    }

    /// A failure before any HTTP status was available: DNS, connection,
    /// timeout, or an unreadable/malformed body.
    pub fn transport_error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            status_code: None,
        }
    }

    /// A response that arrived but carried a non-success status.
    pub fn http_error(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            status_code: Some(status_code),
        }
    }

    /// The error message, or an empty string for successful results.
    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope() {
        let result = ApiResult::ok(vec![1, 2, 3], 200);
        assert!(result.success);
        assert_eq!(result.data, Some(vec![1, 2, 3]));
        assert_eq!(result.status_code, Some(200));
        assert_eq!(result.error_message(), "");
    }

    #[test]
    fn test_transport_error_has_no_status() {
        let result: ApiResult<()> = ApiResult::transport_error("connection refused");
        assert!(!result.success);
        assert!(result.status_code.is_none());
        assert_eq!(result.error_message(), "connection refused");
    }

    #[test]
    fn test_http_error_keeps_status() {
        let result: ApiResult<()> = ApiResult::http_error(404, "Not found: no such user");
        assert!(!result.success);
        assert_eq!(result.status_code, Some(404));
    }
}
