//! Error type for remote gateway operations.

use std::fmt;

/// Result type for gateway operations
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Message used when the backend did not supply a `detail`.
pub const GENERIC_REMOTE_FAILURE: &str = "Request failed. Check backend connection.";

/// Backend operations exposed by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayOperation {
    ListBuildings,
    RegisterBuilding,
    GetForecast,
    GetIntensity,
    GetInstitutionRisk,
    Optimize,
    GetDashboardSummary,
}

impl GatewayOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ListBuildings => "list_buildings",
            Self::RegisterBuilding => "register_building",
            Self::GetForecast => "get_forecast",
            Self::GetIntensity => "get_intensity",
            Self::GetInstitutionRisk => "get_institution_risk",
            Self::Optimize => "optimize",
            Self::GetDashboardSummary => "get_dashboard_summary",
        }
    }
}

impl fmt::Display for GatewayOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a remote call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    /// The backend answered with a non-2xx status.
    Status,
    /// No response: connection refused, reset, DNS failure.
    Transport,
    /// No response within the configured request timeout.
    Timeout,
    /// A 2xx response whose body did not decode into the expected type.
    Decode,
}

/// Failure of a single round trip to the backend.
///
/// `status` is the HTTP status when a response arrived, `detail` the
/// backend-supplied `detail` string when the error body carried one.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteError {
    pub operation: GatewayOperation,
    pub kind: RemoteErrorKind,
    pub status: Option<u16>,
    pub detail: Option<String>,
    /// Transport or decoder message, for logs only.
    pub cause: Option<String>,
}

impl RemoteError {
    /// Non-2xx response with an optional backend detail.
    pub fn status(operation: GatewayOperation, status: u16, detail: Option<String>) -> Self {
        Self {
            operation,
            kind: RemoteErrorKind::Status,
            status: Some(status),
            detail,
            cause: None,
        }
    }

    /// Request never produced a response.
    pub fn transport(operation: GatewayOperation, cause: impl Into<String>) -> Self {
        Self {
            operation,
            kind: RemoteErrorKind::Transport,
            status: None,
            detail: None,
            cause: Some(cause.into()),
        }
    }

    /// Request exceeded the configured timeout.
    pub fn timeout(operation: GatewayOperation, cause: impl Into<String>) -> Self {
        Self {
            operation,
            kind: RemoteErrorKind::Timeout,
            status: None,
            detail: None,
            cause: Some(cause.into()),
        }
    }

    /// Successful status but undecodable body.
    pub fn decode(operation: GatewayOperation, status: u16, cause: impl Into<String>) -> Self {
        Self {
            operation,
            kind: RemoteErrorKind::Decode,
            status: Some(status),
            detail: None,
            cause: Some(cause.into()),
        }
    }

    /// Backend detail verbatim, or the generic transport-failure message.
    pub fn message(&self) -> &str {
        self.detail_or(GENERIC_REMOTE_FAILURE)
    }

    /// Backend detail verbatim, or `fallback`.
    pub fn detail_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.detail.as_deref() {
            Some(detail) if !detail.is_empty() => detail,
            _ => fallback,
        }
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed", self.operation)?;
        if let Some(status) = self.status {
            write!(f, " (status {})", status)?;
        }
        write!(f, ": {}", self.message())?;
        if let Some(ref cause) = self.cause {
            write!(f, " [{}]", cause)?;
        }
        Ok(())
    }
}

impl std::error::Error for RemoteError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_prefers_backend_detail() {
        let err = RemoteError::status(
            GatewayOperation::Optimize,
            400,
            Some("No forecast data for building".to_string()),
        );
        assert_eq!(err.message(), "No forecast data for building");
        assert_eq!(err.status, Some(400));
    }

    #[test]
    fn test_message_falls_back_without_detail() {
        let err = RemoteError::transport(GatewayOperation::ListBuildings, "connection refused");
        assert_eq!(err.message(), GENERIC_REMOTE_FAILURE);
        assert_eq!(err.detail_or("custom"), "custom");
        assert!(err.status.is_none());
    }

    #[test]
    fn test_empty_detail_is_treated_as_absent() {
        let err = RemoteError::status(GatewayOperation::GetIntensity, 500, Some(String::new()));
        assert_eq!(err.message(), GENERIC_REMOTE_FAILURE);
    }

    #[test]
    fn test_display_includes_operation_and_status() {
        let err = RemoteError::status(GatewayOperation::GetForecast, 404, Some("Not found".into()));
        let text = err.to_string();
        assert!(text.contains("get_forecast"));
        assert!(text.contains("404"));
        assert!(text.contains("Not found"));
    }
}
