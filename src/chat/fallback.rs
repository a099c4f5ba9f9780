use serde::Serialize;

use crate::api::ApiError;
use crate::constants::{FALLBACK_GATEWAY_TIMEOUT, FALLBACK_SERVER_ERROR, FALLBACK_UNCLASSIFIED};

/// Bucket a failed chat turn falls into, deciding what the user is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackKind {
    /// 504 from the gateway, or the transport timed out
    GatewayTimeout,
    /// 500 from the backend
    ServerError,
    /// Network failure, bad body, any other status
    Unclassified,
}

impl FallbackKind {
    pub fn classify(error: &ApiError) -> Self {
        match error.status {
            Some(504) => Self::GatewayTimeout,
            _ if error.is_timeout() => Self::GatewayTimeout,
            Some(500) => Self::ServerError,
            _ => Self::Unclassified,
        }
    }

    /// Fixed text appended as the assistant's reply
    pub fn message(&self) -> &'static str {
        match self {
            Self::GatewayTimeout => FALLBACK_GATEWAY_TIMEOUT,
            Self::ServerError => FALLBACK_SERVER_ERROR,
            Self::Unclassified => FALLBACK_UNCLASSIFIED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiErrorKind;

    #[test]
    fn test_gateway_timeout_status() {
        let err = ApiError::status(504, "Gateway Timeout");
        assert_eq!(FallbackKind::classify(&err), FallbackKind::GatewayTimeout);
        assert_eq!(
            FallbackKind::classify(&err).message(),
            "The AI service is taking longer than expected. Please try again later."
        );
    }

    #[test]
    fn test_transport_timeout() {
        let err = ApiError::timeout("operation timed out");
        assert_eq!(FallbackKind::classify(&err), FallbackKind::GatewayTimeout);
    }

    #[test]
    fn test_server_error() {
        let err = ApiError::status(500, "Internal Server Error");
        assert_eq!(FallbackKind::classify(&err), FallbackKind::ServerError);
        assert_eq!(
            FallbackKind::ServerError.message(),
            "I am having trouble connecting to the AI service. Please try again later."
        );
    }

    #[test]
    fn test_everything_else_is_unclassified() {
        let cases = [
            ApiError::status(502, "Bad Gateway"),
            ApiError::status(503, "Service Unavailable"),
            ApiError::status(404, "Not Found"),
            ApiError::new(ApiErrorKind::Connect, "connection refused"),
            ApiError::new(ApiErrorKind::Decode, "expected value at line 1"),
            ApiError::new(ApiErrorKind::Transport, "500 apples"),
        ];

        for err in &cases {
            assert_eq!(FallbackKind::classify(err), FallbackKind::Unclassified, "{err}");
        }
        assert_eq!(
            FallbackKind::Unclassified.message(),
            "Sorry, I encountered an error. Please try again."
        );
    }
}
