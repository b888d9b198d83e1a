use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

/// Error types for the dashboard server.
/// Only `Validation` and `UnknownCommodity` are user-facing; the rest are
/// startup or internal failures.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("{0}")]
    Validation(String),

    #[error("unknown commodity: {0}")]
    UnknownCommodity(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl DashboardError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::UnknownCommodity(_) => "unknown_commodity",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Internal(_) => "internal",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::UnknownCommodity(_) => StatusCode::NOT_FOUND,
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(e: std::io::Error) -> Self {
        DashboardError::Io(e.to_string())
    }
}

/// Request bodies are the only JSON the server decodes.
impl From<serde_json::Error> for DashboardError {
    fn from(e: serde_json::Error) -> Self {
        DashboardError::Validation(format!("invalid request body: {e}"))
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = serde_json::json!({
            "error": self.kind(),
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_422() {
        let e = DashboardError::Validation("missing inputs: quantity".into());
        assert_eq!(e.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(e.kind(), "validation");
        assert_eq!(e.to_string(), "missing inputs: quantity");
    }

    #[test]
    fn test_bind_failure_is_io() {
        let e = DashboardError::from(std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken"));
        assert_eq!(e.kind(), "io");
        assert_eq!(e.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unknown_commodity_maps_to_404() {
        let e = DashboardError::UnknownCommodity("palm".into());
        assert_eq!(e.status(), StatusCode::NOT_FOUND);
        assert!(e.to_string().contains("palm"));
    }
}
