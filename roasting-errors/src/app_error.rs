use serde::{Deserialize, Serialize};

pub const MISSING_IDEA_MESSAGE: &str = "Keine Idee? Das ist schon der erste Fehler.";
pub const IDEA_TOO_LARGE_MESSAGE: &str =
    "So viel Text für eine Idee? Selbst der Server hat beim Lesen aufgegeben.";
pub const SERVER_FALLBACK_ROAST: &str =
    "Der Server hat sich geweigert, diese Idee zu verarbeiten. Selbst Maschinen haben Grenzen.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("idea is missing or not a string")]
    MissingIdea,

    #[error("request body exceeds {0} bytes")]
    IdeaTooLarge(usize),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Text shown to the user. Never contains technical detail.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingIdea => MISSING_IDEA_MESSAGE,
            Self::IdeaTooLarge(_) => IDEA_TOO_LARGE_MESSAGE,
            Self::Internal(_) => SERVER_FALLBACK_ROAST,
        }
    }
}

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    #[derive(serde::Serialize)]
    struct ErrorResponse {
        error: &'static str,
    }

    // Server failures still answer with a roast.
    #[derive(serde::Serialize)]
    struct FallbackRoastResponse {
        roast: &'static str,
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let message = self.user_message();
            match self {
                AppError::MissingIdea => {
                    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })).into_response()
                }
                AppError::IdeaTooLarge(_) => (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    Json(ErrorResponse { error: message }),
                )
                    .into_response(),
                AppError::Internal(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(FallbackRoastResponse { roast: message }),
                )
                    .into_response(),
            }
        }
    }
}
