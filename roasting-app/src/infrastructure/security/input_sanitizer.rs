use crate::domain::{Idea, RoastRequest};
use roasting_errors::AppError;

pub struct InputSanitizer;

impl InputSanitizer {
    /// Parses a raw request body into a trimmed idea. An unreadable body,
    /// a missing `idea` field, a non-string `idea` and an empty `idea` are
    /// all reported as [`AppError::MissingIdea`]. Whitespace-only ideas pass
    /// and are trimmed to nothing.
    pub fn validate_body(body: &[u8]) -> Result<Idea, AppError> {
        let request = RoastRequest::from_slice(body).map_err(|e| {
            tracing::warn!("Unparsable roast request body: {}", e);
            AppError::MissingIdea
        })?;
        Self::validate_request(&request)
    }

    pub fn validate_request(request: &RoastRequest) -> Result<Idea, AppError> {
        match request.idea_text() {
            Some("") => {
                tracing::warn!("Roast request with empty idea");
                Err(AppError::MissingIdea)
            }
            Some(text) => Ok(Idea::new(text.trim())),
            None => {
                tracing::warn!("Roast request without string idea: {:?}", request.idea);
                Err(AppError::MissingIdea)
            }
        }
    }
}
