mod app_error;

pub use app_error::{AppError, IDEA_TOO_LARGE_MESSAGE, MISSING_IDEA_MESSAGE, SERVER_FALLBACK_ROAST};
