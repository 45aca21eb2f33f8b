use crate::application::GenerateRoast;
use std::sync::Arc;

pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024;

#[derive(Clone)]
pub struct AppContext {
    pub generate_roast: Arc<GenerateRoast>,
    pub max_body_bytes: usize,
}

impl AppContext {
    pub fn new(max_body_bytes: usize) -> Self {
        Self {
            generate_roast: Arc::new(GenerateRoast::new()),
            max_body_bytes,
        }
    }

    pub fn from_env() -> Self {
        let max_body_bytes = match std::env::var("ROAST_MAX_BODY_BYTES") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(
                    "Invalid ROAST_MAX_BODY_BYTES '{}', using {}",
                    raw,
                    DEFAULT_MAX_BODY_BYTES
                );
                DEFAULT_MAX_BODY_BYTES
            }),
            Err(_) => DEFAULT_MAX_BODY_BYTES,
        };
        tracing::info!("Accepting roast requests up to {} bytes", max_body_bytes);
        Self::new(max_body_bytes)
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BODY_BYTES)
    }
}
