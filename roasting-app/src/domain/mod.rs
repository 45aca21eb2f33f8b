mod idea;
mod roast;
mod roast_request;

pub use idea::{Idea, IDEA_DISPLAY_LIMIT, TRUNCATION_MARKER};
pub use roast::{Roast, RoastResponse, RoastSource};
pub use roast_request::RoastRequest;
