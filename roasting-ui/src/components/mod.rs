mod idea_input;
mod roast_display;

pub use idea_input::{IdeaInput, IDEA_PLACEHOLDER_TEXT, LOADING_LABEL, SUBMIT_LABEL};
pub use roast_display::{RoastDisplay, NETWORK_FALLBACK_ROAST};
