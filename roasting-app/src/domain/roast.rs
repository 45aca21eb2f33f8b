use serde::{Deserialize, Serialize};

/// Where a roast came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoastSource {
    /// Pre-written roast for the matched keyword, used verbatim.
    Keyword(&'static str),
    /// Generic template with the idea substituted.
    Template,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roast {
    pub text: String,
    pub source: RoastSource,
}

impl Roast {
    pub fn new(text: String, source: RoastSource) -> Self {
        Self { text, source }
    }

    pub fn is_keyword_roast(&self) -> bool {
        matches!(self.source, RoastSource::Keyword(_))
    }
}

/// Success body of `POST /api/roast`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoastResponse {
    pub roast: String,
}

impl From<Roast> for RoastResponse {
    fn from(roast: Roast) -> Self {
        Self { roast: roast.text }
    }
}
