use std::borrow::Cow;

/// Maximum number of characters of the idea shown inside a template.
pub const IDEA_DISPLAY_LIMIT: usize = 50;
pub const TRUNCATION_MARKER: &str = "...";

/// A submitted startup idea, already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Idea(String);

impl Idea {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased copy used for keyword matching only.
    pub fn for_matching(&self) -> String {
        self.0.to_lowercase()
    }

    /// Original casing, cut to [`IDEA_DISPLAY_LIMIT`] characters with a
    /// trailing [`TRUNCATION_MARKER`] when it was longer.
    pub fn for_display(&self) -> Cow<'_, str> {
        match self.0.char_indices().nth(IDEA_DISPLAY_LIMIT) {
            Some((cut, _)) => Cow::Owned(format!("{}{}", &self.0[..cut], TRUNCATION_MARKER)),
            None => Cow::Borrowed(&self.0),
        }
    }
}

impl From<&str> for Idea {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
