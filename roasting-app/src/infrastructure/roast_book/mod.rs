mod keyword_roasts;
mod templates;

pub use keyword_roasts::KEYWORD_ROASTS;
pub use templates::{IDEA_PLACEHOLDER, ROAST_TEMPLATES};

/// Read-only set of canned roasts. Templates are never empty and every
/// keyword carries at least one roast.
#[derive(Debug, Clone, Copy)]
pub struct RoastBook {
    templates: &'static [&'static str],
    keyword_roasts: &'static [(&'static str, &'static [&'static str])],
}

impl RoastBook {
    pub const BUILTIN: RoastBook = RoastBook {
        templates: ROAST_TEMPLATES,
        keyword_roasts: KEYWORD_ROASTS,
    };

    /// Returns `None` when the tables cannot always produce a roast.
    pub fn new(
        templates: &'static [&'static str],
        keyword_roasts: &'static [(&'static str, &'static [&'static str])],
    ) -> Option<Self> {
        if templates.is_empty() || keyword_roasts.iter().any(|(_, roasts)| roasts.is_empty()) {
            return None;
        }
        Some(Self {
            templates,
            keyword_roasts,
        })
    }

    pub fn templates(&self) -> &'static [&'static str] {
        self.templates
    }

    pub fn keyword_roasts(&self) -> &'static [(&'static str, &'static [&'static str])] {
        self.keyword_roasts
    }

    /// First keyword, in table order, contained in `lowercase_idea`.
    pub fn first_match(&self, lowercase_idea: &str) -> Option<(&'static str, &'static [&'static str])> {
        self.keyword_roasts
            .iter()
            .find(|(keyword, _)| lowercase_idea.contains(*keyword))
            .copied()
    }
}

impl Default for RoastBook {
    fn default() -> Self {
        Self::BUILTIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_templates_have_one_placeholder() {
        for template in RoastBook::BUILTIN.templates() {
            assert_eq!(template.matches(IDEA_PLACEHOLDER).count(), 1, "{template}");
        }
    }

    #[test]
    fn test_builtin_keyword_roasts_are_complete() {
        for (keyword, roasts) in RoastBook::BUILTIN.keyword_roasts() {
            assert_eq!(*keyword, keyword.to_lowercase());
            assert!(!roasts.is_empty(), "{keyword}");
            assert!(roasts.iter().all(|r| !r.contains(IDEA_PLACEHOLDER)));
        }
    }

    #[test]
    fn test_keyword_order() {
        let keywords: Vec<&str> = KEYWORD_ROASTS.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keywords,
            ["blockchain", "ai", "uber", "tinder", "app", "plattform", "platform", "social"]
        );
    }

    #[test]
    fn test_first_match_follows_table_order() {
        let book = RoastBook::BUILTIN;
        // "social" and "app" both occur, "app" comes first in the table
        let (keyword, _) = book.first_match("social app für senioren").unwrap();
        assert_eq!(keyword, "app");
        assert!(book.first_match("kaffee für katzen").is_none());
    }

    #[test]
    fn test_rejects_unusable_tables() {
        assert!(RoastBook::new(&[], &[]).is_none());
        assert!(RoastBook::new(&["{idea}"], &[("ai", &[])]).is_none());
        assert!(RoastBook::new(&["{idea}"], &[]).is_some());
    }
}
