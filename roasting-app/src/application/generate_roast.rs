use crate::domain::{Idea, Roast, RoastSource};
use crate::infrastructure::roast_book::{RoastBook, IDEA_PLACEHOLDER};
use rand::seq::SliceRandom;
use rand::Rng;

/// Probability that a matched keyword answers with its own roast.
pub const KEYWORD_ROAST_CHANCE: f64 = 0.5;

pub struct GenerateRoast {
    book: RoastBook,
}

impl GenerateRoast {
    pub fn new() -> Self {
        Self::with_book(RoastBook::BUILTIN)
    }

    pub fn with_book(book: RoastBook) -> Self {
        Self { book }
    }

    pub fn execute(&self, idea: &Idea) -> Roast {
        self.execute_with(idea, &mut rand::thread_rng())
    }

    /// Only the first matching keyword gets its coin flip. When it loses,
    /// the idea is roasted with a generic template even if a later keyword
    /// would also match.
    pub fn execute_with<R: Rng + ?Sized>(&self, idea: &Idea, rng: &mut R) -> Roast {
        if let Some((keyword, roasts)) = self.book.first_match(&idea.for_matching()) {
            if rng.gen_bool(KEYWORD_ROAST_CHANCE) {
                if let Some(roast) = roasts.choose(rng) {
                    return Roast::new((*roast).to_string(), RoastSource::Keyword(keyword));
                }
            }
        }

        let template = self.book.templates().choose(rng).copied().unwrap_or(IDEA_PLACEHOLDER);
        let text = template.replacen(IDEA_PLACEHOLDER, &idea.for_display(), 1);
        Roast::new(text, RoastSource::Template)
    }
}

impl Default for GenerateRoast {
    fn default() -> Self {
        Self::new()
    }
}
