pub mod roast_book;
pub mod security;
