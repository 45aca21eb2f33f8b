mod generate_roast;

pub use generate_roast::{GenerateRoast, KEYWORD_ROAST_CHANCE};
