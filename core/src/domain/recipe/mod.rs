pub mod entities;
pub mod fallback;
pub mod helpers;
pub mod image_preparation;
pub mod ports;
pub mod prompts;
pub mod schema;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;

/// Number of recipes every generation returns.
pub const RECIPE_COUNT: usize = 5;
