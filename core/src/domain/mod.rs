pub mod assistant;
pub mod common;
pub mod health;
pub mod recipe;
pub mod speech;
