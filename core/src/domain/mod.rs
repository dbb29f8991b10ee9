pub mod common;
pub mod fridge_analysis;
pub mod health;
pub mod recipe;
