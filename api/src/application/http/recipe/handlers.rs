pub mod get_recipes;
pub mod match_recipes;
