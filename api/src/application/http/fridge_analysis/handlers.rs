pub mod analyze_fridge;
pub mod suggest_recipes;
