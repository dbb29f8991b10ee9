pub mod llm;
pub mod recipe;
