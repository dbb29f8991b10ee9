pub mod json_file_corpus;
pub mod mappers;

pub use json_file_corpus::JsonFileRecipeCorpus;
