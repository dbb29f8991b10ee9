use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::recipe::entities::{Recipe, UNTITLED_RECIPE};

/// A recipe as stored in the corpus file.
///
/// Older dumps spell the ingredient list `ingridients` and keep the title
/// under `basic_info`; both spellings and a top-level `title` are accepted.
#[derive(Debug, Deserialize)]
pub struct RecipeDocument {
    /// String or integer; anything else falls back to the positional id.
    pub id: Option<Value>,
    pub title: Option<String>,
    pub basic_info: Option<Map<String, Value>>,
    pub ingridients: Option<Vec<String>>,
    pub ingredients: Option<Vec<String>>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn document_id(id: Value) -> Option<String> {
    match id {
        Value::String(id) if !id.trim().is_empty() => Some(id),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

impl From<(usize, RecipeDocument)> for Recipe {
    fn from((index, document): (usize, RecipeDocument)) -> Self {
        let mut metadata = document.extra;
        let mut basic_info = document.basic_info.unwrap_or_default();

        let nested_title = match basic_info.remove("title") {
            Some(Value::String(title)) => Some(title),
            _ => None,
        };
        let title = document
            .title
            .filter(|title| !title.trim().is_empty())
            .or(nested_title.filter(|title| !title.trim().is_empty()))
            .unwrap_or_else(|| UNTITLED_RECIPE.to_string());

        if !basic_info.is_empty() {
            metadata.insert("basic_info".to_string(), Value::Object(basic_info));
        }

        let ingredients = document
            .ingredients
            .or(document.ingridients)
            .unwrap_or_default();

        Recipe {
            id: document
                .id
                .and_then(document_id)
                .unwrap_or_else(|| format!("recipe-{}", index)),
            title,
            ingredients,
            instructions: document.instructions,
            metadata,
        }
    }
}

pub fn recipes_from_documents(documents: Vec<RecipeDocument>) -> Vec<Recipe> {
    documents.into_iter().enumerate().map(Recipe::from).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn document(value: Value) -> RecipeDocument {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_legacy_shape() {
        let recipe = Recipe::from((
            3,
            document(json!({
                "basic_info": { "title": "Pancakes", "servings": 4 },
                "ingridients": ["milk", "eggs", "flour"],
                "instructions": ["Mix", "Fry"],
                "cuisine": "american"
            })),
        ));

        assert_eq!(recipe.id, "recipe-3");
        assert_eq!(recipe.title, "Pancakes");
        assert_eq!(recipe.ingredients, vec!["milk", "eggs", "flour"]);
        assert_eq!(recipe.instructions, vec!["Mix", "Fry"]);
        assert_eq!(recipe.metadata["cuisine"], json!("american"));
        assert_eq!(recipe.metadata["basic_info"], json!({ "servings": 4 }));
    }

    #[test]
    fn test_canonical_shape() {
        let recipe = Recipe::from((
            0,
            document(json!({
                "id": "omelette",
                "title": "Omelette",
                "ingredients": ["eggs"]
            })),
        ));

        assert_eq!(recipe.id, "omelette");
        assert_eq!(recipe.title, "Omelette");
        assert_eq!(recipe.ingredients, vec!["eggs"]);
        assert!(recipe.instructions.is_empty());
        assert!(recipe.metadata.is_empty());
    }

    #[test]
    fn test_missing_title_and_ingredients() {
        let recipes = recipes_from_documents(vec![
            document(json!({ "basic_info": { "title": "  " } })),
            document(json!({})),
        ]);

        assert_eq!(recipes[0].title, UNTITLED_RECIPE);
        assert_eq!(recipes[1].id, "recipe-1");
        assert!(recipes[1].ingredients.is_empty());
    }

    #[test]
    fn test_integer_ids_are_accepted() {
        let documents: Vec<RecipeDocument> = serde_json::from_str(
            r#"[
                {"id": 1, "basic_info": {"title": "Pancakes"}, "ingridients": ["milk"]},
                {"id": "toast", "ingredients": ["bread"]},
                {"id": null, "ingredients": ["rice"]}
            ]"#,
        )
        .unwrap();

        let ids: Vec<_> = recipes_from_documents(documents)
            .into_iter()
            .map(|recipe| recipe.id)
            .collect();

        assert_eq!(ids, vec!["1", "toast", "recipe-2"]);
    }

    #[test]
    fn test_blank_top_level_title_falls_back_to_basic_info() {
        let recipe = Recipe::from((
            0,
            document(json!({ "title": "", "basic_info": { "title": "Pancakes" } })),
        ));

        assert_eq!(recipe.title, "Pancakes");
        assert!(recipe.metadata.is_empty());
    }

    #[test]
    fn test_canonical_spelling_wins_over_legacy() {
        let recipe = Recipe::from((
            0,
            document(json!({
                "ingredients": ["eggs", "butter"],
                "ingridients": ["flour"]
            })),
        ));

        assert_eq!(recipe.ingredients, vec!["eggs", "butter"]);
    }
}
