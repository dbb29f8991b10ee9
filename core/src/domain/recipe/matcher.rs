//! Ingredient matching: turns the free-text inventory returned by the vision
//! model into ingredient tokens and scores recipes by how much of each recipe's
//! ingredient list those tokens cover.
//!
//! Everything in here is pure. Inputs are only read and results are freshly
//! allocated, so the functions can be called from any number of requests at once.

use std::collections::{BTreeSet, HashSet};

use crate::domain::recipe::{
    entities::Recipe,
    value_objects::{MatchThreshold, OverlapScore},
};

/// Lower-cases and trims a single ingredient name.
pub fn normalize_token(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Splits comma-separated food text into normalized ingredient tokens.
///
/// Every piece between two commas is one token, quantities included
/// (`"2 eggs"` stays `"2 eggs"`). Order and duplicates are preserved; empty
/// and whitespace-only pieces are dropped, so `""` and `"milk,,"` never yield
/// empty tokens. Never fails.
pub fn parse_ingredients(text: &str) -> Vec<String> {
    text.split(',')
        .map(normalize_token)
        .filter(|token| !token.is_empty())
        .collect()
}

fn ingredient_set<S: AsRef<str>>(tokens: &[S]) -> HashSet<String> {
    tokens
        .iter()
        .map(|token| normalize_token(token.as_ref()))
        .filter(|token| !token.is_empty())
        .collect()
}

fn score_against_set<S: AsRef<str>>(
    fridge: &HashSet<String>,
    recipe: &[S],
    threshold: MatchThreshold,
) -> OverlapScore {
    let recipe = ingredient_set(recipe);
    if recipe.is_empty() {
        return OverlapScore::empty();
    }

    let common: BTreeSet<String> = recipe.intersection(fridge).cloned().collect();
    let ratio = common.len() as f64 / recipe.len() as f64;

    OverlapScore {
        is_match: ratio >= threshold.value(),
        ratio,
        common,
    }
}

/// Scores how much of `recipe` is covered by `fridge`.
///
/// The ratio is `|fridge ∩ recipe| / |recipe|`, both sides deduplicated and
/// normalized first. A recipe without ingredients never matches and scores 0.
pub fn score_overlap<F, R>(fridge: &[F], recipe: &[R], threshold: MatchThreshold) -> OverlapScore
where
    F: AsRef<str>,
    R: AsRef<str>,
{
    score_against_set(&ingredient_set(fridge), recipe, threshold)
}

/// Returns the recipes of `corpus` whose overlap ratio reaches `threshold`,
/// in corpus order.
pub fn filter_recipes<F: AsRef<str>>(
    fridge: &[F],
    corpus: &[Recipe],
    threshold: MatchThreshold,
) -> Vec<Recipe> {
    let fridge = ingredient_set(fridge);

    corpus
        .iter()
        .filter(|recipe| score_against_set(&fridge, &recipe.ingredients, threshold).is_match)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn threshold(value: f64) -> MatchThreshold {
        MatchThreshold::new(value).unwrap()
    }

    fn recipe(id: &str, ingredients: &[&str]) -> Recipe {
        Recipe::new(
            id,
            id.to_uppercase(),
            ingredients.iter().map(|i| i.to_string()).collect(),
            vec![],
        )
    }

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        assert_eq!(
            parse_ingredients("Milk, EGGS ,  Butter"),
            vec!["milk", "eggs", "butter"]
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_ingredients("").is_empty());
        assert!(parse_ingredients("  ,\t, ").is_empty());
    }

    #[test]
    fn test_parse_drops_stray_empty_tokens() {
        assert_eq!(parse_ingredients("milk,,eggs,"), vec!["milk", "eggs"]);
    }

    #[test]
    fn test_parse_keeps_order_duplicates_and_quantities() {
        assert_eq!(
            parse_ingredients("2 Eggs, milk, 2 eggs, Half a Lemon"),
            vec!["2 eggs", "milk", "2 eggs", "half a lemon"]
        );
    }

    #[test]
    fn test_parse_is_idempotent() {
        let inputs = [
            "Milk, EGGS ,  Butter",
            " tofu ,, Kimchi,",
            "one item only",
            "",
        ];
        for input in inputs {
            let once = parse_ingredients(input);
            assert_eq!(parse_ingredients(&once.join(",")), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_score_empty_recipe_never_divides_by_zero() {
        let score = score_overlap(&["milk"], &[] as &[&str], threshold(0.8));
        assert_eq!(score, OverlapScore::empty());

        let score = score_overlap(&["milk"], &["  ", ""], threshold(0.0));
        assert!(!score.is_match);
        assert_eq!(score.ratio, 0.0);
    }

    #[test]
    fn test_score_threshold_boundary() {
        let fridge = ["milk", "eggs", "butter", "flour"];
        let recipe = ["milk", "eggs", "sugar", "flour", "vanilla"];

        let at = score_overlap(&fridge, &recipe, threshold(0.6));
        assert!(at.is_match);
        assert!((at.ratio - 0.6).abs() < f64::EPSILON);

        let above = score_overlap(&fridge, &recipe, threshold(0.61));
        assert!(!above.is_match);
        assert_eq!(
            above.common,
            ["eggs", "flour", "milk"]
                .into_iter()
                .map(String::from)
                .collect::<BTreeSet<_>>()
        );
    }

    #[test]
    fn test_score_full_match() {
        let score = score_overlap(&["milk", "eggs"], &["milk", "eggs"], threshold(1.0));
        assert!(score.is_match);
        assert_eq!(score.ratio, 1.0);
    }

    #[test]
    fn test_score_uses_recipe_denominator() {
        // Plenty in the fridge, recipe only needs one of it.
        let score = score_overlap(
            &["milk", "eggs", "butter", "flour", "salt"],
            &["salt"],
            MatchThreshold::default(),
        );
        assert_eq!(score.ratio, 1.0);
        assert!(score.is_match);
    }

    #[test]
    fn test_score_normalizes_unnormalized_inputs() {
        let score = score_overlap(&[" MILK "], &["milk", "Milk", "eggs"], threshold(0.5));
        assert_eq!(score.ratio, 0.5);
        assert!(score.is_match);
    }

    #[test]
    fn test_filter_end_to_end() {
        let corpus = vec![
            recipe("r1", &["milk", "eggs", "flour"]),
            recipe("r2", &["beef", "salt"]),
        ];
        let fridge = parse_ingredients("Milk, Eggs, Flour, Butter");

        let matched = filter_recipes(&fridge, &corpus, MatchThreshold::default());

        assert_eq!(matched, vec![corpus[0].clone()]);
    }

    #[test]
    fn test_filter_preserves_corpus_order() {
        let corpus = vec![
            recipe("partial", &["milk", "eggs", "flour", "sugar", "salt"]),
            recipe("miss", &["beef"]),
            recipe("full", &["milk"]),
            recipe("empty", &[]),
        ];
        let fridge = ["milk", "eggs", "flour", "sugar"];

        let matched = filter_recipes(&fridge, &corpus, threshold(0.8));

        let ids: Vec<_> = matched.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["partial", "full"]);
    }

    #[test]
    fn test_filter_empty_corpus() {
        assert!(filter_recipes(&["milk"], &[], MatchThreshold::default()).is_empty());
    }

    #[test]
    fn test_threshold_rejects_out_of_range() {
        assert!(MatchThreshold::new(-0.1).is_err());
        assert!(MatchThreshold::new(1.01).is_err());
        assert!(MatchThreshold::new(f64::NAN).is_err());
        assert_eq!(MatchThreshold::default().value(), 0.8);
    }
}
