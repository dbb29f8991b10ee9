use snapchef_core::domain::{fridge_analysis::entities::FridgeAnalysis, recipe::entities::Recipe};

use crate::application::http::html::{escape_html, page};

fn render_list(tag: &str, items: &[String]) -> String {
    let items: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect();

    format!("<{tag}>{items}</{tag}>")
}

fn render_recipe(recipe: &Recipe) -> String {
    format!(
        r#"<div class="recipe">
    <div class="recipe-title">{title}</div>
    <div><strong>Ingredients:</strong>{ingredients}</div>
    <div><strong>Instructions:</strong>{instructions}</div>
</div>"#,
        title = escape_html(&recipe.title),
        ingredients = render_list("ul", &recipe.ingredients),
        instructions = render_list("ol", &recipe.instructions),
    )
}

/// Renders an analysis as the results page shown after a browser form post.
pub fn render_analysis_page(analysis: &FridgeAnalysis) -> String {
    let recipes = if analysis.matched_recipes.is_empty() {
        "<p>No stored recipe matches what is in your fridge.</p>".to_string()
    } else {
        analysis
            .matched_recipes
            .iter()
            .map(render_recipe)
            .collect::<Vec<_>>()
            .join("\n")
    };

    let body = format!(
        r#"<h1>Snap Chef</h1>
<div class="section">
    <div class="section-title">Fridge Contents:</div>
    <p>{fridge_contents}</p>
</div>
<div class="section">
    <div class="section-title">Matched Recipes:</div>
    {recipes}
</div>
<div class="section">
    <div class="section-title">AI Recipe Suggestions:</div>
    <p style="white-space: pre-line">{ai_suggestions}</p>
</div>"#,
        fridge_contents = escape_html(&analysis.fridge_contents),
        ai_suggestions = escape_html(&analysis.ai_suggestions),
    );

    page("Snap Chef", &body)
}

#[cfg(test)]
mod tests {
    use snapchef_core::domain::recipe::value_objects::MatchThreshold;

    use super::*;

    #[test]
    fn test_render_analysis_page() {
        let analysis = FridgeAnalysis::new(
            "Milk, <b>Eggs</b>".to_string(),
            vec!["milk".to_string(), "<b>eggs</b>".to_string()],
            vec![Recipe::new(
                "r1",
                "Eggs & Milk",
                vec!["eggs".to_string(), "milk".to_string()],
                vec!["Whisk".to_string(), "Cook".to_string()],
            )],
            "1. Scramble <script>".to_string(),
            MatchThreshold::default(),
        );

        let html = render_analysis_page(&analysis);

        assert!(html.contains("<p>Milk, &lt;b&gt;Eggs&lt;/b&gt;</p>"));
        assert!(html.contains(r#"<div class="recipe-title">Eggs &amp; Milk</div>"#));
        assert!(html.contains("<ul><li>eggs</li><li>milk</li></ul>"));
        assert!(html.contains("<ol><li>Whisk</li><li>Cook</li></ol>"));
        assert!(html.contains("1. Scramble &lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_without_matches() {
        let analysis = FridgeAnalysis::unrecognized(MatchThreshold::default());

        let html = render_analysis_page(&analysis);

        assert!(html.contains("No stored recipe matches"));
        assert!(html.contains("Unable to analyze image."));
    }
}
