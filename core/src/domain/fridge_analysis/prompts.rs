pub const FRIDGE_INVENTORY_PROMPT: &str = "You are a helpful assistant. Please identify all visible food items \
and their approximate quantities in this refrigerator image. Only describe what you can clearly see. \
Answer with a single comma-separated list such as \"2 eggs, milk, half a lemon\" and nothing else.";

/// Phrase the model uses when it declines to describe an image.
pub const REFUSAL_MARKER: &str = "programmed to avoid";

pub const UNRECOGNIZED_FRIDGE_CONTENTS: &str =
    "Unable to analyze image. Please ensure the image shows food items clearly.";

pub const UNRECOGNIZED_SUGGESTIONS: &str =
    "Please try again with a clear image of food items in your refrigerator.";

pub fn is_refusal(model_text: &str) -> bool {
    model_text.contains(REFUSAL_MARKER)
}

pub fn recipe_suggestion_prompt(foods_txt: &str) -> String {
    format!(
        "Based on the following list of foods and their quantities: {foods_txt}, \
         please suggest recipes that use these ingredients. For each recipe, provide \
         a list of ingredients with the required amounts, step-by-step cooking instructions, \
         and indicate if any additional common ingredients are needed."
    )
}
