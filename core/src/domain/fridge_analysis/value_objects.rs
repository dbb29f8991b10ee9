use bytes::Bytes;

pub const DEFAULT_IMAGE_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, Clone, PartialEq)]
pub struct ImageInput {
    pub data: Bytes,
    pub mime_type: String,
}

impl ImageInput {
    pub fn new(data: impl Into<Bytes>, mime_type: Option<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.unwrap_or_else(|| DEFAULT_IMAGE_MIME_TYPE.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzeFridgeInput {
    pub image: ImageInput,
    pub threshold: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct SuggestRecipesInput {
    pub fridge_contents: String,
}
