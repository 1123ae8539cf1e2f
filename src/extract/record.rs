use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One extracted recipe, serialized with its schema.org attribute names
///
/// The cookbook artifact is a JSON array of these records. `author` is kept
/// as a raw JSON value because schema.org allows both a plain string and a
/// `{name, url}` object, and the license report renders both forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeRecord {
    #[serde(rename = "@context", default = "default_context")]
    pub context: String,

    #[serde(rename = "@type", default = "default_type_tags")]
    pub type_tags: Vec<String>,

    pub name: String,

    #[serde(rename = "recipeIngredient", default)]
    pub ingredients: Vec<String>,

    #[serde(rename = "recipeInstructions", default)]
    pub instructions: Vec<String>,

    #[serde(rename = "totalTime", skip_serializing_if = "Option::is_none")]
    pub total_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(rename = "recipeYield", skip_serializing_if = "Option::is_none")]
    pub recipe_yield: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

fn default_context() -> String {
    "https://schema.org".to_string()
}

fn default_type_tags() -> Vec<String> {
    vec!["Recipe".to_string()]
}

impl RecipeRecord {
    /// A record with the given name and schema.org tags; everything else empty
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            context: default_context(),
            type_tags: default_type_tags(),
            name: name.into(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            total_time: None,
            image: None,
            recipe_yield: None,
            author: None,
            url: None,
            license: None,
        }
    }
}
