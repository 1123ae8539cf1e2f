//! Standard schema.org/Recipe extraction
//!
//! Walks every JSON-LD script block in a page and collects the nodes typed
//! as Recipe. Handles the three shapes sites publish: a single object, a
//! top-level array, and an object wrapping a `@graph` array. Field values
//! are normalized (instruction lists may arrive as plain strings, arrays of
//! strings, or arrays of HowToStep objects).

use crate::extract::{Extractor, RecipeRecord};
use scraper::{Html, Selector};
use serde_json::Value;
use url::Url;

/// Extractor for sites exposing schema.org/Recipe JSON-LD markup
pub struct StandardExtractor;

impl Extractor for StandardExtractor {
    fn extract(&self, html: &str, _final_url: &Url) -> Vec<RecipeRecord> {
        let document = Html::parse_document(html);
        let mut records = Vec::new();

        let selector = match Selector::parse(r#"script[type="application/ld+json"]"#) {
            Ok(s) => s,
            Err(_) => return records,
        };

        for script in document.select(&selector) {
            let text: String = script.text().collect();
            match serde_json::from_str::<Value>(&text) {
                Ok(value) => collect_recipes(&value, &mut records),
                Err(e) => tracing::debug!("Skipping unparseable JSON-LD block: {}", e),
            }
        }

        records
    }
}

/// Recursively collects Recipe nodes from a JSON-LD value
fn collect_recipes(value: &Value, out: &mut Vec<RecipeRecord>) {
    match value {
        Value::Array(items) => {
            for item in items {
                collect_recipes(item, out);
            }
        }
        Value::Object(map) => {
            if let Some(graph) = map.get("@graph") {
                collect_recipes(graph, out);
            }
            if is_recipe_node(value) {
                if let Some(record) = record_from_node(value) {
                    out.push(record);
                }
            }
        }
        _ => {}
    }
}

/// Tests whether a JSON-LD node is typed as a Recipe
///
/// `@type` may be a single string or an array of type names.
fn is_recipe_node(node: &Value) -> bool {
    match node.get("@type") {
        Some(Value::String(t)) => t == "Recipe",
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some("Recipe")),
        _ => false,
    }
}

/// Converts a Recipe node into a record
///
/// A node without a name is junk markup and yields nothing.
fn record_from_node(node: &Value) -> Option<RecipeRecord> {
    let name = node.get("name")?.as_str()?.trim();
    if name.is_empty() {
        return None;
    }

    let mut record = RecipeRecord::new(name);

    if let Some(context) = node.get("@context").and_then(Value::as_str) {
        record.context = context.to_string();
    }
    record.type_tags = type_tags(node);
    record.ingredients = string_list(node.get("recipeIngredient"));
    record.instructions = instruction_list(node.get("recipeInstructions"));
    record.total_time = node
        .get("totalTime")
        .and_then(Value::as_str)
        .map(String::from);
    record.image = image_url(node.get("image"));
    record.recipe_yield = yield_value(node.get("recipeYield"));
    record.author = node.get("author").cloned();
    record.url = node.get("url").and_then(Value::as_str).map(String::from);
    record.license = node
        .get("license")
        .and_then(Value::as_str)
        .map(String::from);

    Some(record)
}

fn type_tags(node: &Value) -> Vec<String> {
    match node.get("@type") {
        Some(Value::String(t)) => vec![t.clone()],
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(|t| t.as_str().map(String::from))
            .collect(),
        _ => vec!["Recipe".to_string()],
    }
}

/// Normalizes a string-or-array-of-strings value into a list
fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(s)) => vec![s.clone()],
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(String::from))
            .collect(),
        _ => Vec::new(),
    }
}

/// Normalizes recipeInstructions into a flat list of step texts
///
/// Accepts a plain string, an array of strings, an array of HowToStep
/// objects, and HowToSection objects wrapping an itemListElement array.
fn instruction_list(value: Option<&Value>) -> Vec<String> {
    let mut steps = Vec::new();
    if let Some(v) = value {
        push_instructions(v, &mut steps);
    }
    steps
}

fn push_instructions(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if !trimmed.is_empty() {
                out.push(trimmed.to_string());
            }
        }
        Value::Array(items) => {
            for item in items {
                push_instructions(item, out);
            }
        }
        Value::Object(map) => {
            if let Some(elements) = map.get("itemListElement") {
                push_instructions(elements, out);
            } else if let Some(text) = map.get("text").and_then(Value::as_str) {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    out.push(trimmed.to_string());
                }
            }
        }
        _ => {}
    }
}

/// Picks one image URL from the string, array, or ImageObject forms
fn image_url(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.first().and_then(|v| image_url(Some(v))),
        Value::Object(map) => map.get("url").and_then(Value::as_str).map(String::from),
        _ => None,
    }
}

/// Normalizes recipeYield, which sites publish as string, array, or number
fn yield_value(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.first().and_then(|v| yield_value(Some(v))),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
