//! Cookbook serialization and output naming
//!
//! The cookbook is one JSON array of recipe records. An explicitly
//! requested output path must not already exist; without one, a unique
//! `cookbook.json` / `cookbook-N.json` name is derived so repeated runs
//! never clobber an earlier cookbook.

use crate::extract::RecipeRecord;
use crate::{LadleError, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Serializes the collected recipes to a JSON file
///
/// # Arguments
///
/// * `records` - The recipes, already ordered by the scheduler
/// * `path` - Destination path
pub fn write_cookbook(records: &[&RecipeRecord], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer(writer, records)?;
    Ok(())
}

/// Resolves the cookbook output path
///
/// An explicitly requested path gains a `.json` suffix when missing and
/// must not already exist. With no request, the configured path is used
/// the same way when set; otherwise a unique `cookbook.json` /
/// `cookbook-N.json` name is derived.
///
/// # Arguments
///
/// * `requested` - Path from the CLI or configuration, if any
pub fn resolve_output_path(requested: Option<&str>) -> Result<PathBuf> {
    match requested {
        Some(raw) if !raw.is_empty() => {
            let mut path = raw.to_string();
            if !path.to_lowercase().ends_with(".json") {
                path.push_str(".json");
            }
            let path = PathBuf::from(path);
            if path.exists() {
                return Err(LadleError::OutputExists(path.display().to_string()));
            }
            Ok(path)
        }
        _ => Ok(unique_cookbook_path()),
    }
}

/// Derives the first unused cookbook-N.json name
fn unique_cookbook_path() -> PathBuf {
    let mut path = PathBuf::from("cookbook.json");
    let mut i = 0;
    while path.exists() {
        i += 1;
        path = PathBuf::from(format!("cookbook-{}.json", i));
    }
    path
}
