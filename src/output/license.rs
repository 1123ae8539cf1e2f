//! Markdown license report
//!
//! Some recipe licenses require attribution, so every run writes a report
//! naming each site, its license URL, and the recipes collected from it
//! with their authors where the markup carried one.

use crate::crawler::SiteSummary;
use crate::Result;
use serde_json::Value;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Derives the report path from the cookbook path
///
/// `cookbook-1.json` becomes `license-cookbook-1.md`, in the same
/// directory.
pub fn license_report_path(cookbook_path: &Path) -> PathBuf {
    let stem = cookbook_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("cookbook");
    cookbook_path.with_file_name(format!("license-{}.md", stem))
}

/// Writes the license report for a finished crawl
pub fn generate_license_report(summaries: &[SiteSummary<'_>], path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(format_license_report(summaries).as_bytes())?;
    Ok(())
}

/// Formats the license report as markdown
///
/// Sites with empty ledgers are omitted. Recipes are listed sorted by
/// name so the report is stable across runs that happen to visit pages in
/// a different order.
pub fn format_license_report(summaries: &[SiteSummary<'_>]) -> String {
    let mut md = String::new();

    for summary in summaries {
        if summary.records.is_empty() {
            continue;
        }

        md.push_str(&format!("## {}\n\n", summary.title));
        md.push_str(&format!("Website URL: <{}>\n", summary.url));
        if let Some(license) = summary.license {
            md.push_str(&format!("License: <{}>\n", license));
        }

        let mut entries: Vec<(&str, &str, Option<&Value>)> = summary
            .records
            .iter()
            .map(|r| {
                (
                    r.name.as_str(),
                    r.url.as_deref().unwrap_or(""),
                    r.author.as_ref(),
                )
            })
            .collect();
        entries.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

        md.push_str("Recipes:\n");
        for (name, url, author) in entries {
            md.push_str(&format!(" * [{}]({})", name, url));
            if let Some(author) = author {
                if let Some(line) = format_author(author) {
                    md.push_str(&format!(" by {}", line));
                }
            }
            md.push('\n');
        }
        md.push('\n');
    }

    md
}

/// Renders an author value, which schema.org allows as a plain string or
/// as a Person object with name and optional url
fn format_author(author: &Value) -> Option<String> {
    match author {
        Value::String(name) => Some(name.clone()),
        Value::Object(map) => {
            let name = map.get("name").and_then(Value::as_str)?;
            match map.get("url").and_then(Value::as_str) {
                Some(url) => Some(format!("[{}]({})", name, url)),
                None => Some(name.to_string()),
            }
        }
        _ => None,
    }
}
