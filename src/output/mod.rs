//! Output module for the crawl artifacts
//!
//! Two files come out of a run: the cookbook (a JSON array of recipe
//! records) and a markdown license report naming each site, its license,
//! and the recipes taken from it.

mod cookbook;
mod license;

pub use cookbook::{resolve_output_path, write_cookbook};
pub use license::{generate_license_report, license_report_path};
