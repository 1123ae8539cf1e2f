//! URL handling module for Ladle
//!
//! This module provides the admissibility tests applied to every anchor href
//! mined from a fetched page: absolute/relative detection, same-authority
//! comparison, and the ordered ranking rules that decide whether a candidate
//! link is rejected, queued low, or queued high.

mod classify;
mod domain;

pub use classify::{rank_url, ClassifyContext, Decision, RejectReason};
pub use domain::{is_absolute_url, same_authority};
