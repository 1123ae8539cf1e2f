//! Robots.txt handling module
//!
//! This module provides the per-site fetch permission oracle. A policy is
//! fetched once when a site crawler is constructed and consulted for every
//! candidate URL before it may enter the frontier.

mod policy;

pub use policy::RobotsPolicy;
