//! CLI command implementations

pub mod completions;
pub mod config;
pub mod paths;
pub mod pin;
pub mod stars;
pub mod walk;
