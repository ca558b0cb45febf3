//! repo-lens - quick-open for repository files
//!
//! Ranks repository file paths against a typed query with a greedy fuzzy
//! matcher, and carries the small pieces a repository explorer needs around
//! it:
//! - candidate paths from GitHub tree listings or a local checkout
//! - highlighting of matched characters
//! - visited-file switching and repository URL history
//! - import following and declaration lookup

pub mod config;
pub mod context;
pub mod definition;
pub mod error;
pub mod highlight;
pub mod history;
pub mod imports;
pub mod matcher;
pub mod navigator;
pub mod picker;
pub mod repo;
pub mod search;
pub mod tree;
pub mod walk;

pub use config::Config;
pub use error::{Error, Result};
pub use highlight::{highlight, HighlightedPath};
pub use matcher::{fuzzy_match, FuzzyMatch, FuzzyMatcher};
pub use search::{search, PathMatch, DEFAULT_MAX_RESULTS};
