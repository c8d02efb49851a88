//! Text normalization utilities
//!
//! Provides functions for:
//! - Repairing line-wrapped document text ahead of splitting
//! - Normalizing author names for graph node identity

pub mod author;
pub mod document;

pub use author::normalize_author;
pub use document::normalize_text;
