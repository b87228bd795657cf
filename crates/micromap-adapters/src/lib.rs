//! Infrastructure adapters for micromap.
//!
//! This crate implements the [`FieldSource`](micromap_core::application::FieldSource)
//! port for structured documents. It owns all parsing and file I/O; the core
//! never touches either.

pub mod document;

// Re-export commonly used adapters
pub use document::{
    DocumentFormat, JsonDocument, TomlDocument, load_document, map_document, map_json,
};
