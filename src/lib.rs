//! # cpilens - readable summaries of integration-platform API responses
//!
//! Turns the nested, OData-style JSON envelopes returned by an
//! integration platform's management API (data stores, variables, queues)
//! into short, stable, line-oriented text.
//!
//! ## Modules
//!
//! - **digest**: the extractor, field selector and renderer pipeline
//! - **console**: resources, environment configuration and the adapter
//!   that wires fetches to a display surface
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//!
//! let raw = json!({
//!     "status": 200,
//!     "data": {"d": {"results": [{"Name": "A", "Extra": 1}, {"Name": "B"}]}}
//! });
//!
//! assert_eq!(
//!     cpilens::summarize(&raw),
//!     "Status: 200\nCount: 2\n1. Name: A\n2. Name: B"
//! );
//! ```

use anyhow::{Context, Result};
use serde_json::Value;

pub mod console;
pub mod digest;
pub mod error;

// Re-export commonly used types for convenience
pub use console::{Console, ConsoleConfig, Resource};
pub use digest::{
    extract, format_key_values, format_readable, format_scalar, pick_important_fields,
    Extractor, FieldSelector, NormalizedView, Record, ResponseEnvelope,
};
pub use error::{AuthError, ConfigError, FetchError};

/// Run the whole pipeline on one raw envelope
pub fn summarize(raw: &Value) -> String {
    format_readable(&extract(raw))
}

/// Parse an envelope from JSON text and summarize it
pub fn summarize_str(text: &str) -> Result<String> {
    let raw: Value = serde_json::from_str(text).context("Failed to parse response JSON")?;
    Ok(summarize(&raw))
}
