//! # polaris-snippets - README Example Snippet Generator
//!
//! Scrapes Polaris component README files, extracts the embedded code
//! examples, and assembles an editor-snippet JSON file mapping example names
//! to ready-to-paste playground modules with inferred imports.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use polaris_snippets::Snippets;
//!
//! fn main() -> anyhow::Result<()> {
//!     let report = Snippets::polaris_components("polaris/src/components")
//!         .run()?;
//!
//!     println!("Generated {} snippets from {} components",
//!              report.snippets.len(), report.total_components);
//!
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use serde::Serialize;

pub mod error;
pub mod pipeline;

pub use error::{Result, SnippetError};
pub use pipeline::{ScopeConfig, SnippetPipeline};

/// Main entry point for snippet generation
pub struct Snippets;

impl Snippets {
    /// Build snippets from a Polaris component source tree
    pub fn polaris_components(path: impl Into<PathBuf>) -> SnippetPipeline {
        SnippetPipeline::new(path)
    }
}

/// Result of running the snippet pipeline
#[derive(Debug, Clone)]
pub struct SnippetReport {
    /// Number of component directories that had a readable README
    pub total_components: usize,
    /// Component directories with no readable README file
    pub missing_readmes: Vec<String>,
    /// Final snippet mapping, keyed by example name in insertion order
    pub snippets: serde_json::Map<String, serde_json::Value>,
}

/// One example parsed out of a README's Examples section
#[derive(Debug, Clone)]
pub struct ParsedExample {
    /// Name derived from the example heading (capitalized, space-free)
    pub name: String,
    /// Free-text description between the heading and the code fence
    pub description: String,
    /// Raw snippet code, trimmed
    pub code: String,
    /// Synthesized playground module (imports + exported component)
    pub body: String,
    /// Component tags referenced by the snippet
    pub components: Vec<String>,
    /// React API names the snippet uses besides the default namespace
    pub library_scope: Vec<String>,
}

/// The serialized snippet record consumed by the editor
#[derive(Debug, Clone, Serialize)]
pub struct Snippet {
    /// Trigger aliases that expand into this snippet
    pub prefix: Vec<String>,
    /// Playground module text, spliced into the editor on expansion
    pub body: String,
    /// Human-readable description shown alongside the trigger
    pub description: String,
}
