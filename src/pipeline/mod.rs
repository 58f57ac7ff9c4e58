//! The snippet pipeline: collect, split, infer scope, synthesize, assemble

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::{ParsedExample, Result, Snippet, SnippetReport};

mod collect;
mod extract;
mod playground;
mod scope;

pub use collect::{CollectedReadmes, ReadmeCollector, ReadmeFile};
pub use extract::{ExampleBlock, ExampleSplitter, example_name};
pub use scope::{REACT_EXPORTS, ScopeConfig};

/// Trigger-alias prefix prepended to every example name
const SNIPPET_KEY_PREFIX: &str = "PE";

/// Builder for one snippet-generation run
pub struct SnippetPipeline {
    components_dir: PathBuf,
    scope: Option<ScopeConfig>,
}

impl SnippetPipeline {
    /// Create a pipeline over the given components directory
    pub fn new(components_dir: impl Into<PathBuf>) -> Self {
        Self {
            components_dir: components_dir.into(),
            scope: None,
        }
    }

    /// Override the scan configuration used for scope inference
    pub fn scope(mut self, scope: ScopeConfig) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Execute the pipeline
    pub fn run(self) -> Result<SnippetReport> {
        // 1. Collect READMEs
        let collected = ReadmeCollector::new(&self.components_dir).collect()?;

        if !collected.missing.is_empty() {
            warn!(
                "The following components are missing README files: {}",
                collected.missing.join(", ")
            );
        }

        // 2. Parse examples and assemble the snippet mapping
        let splitter = ExampleSplitter::new()?;
        let scope = match self.scope {
            Some(scope) => scope,
            None => ScopeConfig::react()?,
        };

        let mut snippets = Map::new();

        for readme in &collected.readmes {
            let examples = parse_examples(&splitter, &scope, &readme.text)?;
            debug!(
                component = %readme.component,
                examples = examples.len(),
                "parsed examples"
            );

            for example in examples {
                let snippet = Snippet {
                    prefix: vec![format!("{SNIPPET_KEY_PREFIX}{}", example.name)],
                    body: example.body,
                    description: example.description,
                };
                // Identical derived names overwrite silently; last one wins.
                snippets.insert(example.name, serde_json::to_value(&snippet)?);
            }
        }

        Ok(SnippetReport {
            total_components: collected.readmes.len(),
            missing_readmes: collected.missing,
            snippets,
        })
    }
}

/// Parse every example block in one README.
///
/// READMEs without an Examples section yield an empty list, as do sections
/// whose blocks never match the heading/description/fence shape.
fn parse_examples(
    splitter: &ExampleSplitter,
    scope: &ScopeConfig,
    readme: &str,
) -> Result<Vec<ParsedExample>> {
    let Some(section) = splitter.examples_section(readme) else {
        return Ok(Vec::new());
    };

    let mut examples = Vec::new();

    for block in splitter.example_blocks(section) {
        let components = scope.component_tags(&block.code)?;
        let library_scope = scope.library_scope(&block.code)?;

        let code = block.code.trim().to_string();
        let body = playground::synthesize(&code, &components, &library_scope);

        examples.push(ParsedExample {
            name: example_name(&block.title),
            description: block.description.trim().to_string(),
            code,
            body,
            components,
            library_scope,
        });
    }

    Ok(examples)
}

/// Serialize the snippet mapping pretty-printed (2-space indentation) and
/// write it to `path`, overwriting any prior content.
pub fn write_snippets(snippets: &Map<String, Value>, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(snippets)?;
    fs::write(path, json)?;

    Ok(())
}
