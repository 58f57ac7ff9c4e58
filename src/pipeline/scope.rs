//! Scope inference: which tags and React APIs a snippet references

use fancy_regex::Regex;

use crate::{Result, SnippetError};

/// Top-level exports of the React module, in export order.
///
/// Mirrors `Object.keys(react)` for the React version Polaris builds
/// against; this set drives the library-API scan.
pub const REACT_EXPORTS: &[&str] = &[
    "Children",
    "createRef",
    "Component",
    "PureComponent",
    "createContext",
    "forwardRef",
    "lazy",
    "memo",
    "useCallback",
    "useContext",
    "useEffect",
    "useImperativeHandle",
    "useDebugValue",
    "useLayoutEffect",
    "useMemo",
    "useReducer",
    "useRef",
    "useState",
    "Fragment",
    "Profiler",
    "StrictMode",
    "Suspense",
    "createElement",
    "cloneElement",
    "createFactory",
    "isValidElement",
    "version",
];

/// Compiled scan patterns for scope inference.
///
/// Built once per pipeline run and passed into the extraction stage; the
/// exported-symbol set is explicit configuration, not process-wide state.
#[derive(Debug)]
pub struct ScopeConfig {
    component_tag: Regex,
    library_api: Regex,
}

impl ScopeConfig {
    /// Scan patterns for the React export set Polaris targets
    pub fn react() -> Result<Self> {
        Self::new(REACT_EXPORTS)
    }

    /// Build scan patterns over a specific exported-symbol set
    pub fn new(exports: &[&str]) -> Result<Self> {
        if exports.is_empty() {
            return Err(SnippetError::Other(
                "exported-symbol set must not be empty".to_string(),
            ));
        }

        let component_tag = Regex::new(r"<((?!React)[^/a-z][^\s|>.\n]+)")?;
        let library_api = Regex::new(&format!(r"(?<!React\.)({})", exports.join("|")))?;

        Ok(Self {
            component_tag,
            library_api,
        })
    }

    /// Component tags the snippet references, deduplicated in first-seen
    /// order. Closing tags, lowercase HTML elements, and tags under the
    /// `React` namespace never count.
    pub fn component_tags(&self, code: &str) -> Result<Vec<String>> {
        let mut tags = Vec::new();

        for caps in self.component_tag.captures_iter(code) {
            let caps = caps?;
            if let Some(tag) = caps.get(1) {
                let tag = tag.as_str().replacen('\n', "", 1);
                if !tags.contains(&tag) {
                    tags.push(tag);
                }
            }
        }

        Ok(tags)
    }

    /// React API names the snippet uses besides the default namespace,
    /// deduplicated in first-seen order. `React.`-qualified uses are the
    /// namespace itself and are excluded.
    pub fn library_scope(&self, code: &str) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for found in self.library_api.find_iter(code) {
            let name = found?.as_str().to_string();
            if !names.contains(&name) {
                names.push(name);
            }
        }

        Ok(names)
    }
}
