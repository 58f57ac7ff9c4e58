//! README collection from the component source tree

use std::fs;
use std::path::PathBuf;

use crate::{Result, SnippetError};

/// A component's README, read in full
#[derive(Debug, Clone)]
pub struct ReadmeFile {
    /// Component name (the directory name)
    pub component: String,
    /// Raw README text
    pub text: String,
}

/// Result of scanning the components directory
#[derive(Debug, Default)]
pub struct CollectedReadmes {
    /// READMEs that were read successfully, in sorted directory order
    pub readmes: Vec<ReadmeFile>,
    /// Component directories whose README could not be read
    pub missing: Vec<String>,
}

/// Reads `README.md` out of every per-component directory
pub struct ReadmeCollector {
    components_dir: PathBuf,
}

impl ReadmeCollector {
    pub fn new(components_dir: impl Into<PathBuf>) -> Self {
        Self {
            components_dir: components_dir.into(),
        }
    }

    /// Collect README texts for every component directory.
    ///
    /// Entries that are not directories are skipped. A directory whose
    /// README cannot be read lands in the missing list and the scan
    /// continues; only the directory enumeration itself can fail.
    pub fn collect(&self) -> Result<CollectedReadmes> {
        if !self.components_dir.is_dir() {
            return Err(SnippetError::ComponentsDirNotFound(
                self.components_dir.clone(),
            ));
        }

        let mut entries = fs::read_dir(&self.components_dir)?
            .collect::<std::io::Result<Vec<_>>>()?;
        // Sorted order keeps the output byte-identical across runs.
        entries.sort_by_key(|entry| entry.file_name());

        let mut collected = CollectedReadmes::default();

        for entry in entries {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            let component = entry.file_name().to_string_lossy().into_owned();

            match fs::read_to_string(path.join("README.md")) {
                Ok(text) => collected.readmes.push(ReadmeFile { component, text }),
                Err(_) => collected.missing.push(component),
            }
        }

        Ok(collected)
    }
}
