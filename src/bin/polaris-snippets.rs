use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};
use polaris_snippets::{Snippets, pipeline::write_snippets};
use tracing_subscriber::{self, EnvFilter};

const POLARIS_URL: &str = "https://github.com/Shopify/polaris-react.git";
const POLARIS_CLONING_PATH: &str = "polaris";
const POLARIS_COMPONENTS_PATH: &str = "polaris/src/components";
const SNIPPET_OUTPUT_PATH: &str = "snippets/snippets.json";

/// Snippet generator for Polaris component READMEs
/// Usage: polaris-snippets
fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    clone_polaris()?;

    let report = Snippets::polaris_components(POLARIS_COMPONENTS_PATH).run()?;

    write_snippets(&report.snippets, Path::new(SNIPPET_OUTPUT_PATH))
        .with_context(|| format!("writing {SNIPPET_OUTPUT_PATH}"))?;

    tracing::info!(
        "Wrote {} snippets from {} components to {}",
        report.snippets.len(),
        report.total_components,
        SNIPPET_OUTPUT_PATH
    );

    Ok(())
}

/// Stage a fresh Polaris checkout, replacing any previous one
fn clone_polaris() -> Result<()> {
    match fs::remove_dir_all(POLARIS_CLONING_PATH) {
        Ok(()) => {}
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => return Err(err).context("removing previous Polaris checkout"),
    }

    tracing::info!("Cloning {POLARIS_URL}");

    let status = Command::new("git")
        .args(["clone", POLARIS_URL, POLARIS_CLONING_PATH])
        .status()
        .context("running git clone")?;

    if !status.success() {
        bail!("git clone exited with {status}");
    }

    Ok(())
}
