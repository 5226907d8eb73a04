//! CLI command implementations

pub mod delta_e;
pub mod lut;
pub mod tm30;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::io::Write;
use std::path::Path;

/// Load a JSON document from path
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read: {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse: {}", path.display()))
}

/// Write text to a file, or to stdout when no path is given
pub fn emit(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("Failed to write: {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            Ok(())
        }
    }
}

/// Converts a clap `num_args = 3` value list to a triplet
pub fn triplet(values: &[f64], what: &str) -> Result<[f64; 3]> {
    values
        .try_into()
        .map_err(|_| anyhow::anyhow!("{} needs exactly 3 values, got {}", what, values.len()))
}
