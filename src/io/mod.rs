pub mod demo;
pub mod loader;

pub use demo::{generate_demo_leads, DEFAULT_DEMO_ROWS, DEFAULT_DEMO_SEED};
pub use loader::{export_leads_csv, load_leads_csv, read_leads_csv, write_leads_csv, Column};

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Write `content`, creating missing parent directories first
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}
