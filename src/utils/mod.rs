use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;
use anyhow::{Result, Context};

/// Date format used on article cards
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Ensures that the directory for the given file path exists
///
/// This function extracts the directory part of a given file path
/// and creates it if it doesn't exist.
pub fn ensure_directory_exists(file_path: &str) -> Result<()> {
    if let Some(parent) = Path::new(file_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(||
                format!("Failed to create directory: {}", parent.display())
            )?;
        }
    }
    Ok(())
}
