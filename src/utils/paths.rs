use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Directory name used under the platform data directory
const APP_DIR_NAME: &str = "temp-converter";
/// Log file written while the interactive UI owns the terminal
pub const LOG_FILE_NAME: &str = "temp-converter.log";

/// Resolve the data directory, preferring an explicit override
///
/// Falls back to the platform data directory:
/// - Linux: `~/.local/share/temp-converter/`
/// - macOS: `~/Library/Application Support/temp-converter/`
/// - Windows: `%APPDATA%\temp-converter\`
pub fn resolve_data_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }
    let base = dirs::data_dir().context("Failed to get platform data directory")?;
    Ok(base.join(APP_DIR_NAME))
}

/// Create the data directory if it does not exist yet
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
    }
    Ok(())
}

/// Replace the home directory prefix with `~` for display
pub fn format_path_with_tilde(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(rest) = path.strip_prefix(&home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.display());
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_override_wins() {
        let dir = PathBuf::from("/tmp/custom-data");
        assert_eq!(resolve_data_dir(Some(&dir)).unwrap(), dir);
    }

    #[test]
    fn test_default_ends_with_app_dir() {
        // No platform data dir in some CI sandboxes
        if let Ok(dir) = resolve_data_dir(None) {
            assert!(dir.ends_with(APP_DIR_NAME));
        }
    }

    #[test]
    fn test_ensure_dir_creates_nested() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("x").join("y");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // Idempotent
        ensure_dir(&nested).unwrap();
    }

    #[test]
    fn test_format_path_outside_home() {
        let path = PathBuf::from("/definitely/not/home/data");
        assert_eq!(format_path_with_tilde(&path), "/definitely/not/home/data");
    }

    #[test]
    fn test_format_path_inside_home() {
        if let Some(home) = dirs::home_dir() {
            let path = home.join("notes").join("temps");
            let expected = format!("~/{}", Path::new("notes").join("temps").display());
            assert_eq!(format_path_with_tilde(&path), expected);
            assert_eq!(format_path_with_tilde(&home), "~");
        }
    }
}
