//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".table-view-state.yaml",
    ".table-view-state.yml",
    "table-view-state.yaml",
    "table-view-state.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/table-view-state/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    if let Some(path) = find_git_root().and_then(|root| find_config_in_dir(&root)) {
        return Some(path);
    }

    if let Some(path) =
        dirs::config_dir().and_then(|dir| find_config_in_dir(&dir.join("table-view-state")))
    {
        return Some(path);
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

/// Load the effective configuration.
///
/// An explicit path must load cleanly. Without one, discovery falls back to
/// defaults the same way [`load_or_default`] does.
pub fn load_effective(
    explicit_path: Option<&Path>,
) -> crate::error::Result<(AppConfig, Option<PathBuf>)> {
    match explicit_path {
        Some(path) => Ok((load_config_file(path)?, Some(path.to_path_buf()))),
        None => Ok(load_or_default(None)),
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# Table view state configuration
# Place this file at .table-view-state.yaml in your project root or ~/.config/table-view-state/

{}",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::CodecKind;
    use crate::model::SortConfig;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp.path().join(".table-view-state.yaml");
        std::fs::write(&config_path, "table:\n  default_page_size: 20\n").expect("write");

        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().expect("tempdir");
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp.path().join("config.yaml");

        let yaml = r"
table:
  default_page_size: 25
  codec: compact
  default_sort:
    - column: createdAt
      direction: desc
compiler:
  id_field: uuid
";
        std::fs::write(&config_path, yaml).expect("write");

        let config = load_config_file(&config_path).expect("load");
        assert_eq!(config.table.default_page_size, 25);
        assert_eq!(config.table.codec, CodecKind::Compact);
        assert_eq!(config.table.default_sort, vec![SortConfig::desc("createdAt")]);
        assert_eq!(config.compiler.id_field, "uuid");
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file_parse_error() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp.path().join("config.yaml");
        std::fs::write(&config_path, "table: [not, a, map]\n").expect("write");
        assert!(matches!(
            load_config_file(&config_path),
            Err(ConfigFileError::Parse(_))
        ));
    }

    #[test]
    fn test_load_or_default_falls_back_on_bad_file() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp.path().join("config.yaml");
        std::fs::write(&config_path, "table: 7\n").expect("write");

        let (config, loaded_from) = load_or_default(Some(&config_path));
        assert_eq!(config, AppConfig::default());
        assert_eq!(loaded_from, None);
    }

    #[test]
    fn test_generate_example_config_parses_back() {
        let example = generate_example_config();
        assert!(example.contains("default_page_size"));
        let parsed: AppConfig = serde_yaml::from_str(&example).expect("example is valid yaml");
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_load_effective_explicit_path_is_strict() {
        let result = load_effective(Some(Path::new("/nonexistent/config.yaml")));
        assert!(matches!(result, Err(crate::ViewStateError::Config(_))));
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp.path().join("custom-config.yaml");
        std::fs::write(&config_path, "sync:\n  debounce_ms: 50\n").expect("write");

        assert_eq!(discover_config_file(Some(&config_path)), Some(config_path));
    }
}
