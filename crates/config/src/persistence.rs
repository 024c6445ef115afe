//! Locating, reading, and writing the checklist config file.
//!
//! Files are parsed as JSON5, which also accepts plain JSON, and are always
//! written back as pretty-printed JSON.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, Result};

/// File names looked up in the working directory, highest priority first.
const LOCAL_FILE_NAMES: [&str; 2] = ["checklist.json5", "checklist.json"];

/// Directory under the platform config root holding the user config.
const USER_CONFIG_DIR: &str = "checklist";

/// File names looked up in the user config directory.
const USER_FILE_NAMES: [&str; 2] = ["config.json5", "config.json"];

/// Returns the first config file that exists, looking in the working
/// directory and then in the platform config directory (`dirs::config_dir`).
///
/// # Examples
///
/// ```no_run
/// use checklist_config::persistence::find_config_file;
///
/// match find_config_file() {
///     Some(path) => println!("using {}", path.display()),
///     None => println!("using built-in defaults"),
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    find_config_file_in(Path::new("."), dirs::config_dir().as_deref())
}

/// Returns the first existing file among [`candidate_paths`].
#[must_use]
pub fn find_config_file_in(local_dir: &Path, user_config_root: Option<&Path>) -> Option<PathBuf> {
    candidate_paths(local_dir, user_config_root)
        .into_iter()
        .find(|path| path.exists())
}

/// Lists every path a config file may live at, in lookup order.
///
/// `local_dir` contributes `checklist.json5` and `checklist.json`;
/// `user_config_root`, when known, contributes `checklist/config.json5` and
/// `checklist/config.json` beneath it.
#[must_use]
pub fn candidate_paths(local_dir: &Path, user_config_root: Option<&Path>) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = LOCAL_FILE_NAMES
        .iter()
        .map(|name| local_dir.join(name))
        .collect();
    if let Some(dir) = user_config_root.map(|root| root.join(USER_CONFIG_DIR)) {
        paths.extend(USER_FILE_NAMES.iter().map(|name| dir.join(name)));
    }
    paths
}

/// Reads a JSON5 (or JSON) document from `path`.
///
/// # Errors
///
/// Returns [`ConfigError::ReadFile`] if the file cannot be read and
/// [`ConfigError::ParseJson5`] if its content does not deserialize into `T`.
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json5::from_str(&content)?)
}

/// Writes `value` to `path` as pretty-printed JSON.
///
/// Missing parent directories are created. The document is written to a
/// sibling temporary file first and renamed into place, so a failed save
/// never leaves a truncated config behind.
///
/// # Errors
///
/// Returns [`ConfigError::SerializeJson`] if `value` cannot be serialized and
/// [`ConfigError::WriteFile`] if any filesystem step fails.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let staging = path.with_extension("tmp");
    fs::write(&staging, content).map_err(write_err)?;
    fs::rename(&staging, path).map_err(write_err)?;

    debug!(path = %path.display(), "config written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, UiConfig};
    use tempfile::TempDir;

    #[test]
    fn candidates_list_local_before_user() {
        let paths = candidate_paths(Path::new("work"), Some(Path::new("home")));
        assert_eq!(
            paths,
            [
                PathBuf::from("work/checklist.json5"),
                PathBuf::from("work/checklist.json"),
                PathBuf::from("home/checklist/config.json5"),
                PathBuf::from("home/checklist/config.json"),
            ]
        );
    }

    #[test]
    fn candidates_without_user_root_are_local_only() {
        assert_eq!(candidate_paths(Path::new("."), None).len(), 2);
    }

    #[test]
    fn find_prefers_json5_over_json() {
        let local = TempDir::new().unwrap();
        fs::write(local.path().join("checklist.json"), "{}").unwrap();
        fs::write(local.path().join("checklist.json5"), "{}").unwrap();

        let found = find_config_file_in(local.path(), None).unwrap();
        assert!(found.ends_with("checklist.json5"));
    }

    #[test]
    fn find_falls_back_to_user_dir() {
        let local = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        let user_dir = user.path().join(USER_CONFIG_DIR);
        fs::create_dir_all(&user_dir).unwrap();
        fs::write(user_dir.join("config.json"), "{}").unwrap();

        let found = find_config_file_in(local.path(), Some(user.path())).unwrap();
        assert_eq!(found, user_dir.join("config.json"));
    }

    #[test]
    fn find_returns_none_without_files() {
        let local = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        assert!(find_config_file_in(local.path(), Some(user.path())).is_none());
    }

    #[test]
    fn partial_json5_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("checklist.json5");
        fs::write(&path, "{ ui: { title: 'Chores', }, /* rest default */ }").unwrap();

        let config: Config = read_config_file(&path).unwrap();
        assert_eq!(config.ui.title, "Chores");
        assert_eq!(config.ui.empty_message, UiConfig::default().empty_message);
        assert_eq!(config.input, Default::default());
    }

    #[test]
    fn unknown_shape_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("checklist.json");
        fs::write(&path, r#"{ "input": { "double_click_ms": "fast" } }"#).unwrap();

        let err = read_config_file::<Config>(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseJson5(_)));
    }

    #[test]
    fn write_leaves_no_staging_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deep").join("config.json");

        write_config_file(&path, &Config::default()).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.ends_with("}\n"));
    }

    #[test]
    fn write_into_file_path_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let err = write_config_file(blocker.join("config.json"), &Config::default()).unwrap_err();
        assert!(matches!(err, ConfigError::WriteFile { .. }));
    }
}
