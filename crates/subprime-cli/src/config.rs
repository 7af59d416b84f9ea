use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use subprime_types::Locale;

pub const CONFIG_ENV: &str = "SUBPRIME_CONFIG";

/// User preferences read from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,

    /// Page opened first; a label or slug
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_page: Option<String>,

    /// External content document replacing the embedded one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<PathBuf>,
}

impl Config {
    /// Load the config file chosen by [`resolve_config_path`]
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let env_path = std::env::var(CONFIG_ENV).ok();
        match resolve_config_path(explicit, env_path.as_deref(), dirs::config_dir()) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Read a config file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config: Config = toml::from_str(&raw)
            .with_context(|| format!("invalid config {}", path.display()))?;

        if let Some(content) = &config.content {
            config.content = Some(expand_tilde(&content.to_string_lossy()));
        }

        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}

/// Config path by priority:
/// 1. Explicit path (with tilde expansion)
/// 2. SUBPRIME_CONFIG environment variable (with tilde expansion)
/// 3. `<config dir>/subprime/config.toml`
pub fn resolve_config_path(
    explicit: Option<&Path>,
    env_value: Option<&str>,
    config_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(expand_tilde(&path.to_string_lossy()));
    }

    if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
        return Some(expand_tilde(value));
    }

    config_dir.map(|dir| dir.join("subprime").join("config.toml"))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_reads_all_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "locale = \"pt\"\nstart_page = \"timeline\"\ncontent = \"/srv/subprime/pt.toml\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.locale, Some(Locale::Pt));
        assert_eq!(config.start_page.as_deref(), Some("timeline"));
        assert_eq!(config.content, Some(PathBuf::from("/srv/subprime/pt.toml")));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "theme = \"dark\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().starts_with("invalid config"));
    }

    #[test]
    fn test_path_priority() {
        let explicit = PathBuf::from("/etc/subprime.toml");
        let dir = Some(PathBuf::from("/home/u/.config"));

        assert_eq!(
            resolve_config_path(Some(&explicit), Some("/tmp/env.toml"), dir.clone()),
            Some(explicit.clone())
        );
        assert_eq!(
            resolve_config_path(None, Some("/tmp/env.toml"), dir.clone()),
            Some(PathBuf::from("/tmp/env.toml"))
        );
        assert_eq!(
            resolve_config_path(None, Some(""), dir.clone()),
            Some(PathBuf::from("/home/u/.config/subprime/config.toml"))
        );
        assert_eq!(resolve_config_path(None, None, None), None);
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(expand_tilde("relative"), PathBuf::from("relative"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/doc.toml"), home.join("doc.toml"));
        }
    }
}
