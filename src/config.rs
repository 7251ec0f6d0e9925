use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub famtree: FamtreeConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub graph: GraphConfig,
}

/// General settings
#[derive(Debug, Clone, Deserialize)]
pub struct FamtreeConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for FamtreeConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Exported data files. Format is picked by extension (json, yaml, yml).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    /// People export, each person optionally carrying `acf.relationships`.
    pub people_path: Option<PathBuf>,
    /// Flat relationship list (records carry `person`).
    pub relationships_path: Option<PathBuf>,
    /// Relationship-type reference table (id, slug, name).
    pub relationship_types_path: Option<PathBuf>,
}

/// Graph construction settings
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    /// Hop limit from the start person; unset means unbounded.
    #[serde(default)]
    pub max_depth: Option<usize>,
    #[serde(default = "default_decode_names")]
    pub decode_names: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            decode_names: default_decode_names(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_decode_names() -> bool {
    true
}

const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

impl Config {
    /// Load configuration from file
    ///
    /// Loads environment variables from .env file (if present) before loading config.
    /// Looks for config file in this order:
    /// 1. Path specified in FAMTREE_CONFIG environment variable
    /// 2. ./config.toml in current directory
    ///
    /// A missing ./config.toml yields the defaults; a missing file named by
    /// FAMTREE_CONFIG is an error.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Like [`Config::load`], but an explicit path takes precedence over the environment.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        // Load .env file if it exists (ignore errors - file is optional)
        let _ = dotenv::dotenv();

        let (config_path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match std::env::var("FAMTREE_CONFIG") {
                Ok(p) => (PathBuf::from(p), true),
                Err(_) => (PathBuf::from("config.toml"), false),
            },
        };

        if !explicit && !config_path.exists() {
            log::debug!("No {} found, using default configuration", config_path.display());
            return Ok(Self::default());
        }

        let config_str = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        Self::from_toml_str(&config_str)
            .with_context(|| format!("Invalid config file: {}", config_path.display()))
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(config_str).context("Failed to parse config.toml")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// Call again after applying command-line overrides.
    pub fn validate(&self) -> Result<()> {
        validate_log_filter(&self.famtree.log_level)?;

        if self.graph.max_depth == Some(0) {
            anyhow::bail!("graph.max_depth must be greater than 0 (omit it for no limit)");
        }

        Ok(())
    }
}

/// Check an env_logger filter: comma-separated `level`, `target` or
/// `target=level` directives, optionally followed by `/regex`.
fn validate_log_filter(filter: &str) -> Result<()> {
    let directives = filter.split('/').next().unwrap_or("");
    if directives.trim().is_empty() {
        anyhow::bail!("famtree.log_level must not be empty");
    }

    for directive in directives.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        if let Some((target, level)) = directive.split_once('=') {
            let level = level.trim().to_ascii_lowercase();
            if target.trim().is_empty() || !LOG_LEVELS.contains(&level.as_str()) {
                anyhow::bail!(
                    "famtree.log_level directive '{}' must be target=LEVEL with LEVEL one of {}",
                    directive,
                    LOG_LEVELS.join(", ")
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Serialize config tests that mutate process-wide cwd and env so they don't race.
    static CONFIG_TEST_LOCK: Mutex<()> = Mutex::new(());

    const TEST_CONFIG: &str = r#"
[famtree]
log_level = "debug"

[data]
people_path = "people.json"
relationship_types_path = "types.yaml"

[graph]
max_depth = 4
decode_names = false
"#;

    /// Restores cwd when dropped (e.g. on panic).
    struct CwdGuard(std::path::PathBuf);
    impl Drop for CwdGuard {
        fn drop(&mut self) {
            let _ = std::env::set_current_dir(&self.0);
        }
    }

    fn without_config_env(f: impl FnOnce()) {
        let original = std::env::var("FAMTREE_CONFIG").ok();
        std::env::remove_var("FAMTREE_CONFIG");
        f();
        if let Some(v) = original {
            std::env::set_var("FAMTREE_CONFIG", v);
        }
    }

    #[test]
    fn test_config_load_explicit_path() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("famtree.toml");
        fs::write(&config_path, TEST_CONFIG).unwrap();

        let config = Config::load_from(Some(&config_path));
        assert!(config.is_ok(), "Config::load_from() failed: {:?}", config.err());
        let config = config.unwrap();
        assert_eq!(config.famtree.log_level, "debug");
        assert_eq!(config.data.people_path, Some(PathBuf::from("people.json")));
        assert!(config.data.relationships_path.is_none());
        assert_eq!(config.graph.max_depth, Some(4));
        assert!(!config.graph.decode_names);
    }

    #[test]
    fn test_config_load_from_env_var() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("famtree.toml");
        fs::write(&config_path, TEST_CONFIG).unwrap();

        let original = std::env::var("FAMTREE_CONFIG").ok();
        std::env::set_var("FAMTREE_CONFIG", config_path.to_str().unwrap());
        let config = Config::load();
        std::env::remove_var("FAMTREE_CONFIG");
        if let Some(v) = original {
            std::env::set_var("FAMTREE_CONFIG", v);
        }
        assert_eq!(config.unwrap().graph.max_depth, Some(4));
    }

    #[test]
    fn test_config_defaults_without_file() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let original_dir = std::env::current_dir().unwrap();
        let _cwd = CwdGuard(original_dir);
        std::env::set_current_dir(temp_dir.path()).unwrap();
        without_config_env(|| {
            let config = Config::load().unwrap();
            assert_eq!(config.famtree.log_level, "info");
            assert!(config.graph.decode_names);
            assert!(config.graph.max_depth.is_none());
            assert!(config.data.people_path.is_none());
        });
    }

    #[test]
    fn test_config_invalid_path() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        let config = Config::load_from(Some(Path::new("nonexistent.toml")));
        assert!(config.is_err());
        assert!(config.unwrap_err().to_string().contains("nonexistent.toml"));
    }

    #[test]
    fn test_config_partial_sections() {
        let config = Config::from_toml_str("[graph]\nmax_depth = 2\n").unwrap();
        assert_eq!(config.famtree.log_level, "info");
        assert!(config.graph.decode_names);
        assert_eq!(config.graph.max_depth, Some(2));
    }

    #[test]
    fn test_config_rejects_zero_depth() {
        let err = Config::from_toml_str("[graph]\nmax_depth = 0\n").unwrap_err();
        assert!(err.to_string().contains("max_depth"));
    }

    #[test]
    fn test_config_rejects_unknown_log_level() {
        let err = Config::from_toml_str("[famtree]\nlog_level = \"famtree=loud\"\n").unwrap_err();
        assert!(err.to_string().contains("log_level"));

        let err = Config::from_toml_str("[famtree]\nlog_level = \"\"\n").unwrap_err();
        assert!(err.to_string().contains("log_level"));
    }

    #[test]
    fn test_config_accepts_filter_directives() {
        for filter in ["famtree=debug,warn", "WARN", "famtree::graph=trace", "info,famtree=debug/person"] {
            let toml = format!("[famtree]\nlog_level = \"{}\"\n", filter);
            let config = Config::from_toml_str(&toml);
            assert!(config.is_ok(), "{} rejected: {:?}", filter, config.err());
        }
    }

    #[test]
    fn test_validate_after_override() {
        let mut config = Config::from_toml_str("[graph]\nmax_depth = 3\n").unwrap();
        config.graph.max_depth = Some(0);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_depth"));
    }
}
