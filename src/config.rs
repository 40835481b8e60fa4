use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    /// Prompt provider to use instead of the highest-priority one
    #[serde(default)]
    pub(crate) provider: Option<String>,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_internal(false)
    }

    pub(crate) fn load_quiet() -> Self {
        Self::load_internal(true)
    }

    fn load_internal(quiet: bool) -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if let Some(config) = Self::load_from(&path, quiet) {
                return config;
            }
        }

        Self::default()
    }

    fn load_from(path: &Path, quiet: bool) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        let content = fs::read_to_string(path).ok()?;
        match toml::from_str::<Config>(&content) {
            Ok(config) => {
                if !quiet {
                    eprintln!("Loaded config from {}", path.display());
                }
                Some(config)
            }
            Err(e) => {
                if !quiet {
                    eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                }
                None
            }
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/isac-shell/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(
                home.join(".config")
                    .join("isac-shell")
                    .join("config.toml"),
            );
        }

        // 2. Platform config dir (macOS Application Support etc.)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("isac-shell").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.isac-shell.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".isac-shell.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paths() {
        let paths = Config::get_config_paths();
        assert!(!paths.is_empty());
        for p in &paths {
            assert!(p.to_string_lossy().contains("isac-shell"));
        }
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
provider = "default"
color = "never"
debug = true
"#,
        )
        .unwrap();
        assert_eq!(config.provider.as_deref(), Some("default"));
        assert_eq!(config.color, Some(ConfigColorMode::Never));
        assert!(config.debug);
        assert!(!config.no_color);
    }

    #[test]
    fn test_load_from_missing_and_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(Config::load_from(&missing, true).is_none());

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "color = 42").unwrap();
        assert!(Config::load_from(&bad, true).is_none());

        let good = dir.path().join("good.toml");
        fs::write(&good, "provider = \"isac\"").unwrap();
        let config = Config::load_from(&good, true).unwrap();
        assert_eq!(config.provider.as_deref(), Some("isac"));
    }
}
