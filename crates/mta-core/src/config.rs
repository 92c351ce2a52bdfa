use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Browser-like user agent; some sites serve bots a page without meta tags.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Live page fetch settings (`[fetch]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// User-Agent header sent with every page request.
    pub user_agent: String,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Follow 3xx redirects to the final page.
    pub follow_redirects: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 10,
            follow_redirects: true,
        }
    }
}

/// Global configuration loaded from `~/.config/mta/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MtaConfig {
    /// Report path used by `mta combine` when `-o` is not given.
    pub output_path: PathBuf,
    pub fetch: FetchConfig,
}

impl Default for MtaConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("output.csv"),
            fetch: FetchConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mta")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MtaConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MtaConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: MtaConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = MtaConfig::default();
        assert_eq!(cfg.output_path, PathBuf::from("output.csv"));
        assert_eq!(cfg.fetch.connect_timeout_secs, 15);
        assert_eq!(cfg.fetch.timeout_secs, 10);
        assert!(cfg.fetch.follow_redirects);
        assert_eq!(cfg.fetch.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = MtaConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: MtaConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_empty_file_uses_defaults() {
        let cfg: MtaConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, MtaConfig::default());
    }

    #[test]
    fn config_toml_partial_fetch_section() {
        let toml = r#"
            output_path = "reports/combined.csv"

            [fetch]
            timeout_secs = 30
            user_agent = "mta-audit/0.1"
        "#;
        let cfg: MtaConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.output_path, PathBuf::from("reports/combined.csv"));
        assert_eq!(cfg.fetch.timeout_secs, 30);
        assert_eq!(cfg.fetch.user_agent, "mta-audit/0.1");
        assert_eq!(cfg.fetch.connect_timeout_secs, 15);
        assert!(cfg.fetch.follow_redirects);
    }
}
