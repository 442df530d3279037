use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::logic::animation::{DEFAULT_SPRING_FRICTION, DEFAULT_SPRING_TENSION, MAX_SPRING_TENSION};
use crate::logic::swipe::DEFAULT_THRESHOLD_RATIO;
use crate::model::DeckSettings;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_gateway_latency_ms")]
    pub gateway_latency_ms: u64,
    /// Location of the local state database (default: platform data dir)
    #[serde(default)]
    pub state_db_path: Option<PathBuf>,
    #[serde(default)]
    pub swipe: SwipeConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwipeConfig {
    #[serde(default = "default_threshold_ratio")]
    pub threshold_ratio: f32,
    #[serde(default = "default_exit_duration_ms")]
    pub exit_duration_ms: u64,
    #[serde(default = "default_spring_tension")]
    pub spring_tension: f32,
    #[serde(default = "default_spring_friction")]
    pub spring_friction: f32,
}

fn default_gateway_latency_ms() -> u64 {
    1000
}

fn default_threshold_ratio() -> f32 {
    DEFAULT_THRESHOLD_RATIO
}

fn default_exit_duration_ms() -> u64 {
    300
}

fn default_spring_tension() -> f32 {
    DEFAULT_SPRING_TENSION
}

fn default_spring_friction() -> f32 {
    DEFAULT_SPRING_FRICTION
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold_ratio: default_threshold_ratio(),
            exit_duration_ms: default_exit_duration_ms(),
            spring_tension: default_spring_tension(),
            spring_friction: default_spring_friction(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vim_mode: false,
            gateway_latency_ms: default_gateway_latency_ms(),
            state_db_path: None,
            swipe: SwipeConfig::default(),
        }
    }
}

impl Config {
    /// Resolve, read and validate the config; defaults when no file exists
    pub fn load(cli_path: Option<&str>) -> Result<(Self, Option<PathBuf>)> {
        match resolve_config_path(cli_path)? {
            Some(path) => {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file {:?}", path))?;
                let config = Self::from_yaml_str(&text)
                    .with_context(|| format!("Invalid config file {:?}", path))?;
                Ok((config, Some(path)))
            }
            None => Ok((Self::default(), None)),
        }
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        // An empty file is a valid, all-defaults config
        let config: Config = if text.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(text)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let ratio = self.swipe.threshold_ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            anyhow::bail!(
                "swipe.threshold_ratio must be in (0, 1], got {}",
                ratio
            );
        }
        let tension = self.swipe.spring_tension;
        if !(tension > 0.0 && tension <= MAX_SPRING_TENSION) {
            anyhow::bail!(
                "swipe.spring_tension must be in (0, {}], got {}",
                MAX_SPRING_TENSION,
                tension
            );
        }
        // Without damping the snap-back never settles
        if !(self.swipe.spring_friction > 0.0 && self.swipe.spring_friction.is_finite()) {
            anyhow::bail!(
                "swipe.spring_friction must be positive, got {}",
                self.swipe.spring_friction
            );
        }
        Ok(())
    }

    pub fn gateway_latency(&self) -> Duration {
        Duration::from_millis(self.gateway_latency_ms)
    }

    pub fn deck_settings(&self) -> DeckSettings {
        DeckSettings {
            threshold_ratio: self.swipe.threshold_ratio,
            exit_duration: Duration::from_millis(self.swipe.exit_duration_ms),
            spring_tension: self.swipe.spring_tension,
            spring_friction: self.swipe.spring_friction,
        }
    }
}

/// Determine the config file path with fallback logic
///
/// An explicit path must exist. Otherwise the platform config dir is tried,
/// then `./config.yaml`; `None` means run on defaults.
pub fn resolve_config_path(cli_path: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("nexttui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = Path::new("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config.to_path_buf()));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_yaml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.gateway_latency(), Duration::from_millis(1000));
        assert_eq!(config.deck_settings(), DeckSettings::default());
    }

    #[test]
    fn test_partial_swipe_section() {
        let config = Config::from_yaml_str(
            "vim_mode: true\nswipe:\n  threshold_ratio: 0.4\n",
        )
        .unwrap();
        assert!(config.vim_mode);
        assert_eq!(config.swipe.threshold_ratio, 0.4);
        assert_eq!(config.swipe.exit_duration_ms, 300);
        assert_eq!(config.deck_settings().threshold_ratio, 0.4);
    }

    #[test]
    fn test_rejects_out_of_range_ratio() {
        assert!(Config::from_yaml_str("swipe:\n  threshold_ratio: 0\n").is_err());
        assert!(Config::from_yaml_str("swipe:\n  threshold_ratio: 1.5\n").is_err());
        assert!(Config::from_yaml_str("swipe:\n  threshold_ratio: 1.0\n").is_ok());
    }

    #[test]
    fn test_rejects_bad_spring() {
        assert!(Config::from_yaml_str("swipe:\n  spring_tension: 0\n").is_err());
        assert!(Config::from_yaml_str("swipe:\n  spring_friction: -1\n").is_err());
    }

    #[test]
    fn test_rejects_undamped_or_overstiff_spring() {
        let err = Config::from_yaml_str("swipe:\n  spring_friction: 0\n").unwrap_err();
        assert!(err.to_string().contains("spring_friction"));
        assert!(Config::from_yaml_str("swipe:\n  spring_tension: 5000000\n").is_err());
        assert!(Config::from_yaml_str("swipe:\n  spring_tension: 10000\n  spring_friction: 0.5\n").is_ok());
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(Config::from_yaml_str("api_key: abc\n").is_err());
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let err = resolve_config_path(Some("/definitely/not/here.yaml")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_from_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "gateway_latency_ms: 5").unwrap();

        let path = file.path().to_str().unwrap();
        let (config, used) = Config::load(Some(path)).unwrap();
        assert_eq!(config.gateway_latency_ms, 5);
        assert_eq!(used.as_deref(), Some(file.path()));
    }
}
