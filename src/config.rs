use crate::device::features::LINE_TTLIO12;
use crate::error::Result;
use crate::profile::{Profile, ProfileKind};
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GrabcfgConfig {
    pub device: DeviceConfig,
    pub profile: ProfileConfig,
    pub trigger: TriggerConfig,
}

/// Upper bound on the number of in-memory grabbers a simulation discovers
pub const MAX_SIMULATED_GRABBERS: usize = 16;

/// Upper bound on the trigger pulse hold, in microseconds
pub const MAX_TRIGGER_HOLD_US: u64 = 1_000_000;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DeviceConfig {
    /// Index of the grabber among the discovered handles
    #[serde(default = "default_device_index")]
    pub index: usize,

    /// Number of grabbers discovered in simulation (`GRABCFG_DEVICE_DISCOVERED`)
    #[serde(default = "default_discovered")]
    pub discovered: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProfileConfig {
    /// Built-in profile name (strobe-roi, full-hd)
    #[serde(default = "default_profile_name")]
    pub name: String,

    /// Profile TOML file; takes precedence over `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TriggerConfig {
    /// Output line pulsed by the trigger
    #[serde(default = "default_trigger_line")]
    pub line: String,

    /// Minimum time the line is held high, in microseconds
    #[serde(default = "default_trigger_hold")]
    pub hold: u64,
}

impl TriggerConfig {
    pub fn hold_duration(&self) -> Duration {
        Duration::from_micros(self.hold)
    }
}

impl GrabcfgConfig {
    /// Load configuration from a specific file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> std::result::Result<Self, ConfigError> {
        let path_str = path.as_ref().to_string_lossy();
        debug!("Loading configuration from: {}", path_str);

        let settings = Config::builder()
            .set_default("device.index", default_device_index() as i64)?
            .set_default(
                "device.discovered",
                default_discovered() as i64,
            )?
            .set_default("profile.name", default_profile_name())?
            .set_default("trigger.line", default_trigger_line())?
            .set_default("trigger.hold", default_trigger_hold() as i64)?
            // Add configuration file (optional)
            .add_source(File::with_name(&path_str).required(false))
            // Add environment variables with GRABCFG_ prefix
            .add_source(Environment::with_prefix("GRABCFG").separator("_"))
            .build()?;

        let config: GrabcfgConfig = settings.try_deserialize()?;

        info!("Configuration loaded successfully");
        debug!("Final configuration: {:#?}", config);

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.profile.file.is_none() {
            self.profile
                .name
                .parse::<ProfileKind>()
                .map_err(|e| ConfigError::Message(e.to_string()))?;
        }

        if self.device.discovered == 0
            || self.device.discovered > MAX_SIMULATED_GRABBERS
        {
            return Err(ConfigError::Message(format!(
                "Simulated grabber count must be between 1 and {}",
                MAX_SIMULATED_GRABBERS
            )));
        }

        if self.trigger.hold > MAX_TRIGGER_HOLD_US {
            return Err(ConfigError::Message(format!(
                "Trigger hold must not exceed {} us",
                MAX_TRIGGER_HOLD_US
            )));
        }

        if self.trigger.line.trim().is_empty() {
            return Err(ConfigError::Message(
                "Trigger line must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Resolve the profile this configuration selects
    pub fn resolve_profile(&self) -> Result<Profile> {
        match &self.profile.file {
            Some(file) => Profile::load_from_file(file),
            None => Ok(self.profile.name.parse::<ProfileKind>()?.profile()),
        }
    }
}

impl Default for GrabcfgConfig {
    fn default() -> Self {
        Self {
            device: DeviceConfig {
                index: default_device_index(),
                discovered: default_discovered(),
            },
            profile: ProfileConfig {
                name: default_profile_name(),
                file: None,
            },
            trigger: TriggerConfig {
                line: default_trigger_line(),
                hold: default_trigger_hold(),
            },
        }
    }
}

fn default_device_index() -> usize {
    0
}

fn default_discovered() -> usize {
    1
}

fn default_profile_name() -> String {
    ProfileKind::default().name().to_string()
}

fn default_trigger_line() -> String {
    LINE_TTLIO12.to_string()
}

fn default_trigger_hold() -> u64 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GrabcfgConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.device.index, 0);
        assert_eq!(config.profile.name, "strobe-roi");
        assert_eq!(config.trigger.line, "TTLIO12");
        assert_eq!(config.resolve_profile().unwrap().name(), "strobe-roi");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("grabcfg.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[device]
index = 1

[profile]
name = "full-hd"
"#
        )
        .unwrap();

        let config = GrabcfgConfig::load_from_file(&path).unwrap();
        assert_eq!(config.device.index, 1);
        assert_eq!(config.profile.name, "full-hd");
        // Defaults fill the missing table
        assert_eq!(config.trigger.line, "TTLIO12");
        assert_eq!(config.resolve_profile().unwrap().len(), 11);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = GrabcfgConfig::load_from_file(dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.profile.name, "strobe-roi");
        assert!(config.profile.file.is_none());
    }

    #[test]
    fn test_config_validation() {
        let mut config = GrabcfgConfig::default();

        config.profile.name = "4k".to_string();
        assert!(config.validate().is_err());

        config.profile.name = "full-hd".to_string();
        assert!(config.validate().is_ok());

        config.trigger.line = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_simulation_bounds_validation() {
        let mut config = GrabcfgConfig::default();
        assert_eq!(config.device.discovered, 1);
        assert_eq!(config.trigger.hold, 1);

        config.device.discovered = 0;
        assert!(config.validate().is_err());

        config.device.discovered = MAX_SIMULATED_GRABBERS + 1;
        assert!(config.validate().is_err());

        config.device.discovered = MAX_SIMULATED_GRABBERS;
        assert!(config.validate().is_ok());

        // The index itself is left to grabber selection
        config.device.index = usize::MAX;
        assert!(config.validate().is_ok());

        config.trigger.hold = MAX_TRIGGER_HOLD_US + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_environment_override_of_discovered_count() {
        let dir = tempfile::TempDir::new().unwrap();
        std::env::set_var("GRABCFG_DEVICE_DISCOVERED", "3");

        let config = GrabcfgConfig::load_from_file(dir.path().join("absent.toml"));
        std::env::remove_var("GRABCFG_DEVICE_DISCOVERED");

        assert_eq!(config.unwrap().device.discovered, 3);
    }

    #[test]
    fn test_profile_file_takes_precedence() {
        let mut profile_file = NamedTempFile::new().unwrap();
        profile_file
            .write_all(
                crate::profile::full_hd()
                    .to_toml_string()
                    .unwrap()
                    .as_bytes(),
            )
            .unwrap();

        let mut config = GrabcfgConfig::default();
        config.profile.name = "not-a-profile".to_string();
        config.profile.file = Some(profile_file.path().to_string_lossy().into_owned());

        assert!(config.validate().is_ok());
        assert_eq!(config.resolve_profile().unwrap().name(), "full-hd");
    }
}
