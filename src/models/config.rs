use serde::{Deserialize, Serialize};

/// User configuration from ScopeCast Config.yaml
///
/// Holds application settings only. Estimation parameters are deliberately
/// not persisted: every session starts from the default screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(rename = "ScopeCast_Settings")]
    pub settings: ScopeCastSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopeCastSettings {
    /// Log a metrics summary on shutdown.
    #[serde(rename = "Stat Logging", default = "default_stat_logging")]
    pub stat_logging: bool,

    /// Lower the log filter to debug level.
    #[serde(rename = "Debug Mode", default)]
    pub debug_mode: bool,
}

impl Default for ScopeCastSettings {
    fn default() -> Self {
        Self {
            stat_logging: true,
            debug_mode: false,
        }
    }
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            settings: ScopeCastSettings::default(),
        }
    }
}

fn default_stat_logging() -> bool {
    true
}
