use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;

/// Service configuration. The composer needs no settings of its own, so
/// this is the shared core config under a service-specific wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct MapPromptConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
}

impl MapPromptConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(MapPromptConfig { common })
    }
}
