//! Environment configuration loading
//!
//! One JSON resource, read once before any prompting. It carries the
//! option lists that vary per deployment, currently the Docker networks a
//! pre-existing reverse proxy can attach services to.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Environment-specific option lists consumed by the wizard.
#[derive(Debug, Default, Deserialize)]
pub struct WizardConfig {
    /// Networks offered when the user already runs a reverse proxy
    #[serde(default)]
    pub docker_networks: Vec<String>,
}

impl WizardConfig {
    /// Load the configuration file. Missing or malformed content is fatal:
    /// the wizard must not start prompting without it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::ConfigNotFound { path: path.display().to_string() });
        }

        let content = std::fs::read_to_string(path)?;
        let config: WizardConfig = serde_json::from_str(&content)?;

        log::debug!(
            "Loaded configuration from '{}' ({} networks)",
            path.display(),
            config.docker_networks.len()
        );
        Ok(config)
    }
}
