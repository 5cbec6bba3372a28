use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tunnels_core::{Layout, SessionConfig};

use crate::cli::ConfigOverrides;

/// Reads the optional config file and applies command-line overrides on top.
pub fn resolve_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<SessionConfig> {
    let mut config = match path {
        Some(p) => {
            let raw = fs::read_to_string(p)
                .with_context(|| format!("failed to read config file: {}", p.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse config json: {}", p.display()))?
        }
        None => SessionConfig::default(),
    };

    if let Some(instance) = overrides.instance {
        config.instance = instance;
    }
    if let Some(identified) = overrides.identified {
        config.identified = identified;
    }
    if let Some(targets) = overrides.targets {
        config.targets = targets;
    }

    config.validate().context("invalid session config")?;
    Ok(config)
}

pub fn load_layout(path: &Path) -> Result<Layout> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read layout file: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse layout json: {}", path.display()))
}
