//! Settings parser for site.toml

use std::path::Path;

use super::types::SiteConfig;
use gather_core::prelude::*;

pub const CONFIG_FILENAME: &str = "site.toml";

/// Parse and validate a `site.toml` document
pub fn parse_site_config(content: &str) -> Result<SiteConfig> {
    let config = toml::from_str::<SiteConfig>(content).context("parsing site.toml")?;
    config.validate()?;
    Ok(config)
}

/// Read `site.toml` from `dir`, failing if it is missing or invalid
pub fn read_site_config(dir: &Path) -> Result<SiteConfig> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Err(Error::ConfigNotFound { path: config_path });
    }
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("reading {}", config_path.display()))?;
    parse_site_config(&content)
}

/// Load `site.toml` from `dir`, falling back to defaults on any problem
pub fn load_site_config(dir: &Path) -> SiteConfig {
    match read_site_config(dir) {
        Ok(config) => {
            debug!("Loaded site config from {:?}", dir.join(CONFIG_FILENAME));
            config
        }
        Err(Error::ConfigNotFound { path }) => {
            debug!("No config file at {:?}, using defaults", path);
            SiteConfig::default()
        }
        Err(e) => {
            warn!("Failed to load {:?}: {}", dir.join(CONFIG_FILENAME), e);
            SiteConfig::default()
        }
    }
}
