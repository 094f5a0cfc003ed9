use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

const CONFIG_FILENAME: &str = "config.json";

/// Tabs whose filter UI is hidden by default: fixed-price and single-diet
/// panes where dietary/spice filtering makes no sense.
const DEFAULT_RESERVED_TABS: [&str; 3] = ["happy-hour", "drinks", "vegan"];

/// Configuration for carta, stored in config.json next to the menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartaConfig {
    /// Tab ids that hide the filter section while active. A display-mode
    /// flag only; filter state behaves the same on every tab.
    #[serde(default = "default_reserved_tabs")]
    pub reserved_tabs: Vec<String>,
}

fn default_reserved_tabs() -> Vec<String> {
    DEFAULT_RESERVED_TABS.iter().map(|s| s.to_string()).collect()
}

impl Default for CartaConfig {
    fn default() -> Self {
        Self {
            reserved_tabs: default_reserved_tabs(),
        }
    }
}

impl CartaConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: CartaConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn is_reserved(&self, tab_id: &str) -> bool {
        self.reserved_tabs.iter().any(|t| t == tab_id)
    }
}
