//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Show a dismissible notice when some dataset slices failed to load
    #[serde(default = "default_partial_data_notice")]
    pub partial_data_notice: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            partial_data_notice: default_partial_data_notice(),
        }
    }
}

fn default_partial_data_notice() -> bool {
    true
}
