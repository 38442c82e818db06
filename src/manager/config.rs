//! Manager configuration

use crate::error::{GestureError, GestureResult};
use serde::{Deserialize, Serialize};

/// Manager configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManagerConfig {
    /// Whether samples are processed at all
    pub enabled: bool,
    /// Also release an owner whose last state was `Cancelled`
    pub release_owner_on_cancel: bool,
    /// Maximum number of computed inputs kept per interaction
    pub max_history: Option<usize>,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            release_owner_on_cancel: false,
            max_history: None,
        }
    }
}

impl ManagerConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> GestureResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> GestureResult<()> {
        if self.max_history == Some(0) {
            return Err(GestureError::Configuration(
                "maxHistory must keep at least one input".to_string(),
            ));
        }
        Ok(())
    }
}
