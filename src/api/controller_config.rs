use serde::{Deserialize, Serialize};

use crate::error::{PartitionError, PartitionResult};
use crate::render::{PixelRatioPolicy, validate_pixel_ratio};

/// Public controller bootstrap configuration.
///
/// Serializable so hosts can persist chart setup alongside their own state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Device pixel ratio reported by the environment when the controller is built.
    #[serde(default = "default_device_pixel_ratio")]
    pub device_pixel_ratio: f64,
    #[serde(default)]
    pub pixel_ratio_policy: PixelRatioPolicy,
}

impl ControllerConfig {
    #[must_use]
    pub fn new(device_pixel_ratio: f64) -> Self {
        Self {
            device_pixel_ratio,
            pixel_ratio_policy: PixelRatioPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_pixel_ratio_policy(mut self, policy: PixelRatioPolicy) -> Self {
        self.pixel_ratio_policy = policy;
        self
    }

    pub fn validate(self) -> PartitionResult<()> {
        validate_pixel_ratio(self.device_pixel_ratio)
    }

    pub fn to_json_pretty(self) -> PartitionResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            PartitionError::InvalidData(format!("failed to serialize controller config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> PartitionResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            PartitionError::InvalidData(format!("failed to parse controller config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::new(default_device_pixel_ratio())
    }
}

fn default_device_pixel_ratio() -> f64 {
    1.0
}
