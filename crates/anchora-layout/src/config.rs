//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Tunables of the layout engine.
///
/// The rounding nudges default to the values existing layouts were tuned
/// against; setting them to zero gives symmetric rounding.
///
/// # Examples
///
/// ```
/// use anchora_layout::LayoutConfig;
///
/// let config = LayoutConfig::from_toml("bias_nudge = 0").unwrap();
/// assert_eq!(config.bias_nudge, 0);
/// assert_eq!(config.vertical_weight_nudge, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Extent sent with at-most directives to content-driven children
    pub unbounded_size: i32,
    /// Pixels added to the lead edge when a bias shifts a child
    pub bias_nudge: i32,
    /// Pixels added to each vertical weighted cell
    pub vertical_weight_nudge: i32,
    /// Reject sibling anchors to children that are not placed yet
    pub check_forward_references: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            unbounded_size: i32::MAX >> 1,
            bias_nudge: 1,
            vertical_weight_nudge: 1,
            check_forward_references: false,
        }
    }
}

impl LayoutConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml(source: &str) -> Result<Self, LayoutError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is in range.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.unbounded_size <= 0 {
            return Err(LayoutError::InvalidConfig(format!(
                "unbounded_size must be positive, got {}",
                self.unbounded_size
            )));
        }
        if self.bias_nudge < 0 {
            return Err(LayoutError::InvalidConfig(format!(
                "bias_nudge must be >= 0, got {}",
                self.bias_nudge
            )));
        }
        if self.vertical_weight_nudge < 0 {
            return Err(LayoutError::InvalidConfig(format!(
                "vertical_weight_nudge must be >= 0, got {}",
                self.vertical_weight_nudge
            )));
        }
        Ok(())
    }

    /// Set the at-most extent for content-driven children.
    #[must_use]
    pub const fn with_unbounded_size(mut self, size: i32) -> Self {
        self.unbounded_size = size;
        self
    }

    /// Set the bias nudge.
    #[must_use]
    pub const fn with_bias_nudge(mut self, nudge: i32) -> Self {
        self.bias_nudge = nudge;
        self
    }

    /// Set the vertical weighted cell nudge.
    #[must_use]
    pub const fn with_vertical_weight_nudge(mut self, nudge: i32) -> Self {
        self.vertical_weight_nudge = nudge;
        self
    }

    /// Enable or disable the forward-reference check.
    #[must_use]
    pub const fn with_forward_reference_check(mut self, enabled: bool) -> Self {
        self.check_forward_references = enabled;
        self
    }
}
