use serde::{Deserialize, Serialize};

/// Layout settings used when rendering a matrix as text.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Minimum field width; values are right-aligned within it.
    pub width: usize,
    /// Digits after the decimal point.
    pub precision: usize,
}

impl RenderConfig {
    pub const MAX_WIDTH: usize = 64;
    pub const MAX_PRECISION: usize = 16;

    pub fn new(width: usize, precision: usize) -> Self {
        Self { width, precision }
    }

    /// True when both settings are within `MAX_WIDTH` / `MAX_PRECISION`.
    pub fn is_within_limits(&self) -> bool {
        self.width <= Self::MAX_WIDTH && self.precision <= Self::MAX_PRECISION
    }

    /// Copy with `width` and `precision` capped at their maximums.
    pub fn clamped(&self) -> Self {
        Self {
            width: self.width.min(Self::MAX_WIDTH),
            precision: self.precision.min(Self::MAX_PRECISION),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 6,
            precision: 2,
        }
    }
}
