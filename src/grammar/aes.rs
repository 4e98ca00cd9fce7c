//! Aesthetic mappings for Grammar of Graphics.
//!
//! Maps data columns (or computed statistic variables) to visual properties.

use serde::{Deserialize, Serialize};

/// Computed variable holding the normalized density of a statistic.
///
/// Mapping a positional aesthetic to it makes a histogram share the
/// density scale instead of raw counts.
pub const DENSITY: &str = "..density..";

/// Computed variable holding the count of a statistic.
pub const COUNT: &str = "..count..";

/// Aesthetic mapping specification.
///
/// Each field names the data column (or `..var..` statistic variable)
/// bound to that aesthetic. Unset fields are inherited from the plot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aes {
    /// X position mapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    /// Y position mapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    /// Color mapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Fill color mapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    /// Size mapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Shape mapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    /// Alpha/opacity mapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<String>,
    /// Line type mapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linetype: Option<String>,
    /// Group mapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Weight mapping (used by bin/density statistics).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    /// Label mapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Aes {
    /// Create a new aesthetic mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map x position to a column.
    #[must_use]
    pub fn x(mut self, column: &str) -> Self {
        self.x = Some(column.to_string());
        self
    }

    /// Map y position to a column.
    #[must_use]
    pub fn y(mut self, column: &str) -> Self {
        self.y = Some(column.to_string());
        self
    }

    /// Map color to a column.
    #[must_use]
    pub fn color(mut self, column: &str) -> Self {
        self.color = Some(column.to_string());
        self
    }

    /// Map fill color to a column.
    #[must_use]
    pub fn fill(mut self, column: &str) -> Self {
        self.fill = Some(column.to_string());
        self
    }

    /// Map size to a column.
    #[must_use]
    pub fn size(mut self, column: &str) -> Self {
        self.size = Some(column.to_string());
        self
    }

    /// Map shape to a column.
    #[must_use]
    pub fn shape(mut self, column: &str) -> Self {
        self.shape = Some(column.to_string());
        self
    }

    /// Map alpha/opacity to a column.
    #[must_use]
    pub fn alpha(mut self, column: &str) -> Self {
        self.alpha = Some(column.to_string());
        self
    }

    /// Map line type to a column.
    #[must_use]
    pub fn linetype(mut self, column: &str) -> Self {
        self.linetype = Some(column.to_string());
        self
    }

    /// Map group to a column.
    #[must_use]
    pub fn group(mut self, column: &str) -> Self {
        self.group = Some(column.to_string());
        self
    }

    /// Map weight to a column.
    #[must_use]
    pub fn weight(mut self, column: &str) -> Self {
        self.weight = Some(column.to_string());
        self
    }

    /// Map label to a column.
    #[must_use]
    pub fn label(mut self, column: &str) -> Self {
        self.label = Some(column.to_string());
        self
    }

    /// True if no aesthetic is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Aes::default()
    }

    /// Merge another Aes, with other taking precedence.
    #[must_use]
    pub fn merge(&self, other: &Aes) -> Aes {
        Aes {
            x: other.x.clone().or_else(|| self.x.clone()),
            y: other.y.clone().or_else(|| self.y.clone()),
            color: other.color.clone().or_else(|| self.color.clone()),
            fill: other.fill.clone().or_else(|| self.fill.clone()),
            size: other.size.clone().or_else(|| self.size.clone()),
            shape: other.shape.clone().or_else(|| self.shape.clone()),
            alpha: other.alpha.clone().or_else(|| self.alpha.clone()),
            linetype: other.linetype.clone().or_else(|| self.linetype.clone()),
            group: other.group.clone().or_else(|| self.group.clone()),
            weight: other.weight.clone().or_else(|| self.weight.clone()),
            label: other.label.clone().or_else(|| self.label.clone()),
        }
    }
}
