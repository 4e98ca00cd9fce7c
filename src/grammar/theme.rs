//! Theme system for Grammar of Graphics.
//!
//! Controls the non-data appearance of plots. A theme is a named preset the
//! engine knows how to draw, plus a few overrides.

use serde_json::{json, Map, Value};

/// Named theme preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreset {
    /// Grey panel, white grid (ggplot2 default-like).
    #[default]
    Grey,
    /// White background, light grid.
    Minimal,
    /// Black and white with panel border.
    Bw,
    /// Axis lines, no grid.
    Classic,
    /// Light grey lines and border.
    Light,
    /// Dark background.
    Dark,
    /// Nothing but data.
    Void,
}

impl ThemePreset {
    fn name(self) -> &'static str {
        match self {
            ThemePreset::Grey => "grey",
            ThemePreset::Minimal => "minimal",
            ThemePreset::Bw => "bw",
            ThemePreset::Classic => "classic",
            ThemePreset::Light => "light",
            ThemePreset::Dark => "dark",
            ThemePreset::Void => "void",
        }
    }
}

/// Legend placement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LegendPosition {
    /// Engine default (right).
    #[default]
    Right,
    /// Left of the panel.
    Left,
    /// Above the panel.
    Top,
    /// Below the panel.
    Bottom,
    /// Hidden.
    None,
    /// Inside the panel at relative coordinates.
    Inside(f64, f64),
}

impl LegendPosition {
    fn to_spec(self) -> Value {
        match self {
            LegendPosition::Right => json!("right"),
            LegendPosition::Left => json!("left"),
            LegendPosition::Top => json!("top"),
            LegendPosition::Bottom => json!("bottom"),
            LegendPosition::None => json!("none"),
            LegendPosition::Inside(x, y) => json!([x, y]),
        }
    }
}

/// Theme specification.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Theme {
    /// Base preset.
    pub preset: ThemePreset,
    /// Legend placement override.
    pub legend_position: Option<LegendPosition>,
    /// Show grid lines override.
    pub show_grid: Option<bool>,
    /// Show axis lines override.
    pub show_axis: Option<bool>,
    /// Show panel border override.
    pub show_panel_border: Option<bool>,
}

impl Theme {
    fn preset(preset: ThemePreset) -> Self {
        Self {
            preset,
            ..Self::default()
        }
    }

    /// Grey theme (ggplot2 default-like).
    #[must_use]
    pub fn grey() -> Self {
        Self::preset(ThemePreset::Grey)
    }

    /// Minimal theme with white background.
    #[must_use]
    pub fn minimal() -> Self {
        Self::preset(ThemePreset::Minimal)
    }

    /// Black and white theme.
    #[must_use]
    pub fn bw() -> Self {
        Self::preset(ThemePreset::Bw)
    }

    /// Classic theme with no grid.
    #[must_use]
    pub fn classic() -> Self {
        Self::preset(ThemePreset::Classic)
    }

    /// Light theme.
    #[must_use]
    pub fn light() -> Self {
        Self::preset(ThemePreset::Light)
    }

    /// Dark theme.
    #[must_use]
    pub fn dark() -> Self {
        Self::preset(ThemePreset::Dark)
    }

    /// Void theme (nothing but data).
    #[must_use]
    pub fn void() -> Self {
        Self::preset(ThemePreset::Void)
    }

    /// Place the legend.
    #[must_use]
    pub fn legend_position(mut self, position: LegendPosition) -> Self {
        self.legend_position = Some(position);
        self
    }

    /// Enable or disable grid lines.
    #[must_use]
    pub fn grid(mut self, show: bool) -> Self {
        self.show_grid = Some(show);
        self
    }

    /// Enable or disable axis lines.
    #[must_use]
    pub fn axis(mut self, show: bool) -> Self {
        self.show_axis = Some(show);
        self
    }

    /// Enable or disable panel border.
    #[must_use]
    pub fn panel_border(mut self, show: bool) -> Self {
        self.show_panel_border = Some(show);
        self
    }

    pub(crate) fn to_spec(&self) -> Value {
        let mut spec = Map::new();
        spec.insert("name".into(), json!(self.preset.name()));
        if let Some(position) = self.legend_position {
            spec.insert("legend_position".into(), position.to_spec());
        }
        // Unset flags keep the preset's look.
        for (key, show) in [
            ("panel_grid", self.show_grid),
            ("axis_line", self.show_axis),
            ("panel_border", self.show_panel_border),
        ] {
            match show {
                Some(false) => {
                    spec.insert(key.into(), json!({"blank": true}));
                }
                Some(true) => {
                    spec.insert(key.into(), json!({"blank": false}));
                }
                None => {}
            }
        }
        Value::Object(spec)
    }
}
