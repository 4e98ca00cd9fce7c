//! Layer specification.
//!
//! A [`Layer`] is one drawing instruction: a geometry, the statistic that
//! feeds it, aesthetic mappings and a bag of parameters. Layers are values:
//! transformations such as [`ggmarginal`](super::ggmarginal) build new layers
//! and leave their input untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::aes::Aes;
use super::data::DataFrame;
use super::geom::Geom;
use super::marginal::Side;
use super::stat::Stat;

/// Which axis a distribution geometry treats as its value axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Values along x (the usual horizontal layout).
    #[default]
    X,
    /// Values along y; the geometry is drawn rotated.
    Y,
}

impl Orientation {
    /// Spec name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Orientation::X => "x",
            Orientation::Y => "y",
        }
    }
}

/// Position adjustment for overlapping objects.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Position {
    /// Leave objects where they are.
    #[default]
    Identity,
    /// Stack objects on top of each other.
    Stack,
    /// Stack and normalize to a fixed height.
    Fill,
    /// Place objects side by side.
    Dodge {
        /// Dodging width, engine default when unset.
        width: Option<f64>,
    },
    /// Add random noise.
    Jitter {
        /// Horizontal jitter.
        width: Option<f64>,
        /// Vertical jitter.
        height: Option<f64>,
    },
    /// Shift by a fixed offset.
    Nudge {
        /// Horizontal shift.
        x: f64,
        /// Vertical shift.
        y: f64,
    },
}

impl Position {
    /// Dodge with the engine's default width.
    #[must_use]
    pub fn dodge() -> Self {
        Position::Dodge { width: None }
    }

    /// Jitter with the engine's default amounts.
    #[must_use]
    pub fn jitter() -> Self {
        Position::Jitter {
            width: None,
            height: None,
        }
    }

    fn to_spec(self) -> Value {
        match self {
            Position::Identity => json!("identity"),
            Position::Stack => json!("stack"),
            Position::Fill => json!("fill"),
            Position::Dodge { width: None } => json!("dodge"),
            Position::Dodge { width: Some(w) } => json!({"name": "dodge", "width": w}),
            Position::Jitter { width, height } => {
                let mut spec = Map::new();
                spec.insert("name".into(), json!("jitter"));
                if let Some(w) = width {
                    spec.insert("width".into(), json!(w));
                }
                if let Some(h) = height {
                    spec.insert("height".into(), json!(h));
                }
                Value::Object(spec)
            }
            Position::Nudge { x, y } => json!({"name": "nudge", "x": x, "y": y}),
        }
    }
}

/// Data sampling the engine applies before drawing large datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sampling {
    /// Disable sampling.
    None,
    /// Keep the first `n` items.
    Pick {
        /// Number of items to keep.
        n: usize,
    },
    /// Keep `n` random items.
    Random {
        /// Number of items to keep.
        n: usize,
        /// Random seed.
        seed: Option<u64>,
    },
    /// Keep every k-th item so that about `n` remain.
    Systematic {
        /// Number of items to keep.
        n: usize,
    },
    /// Keep `n` random groups.
    GroupRandom {
        /// Number of groups to keep.
        n: usize,
        /// Random seed.
        seed: Option<u64>,
    },
}

impl Sampling {
    fn to_spec(self) -> Value {
        match self {
            Sampling::None => json!("none"),
            Sampling::Pick { n } => json!({"name": "pick", "n": n}),
            Sampling::Systematic { n } => json!({"name": "systematic", "n": n}),
            Sampling::Random { n, seed } | Sampling::GroupRandom { n, seed } => {
                let name = if matches!(self, Sampling::Random { .. }) {
                    "random"
                } else {
                    "group_random"
                };
                let mut spec = json!({"name": name, "n": n});
                if let (Some(seed), Value::Object(map)) = (seed, &mut spec) {
                    map.insert("seed".into(), json!(seed));
                }
                spec
            }
        }
    }
}

/// Tooltip configuration of a layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tooltips {
    /// Hide tooltips.
    None,
    /// Custom tooltip content.
    Lines {
        /// Optional title line.
        title: Option<String>,
        /// Body lines (may reference `@variable`).
        lines: Vec<String>,
    },
}

impl Tooltips {
    /// Tooltip with the given body lines.
    #[must_use]
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Tooltips::Lines {
            title: None,
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    fn to_spec(&self) -> Value {
        match self {
            Tooltips::None => json!("none"),
            Tooltips::Lines { title, lines } => {
                let mut spec = json!({"lines": lines});
                if let (Some(title), Value::Object(map)) = (title, &mut spec) {
                    map.insert("title".into(), json!(title));
                }
                spec
            }
        }
    }
}

/// Typed layer parameters.
///
/// Recognized options have their own fields. Geometry-specific settings the
/// transformers never interpret (`color`, `fill`, `alpha`, ...) live in
/// `extra` and are passed through as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerParams {
    /// Layer is drawn in a plot margin.
    pub marginal: Option<bool>,
    /// Margin the layer is attached to.
    pub margin_side: Option<Side>,
    /// Margin size as a fraction of the plotting area.
    pub margin_size: Option<f64>,
    /// Orientation override.
    pub orientation: Option<Orientation>,
    /// Constant x position.
    pub x: Option<f64>,
    /// Constant y position.
    pub y: Option<f64>,
    /// Passthrough geometry parameters.
    pub extra: BTreeMap<String, Value>,
}

impl LayerParams {
    /// Empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge another parameter set, with other taking precedence.
    #[must_use]
    pub fn merge(&self, other: &LayerParams) -> LayerParams {
        let mut extra = self.extra.clone();
        extra.extend(other.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        LayerParams {
            marginal: other.marginal.or(self.marginal),
            margin_side: other.margin_side.or(self.margin_side),
            margin_size: other.margin_size.or(self.margin_size),
            orientation: other.orientation.or(self.orientation),
            x: other.x.or(self.x),
            y: other.y.or(self.y),
            extra,
        }
    }

    /// Look up a passthrough parameter.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    fn write_spec(&self, spec: &mut Map<String, Value>) {
        for (key, value) in &self.extra {
            spec.insert(key.clone(), value.clone());
        }
        if let Some(marginal) = self.marginal {
            spec.insert("marginal".into(), json!(marginal));
        }
        if let Some(side) = self.margin_side {
            spec.insert("margin_side".into(), json!(side.as_char().to_string()));
        }
        if let Some(size) = self.margin_size {
            spec.insert("margin_size".into(), json!(size));
        }
        if let Some(orientation) = self.orientation {
            spec.insert("orientation".into(), json!(orientation.name()));
        }
        if let Some(x) = self.x {
            spec.insert("x".into(), json!(x));
        }
        if let Some(y) = self.y {
            spec.insert("y".into(), json!(y));
        }
    }
}

/// A layer in the plot.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// The geometry.
    pub geom: Geom,
    /// Statistical transformation.
    pub stat: Stat,
    /// Layer-specific aesthetics.
    pub mapping: Aes,
    /// Layer-specific data (if different from plot data).
    pub data: Option<DataFrame>,
    /// Position adjustment.
    pub position: Position,
    /// Whether the layer contributes to the legend.
    pub show_legend: Option<bool>,
    /// Data sampling.
    pub sampling: Option<Sampling>,
    /// Tooltip configuration.
    pub tooltips: Option<Tooltips>,
    /// Explicit orientation.
    pub orientation: Option<Orientation>,
    /// Parameters.
    pub params: LayerParams,
}

impl Layer {
    /// Create a new layer from a geometry with its default stat and position.
    #[must_use]
    pub fn new(geom: Geom) -> Self {
        Self {
            geom,
            stat: geom.default_stat(),
            mapping: Aes::new(),
            data: None,
            position: geom.default_position(),
            show_legend: None,
            sampling: None,
            tooltips: None,
            orientation: None,
            params: LayerParams::new(),
        }
    }

    /// Point layer.
    #[must_use]
    pub fn point() -> Self {
        Self::new(Geom::Point)
    }

    /// Line layer.
    #[must_use]
    pub fn line() -> Self {
        Self::new(Geom::Line)
    }

    /// Histogram layer.
    #[must_use]
    pub fn histogram() -> Self {
        Self::new(Geom::Histogram)
    }

    /// Density layer.
    #[must_use]
    pub fn density() -> Self {
        Self::new(Geom::Density)
    }

    /// Frequency polygon layer.
    #[must_use]
    pub fn freqpoly() -> Self {
        Self::new(Geom::Freqpoly)
    }

    /// Box plot layer.
    #[must_use]
    pub fn boxplot() -> Self {
        Self::new(Geom::Boxplot)
    }

    /// Violin layer.
    #[must_use]
    pub fn violin() -> Self {
        Self::new(Geom::Violin)
    }

    /// Set layer aesthetics.
    #[must_use]
    pub fn mapping(mut self, mapping: Aes) -> Self {
        self.mapping = mapping;
        self
    }

    /// Set layer-specific data.
    #[must_use]
    pub fn data(mut self, data: DataFrame) -> Self {
        self.data = Some(data);
        self
    }

    /// Set statistical transformation.
    #[must_use]
    pub fn stat(mut self, stat: Stat) -> Self {
        self.stat = stat;
        self
    }

    /// Set the number of bins of a binning stat.
    #[must_use]
    pub fn bins(mut self, bins: usize) -> Self {
        if let Stat::Bin { bins: ref mut b } = self.stat {
            *b = bins;
        }
        self
    }

    /// Set position adjustment.
    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Show or hide the layer in the legend.
    #[must_use]
    pub fn show_legend(mut self, show: bool) -> Self {
        self.show_legend = Some(show);
        self
    }

    /// Set data sampling.
    #[must_use]
    pub fn sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = Some(sampling);
        self
    }

    /// Set tooltip configuration.
    #[must_use]
    pub fn tooltips(mut self, tooltips: Tooltips) -> Self {
        self.tooltips = Some(tooltips);
        self
    }

    /// Set explicit orientation.
    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Set a passthrough parameter.
    #[must_use]
    pub fn param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.extra.insert(key.to_string(), value.into());
        self
    }

    /// Constant outline/line color.
    #[must_use]
    pub fn color(self, color: &str) -> Self {
        self.param("color", color)
    }

    /// Constant fill color.
    #[must_use]
    pub fn fill(self, fill: &str) -> Self {
        self.param("fill", fill)
    }

    /// Constant opacity, clamped to [0, 1].
    #[must_use]
    pub fn alpha(self, alpha: f64) -> Self {
        self.param("alpha", alpha.clamp(0.0, 1.0))
    }

    /// Constant point size / line width.
    #[must_use]
    pub fn size(self, size: f64) -> Self {
        self.param("size", size)
    }

    /// Whether this layer was produced for a plot margin.
    #[must_use]
    pub fn is_marginal(&self) -> bool {
        self.params.marginal == Some(true)
    }

    /// Build the option-map spec of this layer.
    #[must_use]
    pub fn to_spec(&self) -> Value {
        let mut spec = Map::new();
        spec.insert("geom".into(), json!(self.geom.name()));
        self.stat.write_spec(&mut spec);
        if !self.mapping.is_empty() {
            spec.insert("mapping".into(), json!(self.mapping));
        }
        if let Some(data) = &self.data {
            spec.insert("data".into(), json!(data));
        }
        spec.insert("position".into(), self.position.to_spec());
        if let Some(show) = self.show_legend {
            spec.insert("show_legend".into(), json!(show));
        }
        if let Some(sampling) = self.sampling {
            spec.insert("sampling".into(), sampling.to_spec());
        }
        if let Some(tooltips) = &self.tooltips {
            spec.insert("tooltips".into(), tooltips.to_spec());
        }
        if let Some(orientation) = self.orientation {
            spec.insert("orientation".into(), json!(orientation.name()));
        }
        self.params.write_spec(&mut spec);
        Value::Object(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_defaults_from_geom() {
        let layer = Layer::histogram();
        assert_eq!(layer.geom, Geom::Histogram);
        assert_eq!(layer.stat, Stat::bin(30));
        assert_eq!(layer.position, Position::Stack);
        assert!(layer.mapping.is_empty());
        assert!(!layer.is_marginal());
    }

    #[test]
    fn test_layer_bins() {
        let layer = Layer::histogram().bins(10);
        assert_eq!(layer.stat, Stat::bin(10));

        // No-op on stats without bins
        let layer = Layer::density().bins(10);
        assert_eq!(layer.stat, Stat::Density);
    }

    #[test]
    fn test_layer_constant_params() {
        let layer = Layer::density().fill("blue").color("red").alpha(1.5);
        assert_eq!(layer.params.get("fill"), Some(&json!("blue")));
        assert_eq!(layer.params.get("color"), Some(&json!("red")));
        assert_eq!(layer.params.get("alpha"), Some(&json!(1.0)));
    }

    #[test]
    fn test_params_merge_other_wins() {
        let mut base = LayerParams {
            orientation: Some(Orientation::X),
            x: Some(3.0),
            ..LayerParams::default()
        };
        base.extra.insert("color".into(), json!("white"));

        let mut other = LayerParams {
            orientation: Some(Orientation::Y),
            margin_side: Some(Side::Left),
            ..LayerParams::default()
        };
        other.extra.insert("color".into(), json!("black"));

        let merged = base.merge(&other);
        assert_eq!(merged.orientation, Some(Orientation::Y));
        assert_eq!(merged.margin_side, Some(Side::Left));
        assert_eq!(merged.x, Some(3.0));
        assert_eq!(merged.get("color"), Some(&json!("black")));
    }

    #[test]
    fn test_layer_spec_basic() {
        let spec = Layer::point().color("black").alpha(0.6).size(5.0).to_spec();
        assert_eq!(spec["geom"], "point");
        assert_eq!(spec["stat"], "identity");
        assert_eq!(spec["position"], "identity");
        assert_eq!(spec["color"], "black");
        assert_eq!(spec["size"], 5.0);
        assert!(spec.get("mapping").is_none());
    }

    #[test]
    fn test_layer_spec_options() {
        let spec = Layer::violin()
            .mapping(Aes::new().fill("origin"))
            .show_legend(false)
            .sampling(Sampling::Random { n: 100, seed: Some(7) })
            .tooltips(Tooltips::lines(["@origin"]))
            .orientation(Orientation::Y)
            .position(Position::Dodge { width: Some(0.5) })
            .to_spec();

        assert_eq!(spec["stat"], "ydensity");
        assert_eq!(spec["mapping"]["fill"], "origin");
        assert_eq!(spec["show_legend"], false);
        assert_eq!(spec["sampling"], json!({"name": "random", "n": 100, "seed": 7}));
        assert_eq!(spec["tooltips"], json!({"lines": ["@origin"]}));
        assert_eq!(spec["orientation"], "y");
        assert_eq!(spec["position"], json!({"name": "dodge", "width": 0.5}));
    }

    #[test]
    fn test_layer_spec_marginal_params() {
        let mut layer = Layer::boxplot();
        layer.params.marginal = Some(true);
        layer.params.margin_side = Some(Side::Top);
        layer.params.margin_size = Some(0.2);
        layer.params.y = Some(0.0);

        let spec = layer.to_spec();
        assert_eq!(spec["marginal"], true);
        assert_eq!(spec["margin_side"], "t");
        assert_eq!(spec["margin_size"], 0.2);
        assert_eq!(spec["y"], 0.0);
        assert!(layer.is_marginal());
    }

    #[test]
    fn test_sampling_and_tooltips_none() {
        let spec = Layer::point().sampling(Sampling::None).tooltips(Tooltips::None).to_spec();
        assert_eq!(spec["sampling"], "none");
        assert_eq!(spec["tooltips"], "none");
    }

    #[test]
    fn test_position_specs() {
        assert_eq!(Position::jitter().to_spec(), json!({"name": "jitter"}));
        assert_eq!(
            Position::Nudge { x: 0.1, y: 0.0 }.to_spec(),
            json!({"name": "nudge", "x": 0.1, "y": 0.0})
        );
        assert_eq!(Position::Fill.to_spec(), json!("fill"));
    }
}
