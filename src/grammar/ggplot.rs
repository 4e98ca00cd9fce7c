//! Main GGPlot specification builder.
//!
//! Combines all Grammar of Graphics components into a complete plot spec.
//! Components are added with `+`, the way ggplot2 composes plots:
//!
//! ```rust
//! use ggmarginal::grammar::*;
//!
//! let plot = GGPlot::with_data(DataFrame::from_xy(&[1.0, 2.0], &[3.0, 4.0]))
//!     .mapping(Aes::new().x("x").y("y"))
//!     + Layer::point()
//!     + ggmarginal("tr", 0.2, &Layer::density()).unwrap()
//!     + Theme::minimal()
//!     + Title::new("Margins: tr");
//!
//! assert_eq!(plot.layers().len(), 3);
//! ```

use std::ops::Add;

use serde_json::{json, Map, Value};

use crate::error::{Error, Result};
use crate::frontend::Frontend;

use super::aes::Aes;
use super::coord::Coord;
use super::data::DataFrame;
use super::facet::Facet;
use super::layer::Layer;
use super::theme::Theme;

/// Plot title (`ggtitle`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    /// Title text.
    pub text: String,
    /// Optional subtitle.
    pub subtitle: Option<String>,
}

impl Title {
    /// Title without subtitle.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            subtitle: None,
        }
    }

    /// Set the subtitle.
    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

/// Axis and legend labels (`labs`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels {
    /// X-axis label.
    pub x: Option<String>,
    /// Y-axis label.
    pub y: Option<String>,
    /// Caption under the plot.
    pub caption: Option<String>,
}

impl Labels {
    /// Empty label set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set x-axis label.
    #[must_use]
    pub fn x(mut self, label: impl Into<String>) -> Self {
        self.x = Some(label.into());
        self
    }

    /// Set y-axis label.
    #[must_use]
    pub fn y(mut self, label: impl Into<String>) -> Self {
        self.y = Some(label.into());
        self
    }

    /// Set caption.
    #[must_use]
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// Output size in pixels (`ggsize`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PlotSize {
    /// Create a size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Anything that can be added to a plot with `+`.
#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
    /// A layer.
    Layer(Box<Layer>),
    /// Several features added at once.
    List(Vec<Feature>),
    /// Faceting.
    Facet(Facet),
    /// Coordinate system.
    Coord(Coord),
    /// Theme.
    Theme(Theme),
    /// Title.
    Title(Title),
    /// Labels.
    Labels(Labels),
    /// Output size.
    Size(PlotSize),
}

impl From<Layer> for Feature {
    fn from(layer: Layer) -> Self {
        Feature::Layer(Box::new(layer))
    }
}

impl From<FeatureList> for Feature {
    fn from(list: FeatureList) -> Self {
        Feature::List(list.features)
    }
}

impl From<Facet> for Feature {
    fn from(facet: Facet) -> Self {
        Feature::Facet(facet)
    }
}

impl From<Coord> for Feature {
    fn from(coord: Coord) -> Self {
        Feature::Coord(coord)
    }
}

impl From<Theme> for Feature {
    fn from(theme: Theme) -> Self {
        Feature::Theme(theme)
    }
}

impl From<Title> for Feature {
    fn from(title: Title) -> Self {
        Feature::Title(title)
    }
}

impl From<Labels> for Feature {
    fn from(labels: Labels) -> Self {
        Feature::Labels(labels)
    }
}

impl From<PlotSize> for Feature {
    fn from(size: PlotSize) -> Self {
        Feature::Size(size)
    }
}

/// An ordered group of features, e.g. the layers produced by
/// [`ggmarginal`](super::ggmarginal).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureList {
    features: Vec<Feature>,
}

impl FeatureList {
    /// Empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Features in insertion order, nested lists flattened.
    #[must_use]
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Layers in insertion order.
    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        self.features.iter().filter_map(|f| match f {
            Feature::Layer(layer) => Some(layer.as_ref()),
            _ => None,
        })
    }

    /// Number of features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// True if the list holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    fn push(&mut self, feature: Feature) {
        match feature {
            Feature::List(items) => {
                for item in items {
                    self.push(item);
                }
            }
            other => self.features.push(other),
        }
    }
}

impl From<Vec<Layer>> for FeatureList {
    fn from(layers: Vec<Layer>) -> Self {
        Self {
            features: layers.into_iter().map(Feature::from).collect(),
        }
    }
}

impl<T: Into<Feature>> Add<T> for FeatureList {
    type Output = FeatureList;

    fn add(mut self, rhs: T) -> FeatureList {
        self.push(rhs.into());
        self
    }
}

/// Grammar of Graphics plot specification.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GGPlot {
    data: Option<DataFrame>,
    mapping: Aes,
    layers: Vec<Layer>,
    facet: Option<Facet>,
    coord: Option<Coord>,
    theme: Option<Theme>,
    title: Option<Title>,
    labels: Option<Labels>,
    size: Option<PlotSize>,
}

impl GGPlot {
    /// Create an empty plot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a plot over a dataset.
    #[must_use]
    pub fn with_data(data: DataFrame) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    /// Set global aesthetics.
    #[must_use]
    pub fn mapping(mut self, mapping: Aes) -> Self {
        self.mapping = mapping;
        self
    }

    /// Layers in drawing order.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Global aesthetics.
    #[must_use]
    pub fn global_mapping(&self) -> &Aes {
        &self.mapping
    }

    /// Current faceting, if any.
    #[must_use]
    pub fn facet(&self) -> Option<&Facet> {
        self.facet.as_ref()
    }

    /// Current coordinate system, if any.
    #[must_use]
    pub fn coord(&self) -> Option<&Coord> {
        self.coord.as_ref()
    }

    /// Current theme, if any.
    #[must_use]
    pub fn theme(&self) -> Option<&Theme> {
        self.theme.as_ref()
    }

    /// Current title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&Title> {
        self.title.as_ref()
    }

    fn apply(&mut self, feature: Feature) {
        match feature {
            Feature::Layer(layer) => self.layers.push(*layer),
            Feature::List(items) => {
                for item in items {
                    self.apply(item);
                }
            }
            Feature::Facet(facet) => self.facet = Some(facet),
            Feature::Coord(coord) => self.coord = Some(coord),
            Feature::Theme(theme) => self.theme = Some(theme),
            Feature::Title(title) => self.title = Some(title),
            Feature::Labels(labels) => self.labels = Some(labels),
            Feature::Size(size) => self.size = Some(size),
        }
    }

    /// Build the option-map spec handed to the rendering engine.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPlot`] if no layer was added.
    pub fn to_spec(&self) -> Result<Value> {
        if self.layers.is_empty() {
            return Err(Error::EmptyPlot);
        }

        let mut spec = Map::new();
        spec.insert("kind".into(), json!("plot"));
        if let Some(data) = &self.data {
            spec.insert("data".into(), json!(data));
        }
        spec.insert("mapping".into(), json!(self.mapping));
        spec.insert("layers".into(), Value::Array(self.layers.iter().map(Layer::to_spec).collect()));
        if let Some(facet) = &self.facet {
            spec.insert("facet".into(), facet.to_spec());
        }
        if let Some(coord) = &self.coord {
            spec.insert("coord".into(), coord.to_spec());
        }
        if let Some(theme) = &self.theme {
            spec.insert("theme".into(), theme.to_spec());
        }
        if let Some(title) = &self.title {
            let mut ggtitle = json!({"text": title.text});
            if let (Some(subtitle), Value::Object(map)) = (&title.subtitle, &mut ggtitle) {
                map.insert("subtitle".into(), json!(subtitle));
            }
            spec.insert("ggtitle".into(), ggtitle);
        }
        if let Some(labels) = &self.labels {
            let mut labs = Map::new();
            for (key, value) in [("x", &labels.x), ("y", &labels.y), ("caption", &labels.caption)] {
                if let Some(value) = value {
                    labs.insert(key.into(), json!(value));
                }
            }
            spec.insert("labs".into(), Value::Object(labs));
        }
        if let Some(size) = self.size {
            spec.insert("ggsize".into(), json!({"width": size.width, "height": size.height}));
        }

        log::debug!(
            "plot spec with {} layer(s), {} marginal",
            self.layers.len(),
            self.layers.iter().filter(|l| l.is_marginal()).count()
        );
        Ok(Value::Object(spec))
    }

    /// Hand the plot spec to a rendering frontend.
    ///
    /// # Errors
    ///
    /// Returns an error if the spec cannot be built or the frontend fails.
    pub fn show(&self, frontend: &mut dyn Frontend) -> Result<()> {
        let spec = self.to_spec()?;
        frontend.show(&spec)
    }
}

impl<T: Into<Feature>> Add<T> for GGPlot {
    type Output = GGPlot;

    fn add(mut self, rhs: T) -> GGPlot {
        self.apply(rhs.into());
        self
    }
}
