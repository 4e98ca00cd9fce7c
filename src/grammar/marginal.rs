//! Marginal layers.
//!
//! [`ggmarginal`] mirrors a distribution layer (histogram, density, boxplot,
//! violin, freqpoly) into one or more plot margins. Each requested side gets
//! its own copy of the layer carrying the marginal placement parameters plus
//! the mapping and orientation tweaks the geometry needs to read correctly
//! when drawn along that edge.
//!
//! ```rust
//! use ggmarginal::grammar::{build_marginal_layers, Layer, Side};
//!
//! let layers = build_marginal_layers("lr", [0.1, 0.2], &Layer::histogram()).unwrap();
//! assert_eq!(layers.len(), 2);
//! assert_eq!(layers[1].params.margin_side, Some(Side::Right));
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

use super::aes::{Aes, DENSITY};
use super::geom::Geom;
use super::ggplot::FeatureList;
use super::layer::{Layer, LayerParams, Orientation};
use super::stat::Stat;

/// Maximum number of sides a single call may request.
pub const MAX_SIDES: usize = 4;

/// Smallest allowed margin size.
pub const MIN_SIZE: f64 = 0.01;

/// Largest allowed margin size.
pub const MAX_SIZE: f64 = 0.95;

/// Plot edge a marginal layer is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left edge.
    Left,
    /// Right edge.
    Right,
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
}

impl Side {
    /// Parse a side letter: `l`, `r`, `t` or `b`.
    pub fn from_char(c: char) -> Result<Self> {
        match c {
            'l' => Ok(Side::Left),
            'r' => Ok(Side::Right),
            't' => Ok(Side::Top),
            'b' => Ok(Side::Bottom),
            _ => Err(Error::invalid(format!(
                "Invalid 'side' value: {c}. Valid values: 'l','r','t','b'."
            ))),
        }
    }

    /// The side letter.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Side::Left => 'l',
            Side::Right => 'r',
            Side::Top => 't',
            Side::Bottom => 'b',
        }
    }

    /// Left and right margins run vertically along the y axis.
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Side::Left | Side::Right)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Requested margin size: none, one for all sides, or one per side.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SizeSpec {
    /// Let the engine choose.
    #[default]
    Absent,
    /// Same size for every side.
    Uniform(f64),
    /// Size per side, indexed by the side's position in the sides string.
    PerSide(Vec<f64>),
}

impl SizeSpec {
    /// Size for the side at `index`.
    ///
    /// Per-side sizes are checked for non-numeric values before indexing, and
    /// an index past the end is an error rather than a default.
    pub fn resolve(&self, index: usize) -> Result<Option<f64>> {
        match self {
            SizeSpec::Absent => Ok(None),
            SizeSpec::Uniform(size) => Ok(Some(*size)),
            SizeSpec::PerSide(sizes) => {
                if sizes.iter().any(|s| !s.is_finite()) {
                    return Err(Error::invalid(format!(
                        "'size' must contain only numbers: {sizes:?}."
                    )));
                }
                sizes.get(index).copied().map(Some).ok_or_else(|| {
                    Error::invalid(format!(
                        "'size' has no value for side #{index}: {sizes:?} has {} element(s).",
                        sizes.len()
                    ))
                })
            }
        }
    }
}

impl From<f64> for SizeSpec {
    fn from(size: f64) -> Self {
        SizeSpec::Uniform(size)
    }
}

impl From<Option<f64>> for SizeSpec {
    fn from(size: Option<f64>) -> Self {
        size.map_or(SizeSpec::Absent, SizeSpec::Uniform)
    }
}

impl From<Vec<f64>> for SizeSpec {
    fn from(sizes: Vec<f64>) -> Self {
        SizeSpec::PerSide(sizes)
    }
}

impl From<&[f64]> for SizeSpec {
    fn from(sizes: &[f64]) -> Self {
        SizeSpec::PerSide(sizes.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for SizeSpec {
    fn from(sizes: [f64; N]) -> Self {
        SizeSpec::PerSide(sizes.to_vec())
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SizeRepr {
    Uniform(f64),
    PerSide(Vec<f64>),
}

impl Serialize for SizeSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let repr = match self {
            SizeSpec::Absent => None,
            SizeSpec::Uniform(size) => Some(SizeRepr::Uniform(*size)),
            SizeSpec::PerSide(sizes) => Some(SizeRepr::PerSide(sizes.clone())),
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SizeSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(match Option::<SizeRepr>::deserialize(deserializer)? {
            None => SizeSpec::Absent,
            Some(SizeRepr::Uniform(size)) => SizeSpec::Uniform(size),
            Some(SizeRepr::PerSide(sizes)) => SizeSpec::PerSide(sizes),
        })
    }
}

/// Convert a layer into marginal layers, one per side, ready for `+`.
///
/// `sides` is a string of 1 to 4 letters from `"trbl"`. `size` is the
/// width/height of each margin as a fraction of the plotting area, in
/// `[0.01, 0.95]`. Works best with density, histogram, boxplot, violin and
/// freqpoly layers.
pub fn ggmarginal(sides: &str, size: impl Into<SizeSpec>, layer: &Layer) -> Result<FeatureList> {
    build_marginal_layers(sides, size, layer).map(FeatureList::from)
}

/// Build one marginal layer per side, in the order the sides are given.
///
/// The first invalid side or size aborts the call; no layers are returned in
/// that case.
pub fn build_marginal_layers(
    sides: &str,
    size: impl Into<SizeSpec>,
    layer: &Layer,
) -> Result<Vec<Layer>> {
    let size = size.into();
    let count = sides.chars().count();
    if count == 0 || count > MAX_SIDES {
        return Err(Error::invalid(
            "'sides' must be a string containing 1 to 4 chars: 'l','r','t','b'.",
        ));
    }

    let kind = marginal_kind(layer);
    let mut seen: Vec<char> = Vec::with_capacity(count);
    let mut layers = Vec::with_capacity(count);

    for (index, c) in sides.chars().enumerate() {
        let side_size = size.resolve(index)?;
        let side = Side::from_char(c)?;
        if let Some(s) = side_size {
            if !(MIN_SIZE..=MAX_SIZE).contains(&s) {
                return Err(Error::invalid(format!(
                    "Invalid 'size' value: {s}. Should be in range [0.01..0.95]."
                )));
            }
        }

        if seen.contains(&c) {
            log::warn!("marginal side '{c}' requested more than once in \"{sides}\"");
        }
        seen.push(c);

        log::trace!("marginal {} layer on side '{side}' (size {side_size:?})", kind.name());
        layers.push(to_marginal(layer, kind, side, side_size));
    }

    log::debug!("built {} marginal layer(s) for sides \"{sides}\"", layers.len());
    Ok(layers)
}

/// Geometry family used to decide mapping and orientation tweaks.
///
/// The stat wins over the declared geometry, so e.g. an area layer fed by a
/// density stat is handled like a density layer.
#[must_use]
pub fn marginal_kind(layer: &Layer) -> Geom {
    match layer.stat {
        Stat::Bin { .. } => Geom::Histogram,
        Stat::YDensity => Geom::Violin,
        Stat::Density => Geom::Density,
        Stat::Boxplot => Geom::Boxplot,
        _ => layer.geom,
    }
}

fn to_marginal(layer: &Layer, kind: Geom, side: Side, size: Option<f64>) -> Layer {
    let placement = LayerParams {
        marginal: Some(true),
        margin_side: Some(side),
        ..LayerParams::default()
    };
    let mut params = layer.params.merge(&placement);
    // An absent size clears whatever the base layer carried.
    params.margin_size = size;

    Layer {
        geom: layer.geom,
        stat: layer.stat,
        mapping: layer.mapping.merge(&additional_mapping(kind, side)),
        data: layer.data.clone(),
        position: layer.position,
        show_legend: layer.show_legend,
        sampling: layer.sampling,
        tooltips: None,
        orientation: None,
        params: params.merge(&orientation_params(kind, side)),
    }
}

// Histograms share the density scale with density layers in the same margin.
fn additional_mapping(kind: Geom, side: Side) -> Aes {
    match kind {
        Geom::Histogram if side.is_vertical() => Aes::new().x(DENSITY),
        Geom::Histogram => Aes::new().y(DENSITY),
        _ => Aes::new(),
    }
}

fn orientation_params(kind: Geom, side: Side) -> LayerParams {
    let mut params = LayerParams::default();
    if side.is_vertical() && kind.is_univariate_distribution() {
        params.orientation = Some(Orientation::Y);
    }
    if kind.is_summary() {
        if side.is_vertical() {
            params.x = Some(0.0);
        } else {
            params.y = Some(0.0);
            params.orientation = Some(Orientation::Y);
        }
    }
    params
}
