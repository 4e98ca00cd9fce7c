//! Grammar of Graphics plot specification.
//!
//! Provides a declarative plot description based on Wilkinson's Grammar of
//! Graphics [Wilkinson 2005]. Nothing here draws: a finished [`GGPlot`] is
//! turned into an option-map spec and handed to a
//! [`Frontend`](crate::frontend::Frontend) that owns rendering.
//!
//! # Components
//!
//! - **Aesthetics**: Mappings from data to visual properties (x, y, color, fill)
//! - **Geometries**: Visual representations (point, histogram, density, boxplot)
//! - **Statistics**: Data transformations the engine applies (bin, density, boxplot)
//! - **Layers**: Geometry + statistic + mapping + parameters
//! - **Marginal layers**: Distribution layers mirrored into plot margins
//! - **Coordinates**, **Facets**, **Themes**
//!
//! # Example
//!
//! ```rust
//! use ggmarginal::grammar::*;
//!
//! let plot = GGPlot::with_data(DataFrame::from_xy(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]))
//!     .mapping(Aes::new().x("x").y("y"))
//!     + Layer::point().color("black").alpha(0.6)
//!     + ggmarginal("lr", [0.1, 0.2], &Layer::histogram().bins(10)).unwrap()
//!     + ggmarginal("lr", [0.1, 0.2], &Layer::density().fill("blue")).unwrap();
//!
//! let spec = plot.to_spec().unwrap();
//! assert_eq!(spec["layers"].as_array().unwrap().len(), 5);
//! ```
//!
//! # References
//!
//! - Wilkinson, L. (2005). *The Grammar of Graphics*. Springer.
//! - Wickham, H. (2010). "A Layered Grammar of Graphics." Journal of Computational
//!   and Graphical Statistics.

mod aes;
mod coord;
mod data;
mod facet;
mod geom;
mod ggplot;
mod layer;
mod marginal;
mod stat;
mod theme;

pub use aes::{Aes, COUNT, DENSITY};
pub use coord::Coord;
pub use data::{DataFrame, DataValue};
pub use facet::{Facet, FacetOrder, FacetScales};
pub use geom::Geom;
pub use ggplot::{Feature, FeatureList, GGPlot, Labels, PlotSize, Title};
pub use layer::{Layer, LayerParams, Orientation, Position, Sampling, Tooltips};
pub use marginal::{
    build_marginal_layers, ggmarginal, marginal_kind, Side, SizeSpec, MAX_SIDES, MAX_SIZE,
    MIN_SIZE,
};
pub use stat::Stat;
pub use theme::{LegendPosition, Theme, ThemePreset};
