//! # ggmarginal
//!
//! Marginal layers for a Grammar of Graphics plot specification.
//!
//! A marginal layer is a distribution layer (histogram, density, boxplot,
//! violin, ...) drawn in a thin strip along one side of the main panel.
//! [`ggmarginal`](grammar::ggmarginal) takes one ordinary layer and returns one
//! reconfigured copy per requested side, ready to be added to a plot.
//!
//! ## Quick Start
//!
//! ```rust
//! use ggmarginal::prelude::*;
//!
//! let plot = GGPlot::with_data(DataFrame::from_xy(&[1.0, 2.0, 3.0], &[3.0, 1.0, 2.0]))
//!     .mapping(Aes::new().x("x").y("y"))
//!     + Layer::point()
//!     + ggmarginal("tr", [0.1, 0.2], &Layer::histogram().bins(10))?;
//!
//! let spec = plot.to_spec()?;
//! assert_eq!(spec["layers"][1]["margin_side"], "t");
//! # Ok::<(), ggmarginal::Error>(())
//! ```
//!
//! Nothing here renders. Finished plots are turned into option-map specs and
//! handed to a [`Frontend`](frontend::Frontend).

#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

/// Configuration for the demo binary.
pub mod config;

/// Demo plots.
pub mod demo;

/// Error types.
pub mod error;

/// Frontends that receive finished plot specs.
pub mod frontend;

/// Grammar of Graphics plot specification and marginal layers.
pub mod grammar;

pub use error::{Error, Result};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::frontend::{Frontend, JsonFrontend};
    pub use crate::grammar::{
        ggmarginal, Aes, Coord, DataFrame, Facet, FacetScales, GGPlot, Geom, Layer, Side,
        SizeSpec, Theme, Title,
    };
}
