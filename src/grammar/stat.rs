//! Statistical transformations for Grammar of Graphics.
//!
//! A stat names the aggregation the rendering engine applies to raw data
//! before drawing. Nothing is computed here.

use serde_json::{Map, Value};

/// Statistical transformation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    /// No transformation (identity).
    Identity,
    /// Count occurrences.
    Count,
    /// Bin continuous data.
    Bin {
        /// Number of bins.
        bins: usize,
    },
    /// Kernel density estimation along one axis.
    Density,
    /// Density mirrored across a categorical axis (violins).
    YDensity,
    /// Summary statistics (quartiles, whiskers, outliers).
    Boxplot,
    /// Fit a smooth curve.
    Smooth,
    /// 2D binning (for tile/heatmap).
    Bin2d {
        /// Number of x bins.
        bins_x: usize,
        /// Number of y bins.
        bins_y: usize,
    },
    /// Sum of overlapping points.
    Sum,
}

impl Stat {
    /// Default number of bins for [`Stat::Bin`].
    pub const DEFAULT_BINS: usize = 30;

    /// Create an identity stat (no transformation).
    #[must_use]
    pub fn identity() -> Self {
        Stat::Identity
    }

    /// Create a count stat.
    #[must_use]
    pub fn count() -> Self {
        Stat::Count
    }

    /// Create a binning stat.
    #[must_use]
    pub fn bin(bins: usize) -> Self {
        Stat::Bin { bins }
    }

    /// Create a density estimation stat.
    #[must_use]
    pub fn density() -> Self {
        Stat::Density
    }

    /// Create a violin density stat.
    #[must_use]
    pub fn ydensity() -> Self {
        Stat::YDensity
    }

    /// Create a boxplot stat.
    #[must_use]
    pub fn boxplot() -> Self {
        Stat::Boxplot
    }

    /// Create a smooth stat.
    #[must_use]
    pub fn smooth() -> Self {
        Stat::Smooth
    }

    /// Create a 2D binning stat.
    #[must_use]
    pub fn bin2d(bins_x: usize, bins_y: usize) -> Self {
        Stat::Bin2d { bins_x, bins_y }
    }

    /// Create a sum stat.
    #[must_use]
    pub fn sum() -> Self {
        Stat::Sum
    }

    /// Spec name of the stat.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Stat::Identity => "identity",
            Stat::Count => "count",
            Stat::Bin { .. } => "bin",
            Stat::Density => "density",
            Stat::YDensity => "ydensity",
            Stat::Boxplot => "boxplot",
            Stat::Smooth => "smooth",
            Stat::Bin2d { .. } => "bin2d",
            Stat::Sum => "sum",
        }
    }

    /// Write the stat and its own options into a layer spec.
    pub(crate) fn write_spec(&self, spec: &mut Map<String, Value>) {
        spec.insert("stat".into(), Value::from(self.name()));
        match *self {
            Stat::Bin { bins } => {
                spec.insert("bins".into(), Value::from(bins));
            }
            Stat::Bin2d { bins_x, bins_y } => {
                spec.insert("bins".into(), Value::from(vec![bins_x, bins_y]));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_bin() {
        let stat = Stat::bin(20);
        match stat {
            Stat::Bin { bins } => assert_eq!(bins, 20),
            _ => panic!("Expected Bin stat"),
        }
    }

    #[test]
    fn test_stat_bin2d() {
        let stat = Stat::bin2d(10, 15);
        match stat {
            Stat::Bin2d { bins_x, bins_y } => {
                assert_eq!(bins_x, 10);
                assert_eq!(bins_y, 15);
            }
            _ => panic!("Expected Bin2d stat"),
        }
    }

    #[test]
    fn test_stat_names() {
        assert_eq!(Stat::identity().name(), "identity");
        assert_eq!(Stat::count().name(), "count");
        assert_eq!(Stat::bin(5).name(), "bin");
        assert_eq!(Stat::density().name(), "density");
        assert_eq!(Stat::ydensity().name(), "ydensity");
        assert_eq!(Stat::boxplot().name(), "boxplot");
        assert_eq!(Stat::smooth().name(), "smooth");
        assert_eq!(Stat::sum().name(), "sum");
    }

    #[test]
    fn test_stat_bin_spec_carries_bins() {
        let mut spec = Map::new();
        Stat::bin(10).write_spec(&mut spec);
        assert_eq!(spec["stat"], "bin");
        assert_eq!(spec["bins"], 10);
    }

    #[test]
    fn test_stat_identity_spec_has_no_options() {
        let mut spec = Map::new();
        Stat::identity().write_spec(&mut spec);
        assert_eq!(spec.len(), 1);
    }
}
