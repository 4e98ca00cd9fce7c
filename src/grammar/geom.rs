//! Geometry types for Grammar of Graphics.
//!
//! Defines the visual representation a layer asks the engine to draw.

use super::layer::Position;
use super::stat::Stat;

/// Geometry kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Geom {
    /// Points.
    Point,
    /// Lines connecting points.
    Line,
    /// Area under a line.
    Area,
    /// Bars of counted values.
    Bar,
    /// Histogram bars.
    Histogram,
    /// Density curve.
    Density,
    /// Frequency polygon.
    Freqpoly,
    /// Box plot.
    Boxplot,
    /// Violin plot.
    Violin,
    /// Tile/rectangle (for heatmaps).
    Tile,
    /// Text labels.
    Text,
    /// Smooth curve (loess/lm).
    Smooth,
    /// Horizontal reference line.
    Hline,
    /// Vertical reference line.
    Vline,
}

impl Geom {
    /// Spec name of the geometry.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Geom::Point => "point",
            Geom::Line => "line",
            Geom::Area => "area",
            Geom::Bar => "bar",
            Geom::Histogram => "histogram",
            Geom::Density => "density",
            Geom::Freqpoly => "freqpoly",
            Geom::Boxplot => "boxplot",
            Geom::Violin => "violin",
            Geom::Tile => "tile",
            Geom::Text => "text",
            Geom::Smooth => "smooth",
            Geom::Hline => "hline",
            Geom::Vline => "vline",
        }
    }

    /// Statistic the geometry uses unless told otherwise.
    #[must_use]
    pub fn default_stat(self) -> Stat {
        match self {
            Geom::Bar => Stat::Count,
            Geom::Histogram | Geom::Freqpoly => Stat::Bin {
                bins: Stat::DEFAULT_BINS,
            },
            Geom::Density => Stat::Density,
            Geom::Boxplot => Stat::Boxplot,
            Geom::Violin => Stat::YDensity,
            Geom::Smooth => Stat::Smooth,
            _ => Stat::Identity,
        }
    }

    /// Position adjustment the geometry uses unless told otherwise.
    #[must_use]
    pub fn default_position(self) -> Position {
        match self {
            Geom::Bar | Geom::Histogram => Position::Stack,
            Geom::Boxplot | Geom::Violin => Position::dodge(),
            _ => Position::Identity,
        }
    }

    /// Distribution geometries that draw along one axis and need the
    /// orientation swapped when they run against a left/right margin.
    #[must_use]
    pub fn is_univariate_distribution(self) -> bool {
        matches!(self, Geom::Histogram | Geom::Density | Geom::Freqpoly)
    }

    /// Summary geometries positioned on a categorical axis.
    #[must_use]
    pub fn is_summary(self) -> bool {
        matches!(self, Geom::Boxplot | Geom::Violin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geom_histogram_defaults() {
        assert_eq!(Geom::Histogram.default_stat(), Stat::bin(30));
        assert_eq!(Geom::Histogram.default_position(), Position::Stack);
    }

    #[test]
    fn test_geom_freqpoly_bins() {
        assert!(matches!(Geom::Freqpoly.default_stat(), Stat::Bin { .. }));
    }

    #[test]
    fn test_geom_violin_uses_ydensity() {
        assert_eq!(Geom::Violin.default_stat(), Stat::YDensity);
        assert!(matches!(Geom::Violin.default_position(), Position::Dodge { .. }));
    }

    #[test]
    fn test_geom_point_identity() {
        assert_eq!(Geom::Point.default_stat(), Stat::Identity);
        assert_eq!(Geom::Point.default_position(), Position::Identity);
        assert_eq!(Geom::Point.name(), "point");
    }

    #[test]
    fn test_geom_families() {
        assert!(Geom::Density.is_univariate_distribution());
        assert!(!Geom::Boxplot.is_univariate_distribution());
        assert!(Geom::Boxplot.is_summary());
        assert!(Geom::Violin.is_summary());
        assert!(!Geom::Point.is_summary());
    }
}
