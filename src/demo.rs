//! Demo plots with marginal layers.
//!
//! Shared by the `ggmarginal-demo` binary and the programs under `demos/`.

use crate::error::Result;
use crate::grammar::{
    ggmarginal, Aes, Coord, DataFrame, Facet, FacetOrder, FacetScales, GGPlot, Layer, SizeSpec,
    Theme, Title,
};

/// X values of the scatter demo.
pub const X: [f64; 20] = [
    -0.856_822_93, -2.391_123_4, -2.427_443_14, -1.944_562_21, -3.081_161_68,
    -2.821_490_96, -2.759_099_11, -0.597_602_9, -2.284_221_14, -2.875_744_81,
    -2.447_648_64, 0.621_400_45, -2.786_348_44, -0.777_984_94, -1.847_759_72,
    -0.683_680_36, -1.164_499_09, -2.544_850_03, -2.203_620_9, -1.682_420_49,
];

/// Y values of the scatter demo.
pub const Y: [f64; 20] = [
    -1.523_693_74, 0.108_001_42, -0.044_568_82, 0.249_802_94, 0.076_562_86,
    1.184_304_93, 0.600_708_62, -1.303_958_9, 0.540_566_65, 0.475_645_1,
    1.234_400_38, -2.647_210_71, 0.866_290_33, -1.014_369_46, -0.306_873_69,
    -1.231_370_15, -0.417_371_17, 0.540_534_81, -0.711_519_53, -1.375_032_88,
];

/// Side / size combinations shown by the scatter demos.
pub const MARGIN_CASES: [(&str, &[f64]); 9] = [
    ("l", &[0.1]),
    ("r", &[0.2]),
    ("lr", &[0.1, 0.2]),
    ("t", &[0.1]),
    ("b", &[0.2]),
    ("tb", &[0.1, 0.2]),
    ("tr", &[0.1, 0.2]),
    ("bl", &[0.2, 0.1]),
    ("trbl", &[0.1, 0.2, 0.2, 0.1]),
];

/// Scatter of [`X`]/[`Y`] with marginal layers on `sides`.
///
/// Histogram + density margins, or a boxplot margin when `boxplot` is set.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) for
/// bad sides or sizes.
pub fn marginal_plot(sides: &str, size: impl Into<SizeSpec>, boxplot: bool) -> Result<GGPlot> {
    let size = size.into();
    let plot = GGPlot::with_data(DataFrame::from_xy(&X, &Y))
        .mapping(Aes::new().x("x").y("y"))
        + Title::new(format!("Margins: {sides}"))
        + Layer::point().color("black").alpha(0.6).size(5.0);

    let plot = if boxplot {
        plot + ggmarginal(sides, size, &Layer::boxplot())?
    } else {
        plot + ggmarginal(sides, size.clone(), &Layer::histogram().bins(10).color("white"))?
            + ggmarginal(sides, size, &Layer::density().fill("blue").color("red").alpha(0.1))?
    };
    Ok(plot)
}

/// All scatter demo plots, one per [`MARGIN_CASES`] entry.
///
/// # Errors
///
/// Never fails for the built-in cases; the error type is shared with
/// [`marginal_plot`].
pub fn marginal_layers(boxplot: bool) -> Result<Vec<GGPlot>> {
    MARGIN_CASES
        .iter()
        .map(|&(sides, sizes)| marginal_plot(sides, sizes, boxplot))
        .collect()
}

/// Small sample of the classic auto-mpg dataset.
#[must_use]
pub fn auto_mpg() -> DataFrame {
    const ROWS: [(f64, i64, f64, &str); 24] = [
        (18.0, 8, 130.0, "US"),
        (15.0, 8, 165.0, "US"),
        (18.0, 8, 150.0, "US"),
        (16.0, 8, 150.0, "US"),
        (17.0, 8, 140.0, "US"),
        (14.0, 8, 225.0, "US"),
        (22.0, 6, 95.0, "US"),
        (18.0, 6, 97.0, "US"),
        (21.0, 6, 85.0, "US"),
        (19.0, 6, 100.0, "US"),
        (28.0, 4, 90.0, "US"),
        (25.0, 4, 86.0, "US"),
        (26.0, 4, 46.0, "Europe"),
        (25.0, 4, 87.0, "Europe"),
        (24.0, 4, 90.0, "Europe"),
        (25.0, 4, 95.0, "Europe"),
        (26.0, 4, 113.0, "Europe"),
        (20.0, 5, 103.0, "Europe"),
        (24.0, 4, 95.0, "Asia"),
        (27.0, 4, 88.0, "Asia"),
        (31.0, 4, 65.0, "Asia"),
        (35.0, 4, 69.0, "Asia"),
        (23.0, 3, 97.0, "Asia"),
        (20.0, 6, 122.0, "Asia"),
    ];

    DataFrame::new()
        .with_column("miles per gallon", ROWS.iter().map(|r| r.0))
        .with_column("number of cylinders", ROWS.iter().map(|r| r.1))
        .with_column("engine horsepower", ROWS.iter().map(|r| r.2))
        .with_column("origin of car", ROWS.iter().map(|r| r.3))
}

fn facets_base() -> Result<GGPlot> {
    let sides = "ltrb";
    let sizes = [0.1, 0.1, 0.2, 0.2];

    let histogram = Layer::histogram()
        .bins(10)
        .color("white")
        .mapping(Aes::new().fill("origin of car"));
    let density = Layer::density().color("red").fill("blue").alpha(0.1);

    Ok(GGPlot::with_data(auto_mpg()).mapping(
        Aes::new().x("engine horsepower").y("miles per gallon").color("origin of car"),
    ) + Layer::point()
        + ggmarginal(sides, sizes, &histogram)?
        + ggmarginal(sides, sizes, &density)?
        + Theme::grey())
}

/// Faceted demo plots: grid and wrap facets combined with fixed coords and
/// free scales.
///
/// # Errors
///
/// Never fails for the built-in sides and sizes.
pub fn marginal_layers_facets() -> Result<Vec<GGPlot>> {
    let p = facets_base()?;
    let grid = || Facet::grid(None, Some("origin of car")).y_order(FacetOrder::AsIs);
    let wrap = || Facet::wrap("number of cylinders").format("{d} cyl");

    Ok(vec![
        p.clone() + grid() + Title::new("Grid"),
        p.clone() + grid() + Coord::fixed(1.0) + Title::new("Grid, coord=fixed"),
        p.clone() + grid().scales(FacetScales::FreeY) + Title::new("Grid, scales=free_y"),
        p.clone() + wrap() + Title::new("Wrap"),
        p.clone() + wrap() + Coord::fixed(1.0).ylim(0.0, 100.0) + Title::new("Wrap, coord=fixed"),
        p + wrap().scales(FacetScales::FreeX) + Title::new("Wrap, scales=free_x"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marginal_layers_all_cases() {
        let plots = marginal_layers(false).unwrap();
        assert_eq!(plots.len(), MARGIN_CASES.len());

        for (plot, (sides, _)) in plots.iter().zip(MARGIN_CASES) {
            // point + histogram and density per side
            assert_eq!(plot.layers().len(), 1 + 2 * sides.len());
            let title = plot.title().map(|t| t.text.clone());
            assert_eq!(title, Some(format!("Margins: {sides}")));
        }
    }

    #[test]
    fn test_marginal_layers_boxplot() {
        let plots = marginal_layers(true).unwrap();
        let trbl = plots.last().unwrap();
        assert_eq!(trbl.layers().len(), 5);
        assert!(trbl.layers()[1..].iter().all(Layer::is_marginal));
    }

    #[test]
    fn test_marginal_plot_rejects_bad_sides() {
        assert!(marginal_plot("x", 0.1, false).is_err());
        assert!(marginal_plot("lr", [0.1], true).is_err());
    }

    #[test]
    fn test_auto_mpg_columns() {
        let df = auto_mpg();
        assert_eq!(df.ncol(), 4);
        assert_eq!(df.nrow(), 24);
        assert!(df.has_column("origin of car"));
    }

    #[test]
    fn test_facets_plots() {
        let plots = marginal_layers_facets().unwrap();
        assert_eq!(plots.len(), 6);
        for plot in &plots {
            assert_eq!(plot.layers().len(), 1 + 4 + 4);
            assert!(plot.facet().is_some());
            assert!(plot.to_spec().is_ok());
        }
        assert!(plots[1].coord().is_some());
        assert!(plots[3].coord().is_none());
    }
}
