//! End-to-end tests for marginal layers.
//!
//! Builds marginal layers through the public API, composes them into plots
//! and checks the spec handed to a frontend.

#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use ggmarginal::frontend::{Frontend, JsonFrontend};
use ggmarginal::grammar::{
    build_marginal_layers, ggmarginal, Aes, DataFrame, Facet, GGPlot, Geom, Layer, Orientation,
    Side, SizeSpec, Stat, Tooltips, DENSITY,
};
use ggmarginal::Error;
use serde_json::{json, Value};

fn scatter() -> GGPlot {
    GGPlot::with_data(DataFrame::from_xy(&[0.5, 1.5, 2.5, 3.5], &[1.0, 0.0, 2.0, 1.0]))
        .mapping(Aes::new().x("x").y("y"))
        + Layer::point()
}

#[derive(Default)]
struct Recorder {
    specs: Vec<Value>,
}

impl Frontend for Recorder {
    fn show(&mut self, spec: &Value) -> ggmarginal::Result<()> {
        self.specs.push(spec.clone());
        Ok(())
    }
}

// ============================================================================
// Transformer
// ============================================================================

#[test]
fn test_histogram_left_right() {
    let base = Layer::histogram().bins(10).color("white");
    let layers = build_marginal_layers("lr", [0.1, 0.2], &base).unwrap();

    assert_eq!(layers.len(), 2);
    for (layer, (side, size)) in layers.iter().zip([(Side::Left, 0.1), (Side::Right, 0.2)]) {
        assert!(layer.is_marginal());
        assert_eq!(layer.params.margin_side, Some(side));
        assert_relative_eq!(layer.params.margin_size.unwrap(), size);
        assert_eq!(layer.mapping.x.as_deref(), Some(DENSITY));
        assert_eq!(layer.params.orientation, Some(Orientation::Y));
        assert_eq!(layer.stat, Stat::bin(10));
        assert_eq!(layer.params.get("color"), Some(&json!("white")));
    }
}

#[test]
fn test_density_all_sides() {
    let layers = build_marginal_layers("trbl", [0.1, 0.2, 0.2, 0.1], &Layer::density()).unwrap();

    let sides: Vec<_> = layers.iter().map(|l| l.params.margin_side.unwrap()).collect();
    assert_eq!(sides, [Side::Top, Side::Right, Side::Bottom, Side::Left]);

    let orientations: Vec<_> = layers.iter().map(|l| l.params.orientation).collect();
    assert_eq!(orientations, [None, Some(Orientation::Y), None, Some(Orientation::Y)]);

    // Density layers keep their own mapping.
    assert!(layers.iter().all(|l| l.mapping.is_empty()));
}

#[test]
fn test_boxplot_top() {
    let layers = build_marginal_layers("t", SizeSpec::Absent, &Layer::boxplot()).unwrap();
    let layer = &layers[0];

    assert_eq!(layer.params.y, Some(0.0));
    assert_eq!(layer.params.x, None);
    assert_eq!(layer.params.orientation, Some(Orientation::Y));
    assert_eq!(layer.params.margin_size, None);
}

#[test]
fn test_violin_left_pins_x() {
    let layers = build_marginal_layers("l", 0.3, &Layer::violin()).unwrap();
    assert_eq!(layers[0].params.x, Some(0.0));
    assert_eq!(layers[0].params.orientation, None);
}

#[test]
fn test_stat_decides_kind() {
    // An area layer with a bin stat is mirrored like a histogram.
    let area = Layer::new(Geom::Area).stat(Stat::bin(20));
    let layers = build_marginal_layers("b", 0.2, &area).unwrap();
    assert_eq!(layers[0].geom, Geom::Area);
    assert_eq!(layers[0].mapping.y.as_deref(), Some(DENSITY));
}

#[test]
fn test_tooltips_and_orientation_cleared() {
    let base = Layer::density()
        .tooltips(Tooltips::lines(["@x"]))
        .orientation(Orientation::Y);
    let before = base.clone();

    let layers = build_marginal_layers("tb", 0.1, &base).unwrap();
    assert!(layers.iter().all(|l| l.tooltips.is_none() && l.orientation.is_none()));
    assert_eq!(base, before);
}

#[test]
fn test_invalid_arguments() {
    let base = Layer::histogram();
    let cases: [(&str, SizeSpec); 5] = [
        ("", SizeSpec::Absent),
        ("ltrbl", SizeSpec::Absent),
        ("lx", SizeSpec::Absent),
        ("lr", SizeSpec::PerSide(vec![0.1])),
        ("t", SizeSpec::Uniform(0.96)),
    ];
    for (sides, size) in cases {
        let result = build_marginal_layers(sides, size, &base);
        let err = result.unwrap_err();
        assert!(err.is_invalid_argument(), "'{sides}' should be rejected, got {err}");
    }
}

#[test]
fn test_size_boundaries_accepted() {
    let layers = build_marginal_layers("lr", [0.01, 0.95], &Layer::density()).unwrap();
    assert_eq!(layers.len(), 2);
}

// ============================================================================
// Composition and spec output
// ============================================================================

#[test]
fn test_composed_plot_order() {
    let sides = "lr";
    let plot = scatter()
        + ggmarginal(sides, [0.1, 0.2], &Layer::histogram().bins(10)).unwrap()
        + ggmarginal(sides, [0.1, 0.2], &Layer::density().fill("blue")).unwrap();

    let geoms: Vec<_> = plot.layers().iter().map(|l| l.geom).collect();
    assert_eq!(
        geoms,
        [Geom::Point, Geom::Histogram, Geom::Histogram, Geom::Density, Geom::Density]
    );
}

#[test]
fn test_marginal_layer_spec_json() {
    let plot = scatter() + ggmarginal("l", 0.1, &Layer::histogram().bins(10)).unwrap();
    let spec = plot.to_spec().unwrap();
    let layer = &spec["layers"][1];

    assert_eq!(layer["geom"], "histogram");
    assert_eq!(layer["marginal"], true);
    assert_eq!(layer["margin_side"], "l");
    assert_eq!(layer["margin_size"], 0.1);
    assert_eq!(layer["orientation"], "y");
    assert_eq!(layer["mapping"]["x"], "..density..");
    assert!(spec["layers"][0].get("marginal").is_none());
}

#[test]
fn test_show_through_frontends() {
    let plot = scatter()
        + ggmarginal("tr", [0.1, 0.2], &Layer::boxplot()).unwrap()
        + Facet::wrap("y");

    let mut recorder = Recorder::default();
    plot.show(&mut recorder).unwrap();
    assert_eq!(recorder.specs.len(), 1);
    assert_eq!(recorder.specs[0]["facet"]["name"], "wrap");

    let mut json = JsonFrontend::new(Vec::new()).pretty(false);
    plot.show(&mut json).unwrap();
    let out = String::from_utf8(json.into_inner().unwrap()).unwrap();
    let parsed: Value = serde_json::from_str(out.trim_end()).unwrap();
    assert_eq!(parsed, recorder.specs[0]);
}

#[test]
fn test_spec_is_deterministic() {
    let build = || {
        (scatter() + ggmarginal("trbl", 0.15, &Layer::density()).unwrap())
            .to_spec()
            .unwrap()
    };
    assert_eq!(build(), build());
}

#[test]
fn test_empty_plot_rejected() {
    let plot = GGPlot::new().mapping(Aes::new().x("x"));
    assert!(matches!(plot.to_spec(), Err(Error::EmptyPlot)));
}
