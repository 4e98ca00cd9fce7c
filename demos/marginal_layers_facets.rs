#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Marginal Layers with Facets Example
//!
//! Car data split into facet panels, each with histogram and density
//! margins on all four sides. Also shows building one of the plots by hand.
//!
//! Run with: `cargo run --example marginal_layers_facets`

use ggmarginal::demo;
use ggmarginal::prelude::*;

fn main() {
    let mut frontend = JsonFrontend::stdout();

    for plot in demo::marginal_layers_facets().expect("Failed to build demo plots") {
        plot.show(&mut frontend).expect("Failed to write spec");
    }

    // The "Wrap" plot, spelled out.
    let sides = "ltrb";
    let sizes = [0.1, 0.1, 0.2, 0.2];
    let plot = GGPlot::with_data(demo::auto_mpg())
        .mapping(Aes::new().x("engine horsepower").y("miles per gallon").color("origin of car"))
        + Layer::point()
        + ggmarginal(sides, sizes, &Layer::histogram().bins(10).color("white")).unwrap()
        + ggmarginal(sides, sizes, &Layer::density().color("red").fill("blue").alpha(0.1)).unwrap()
        + Theme::grey()
        + Facet::wrap("number of cylinders").format("{d} cyl")
        + Title::new("Wrap, by hand");

    plot.show(&mut frontend).expect("Failed to write spec");
}
