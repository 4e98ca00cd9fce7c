#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Marginal Layers Example
//!
//! Scatter plot with histogram and density margins, once per side
//! combination. Specs are printed to stdout as JSON.
//!
//! Run with: `cargo run --example marginal_layers`

use ggmarginal::demo;
use ggmarginal::prelude::*;

fn main() {
    let mut frontend = JsonFrontend::stdout();

    for plot in demo::marginal_layers(false).expect("Failed to build demo plots") {
        plot.show(&mut frontend).expect("Failed to write spec");
    }

    eprintln!("{} plots", frontend.shown());
}
