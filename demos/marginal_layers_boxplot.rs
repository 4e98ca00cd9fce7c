#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Marginal Layers (Boxplot) Example
//!
//! Same scatter plots as `marginal_layers`, with a boxplot in each margin.
//!
//! Run with: `cargo run --example marginal_layers_boxplot`

use ggmarginal::demo;
use ggmarginal::prelude::*;

fn main() {
    let mut frontend = JsonFrontend::stdout().pretty(false);

    for plot in demo::marginal_layers(true).expect("Failed to build demo plots") {
        plot.show(&mut frontend).expect("Failed to write spec");
    }
}
