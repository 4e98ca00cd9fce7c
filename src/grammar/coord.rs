//! Coordinate systems for Grammar of Graphics.
//!
//! Defines how positions are mapped to the plotting area.

use serde_json::{json, Map, Value};

/// Coordinate system type.
#[derive(Debug, Clone, PartialEq)]
pub enum Coord {
    /// Cartesian coordinates (x, y).
    Cartesian {
        /// X axis limits.
        xlim: Option<(f64, f64)>,
        /// Y axis limits.
        ylim: Option<(f64, f64)>,
    },
    /// Cartesian coordinates with a fixed aspect ratio.
    Fixed {
        /// Aspect ratio (y/x).
        ratio: f64,
        /// X axis limits.
        xlim: Option<(f64, f64)>,
        /// Y axis limits.
        ylim: Option<(f64, f64)>,
    },
    /// Cartesian coordinates with x and y swapped.
    Flip {
        /// X axis limits.
        xlim: Option<(f64, f64)>,
        /// Y axis limits.
        ylim: Option<(f64, f64)>,
    },
    /// Polar coordinates (r, theta).
    Polar {
        /// Which variable maps to angle, `x` or `y`.
        theta: char,
        /// Start offset in radians.
        start: f64,
        /// Clockwise direction.
        clockwise: bool,
    },
}

impl Default for Coord {
    fn default() -> Self {
        Coord::cartesian()
    }
}

impl Coord {
    /// Create a Cartesian coordinate system.
    #[must_use]
    pub fn cartesian() -> Self {
        Coord::Cartesian {
            xlim: None,
            ylim: None,
        }
    }

    /// Create a fixed aspect ratio coordinate system.
    #[must_use]
    pub fn fixed(ratio: f64) -> Self {
        Coord::Fixed {
            ratio,
            xlim: None,
            ylim: None,
        }
    }

    /// Create a flipped coordinate system.
    #[must_use]
    pub fn flip() -> Self {
        Coord::Flip {
            xlim: None,
            ylim: None,
        }
    }

    /// Create a polar coordinate system.
    #[must_use]
    pub fn polar() -> Self {
        Coord::Polar {
            theta: 'x',
            start: 0.0,
            clockwise: true,
        }
    }

    /// Set x-axis limits (no-op for polar).
    #[must_use]
    pub fn xlim(mut self, min: f64, max: f64) -> Self {
        match &mut self {
            Coord::Cartesian { xlim, .. } | Coord::Fixed { xlim, .. } | Coord::Flip { xlim, .. } => {
                *xlim = Some((min, max));
            }
            Coord::Polar { .. } => {}
        }
        self
    }

    /// Set y-axis limits (no-op for polar).
    #[must_use]
    pub fn ylim(mut self, min: f64, max: f64) -> Self {
        match &mut self {
            Coord::Cartesian { ylim, .. } | Coord::Fixed { ylim, .. } | Coord::Flip { ylim, .. } => {
                *ylim = Some((min, max));
            }
            Coord::Polar { .. } => {}
        }
        self
    }

    /// Map `y` instead of `x` to the angle of a polar system.
    #[must_use]
    pub fn theta_y(mut self) -> Self {
        if let Coord::Polar { ref mut theta, .. } = self {
            *theta = 'y';
        }
        self
    }

    /// Set polar start angle.
    #[must_use]
    pub fn start_angle(mut self, angle: f64) -> Self {
        if let Coord::Polar { ref mut start, .. } = self {
            *start = angle;
        }
        self
    }

    /// Set polar direction.
    #[must_use]
    pub fn clockwise(mut self, value: bool) -> Self {
        if let Coord::Polar {
            ref mut clockwise, ..
        } = self
        {
            *clockwise = value;
        }
        self
    }

    pub(crate) fn to_spec(&self) -> Value {
        fn limits(spec: &mut Map<String, Value>, xlim: Option<(f64, f64)>, ylim: Option<(f64, f64)>) {
            if let Some((lo, hi)) = xlim {
                spec.insert("xlim".into(), json!([lo, hi]));
            }
            if let Some((lo, hi)) = ylim {
                spec.insert("ylim".into(), json!([lo, hi]));
            }
        }

        let mut spec = Map::new();
        match *self {
            Coord::Cartesian { xlim, ylim } => {
                spec.insert("name".into(), json!("cartesian"));
                limits(&mut spec, xlim, ylim);
            }
            Coord::Fixed { ratio, xlim, ylim } => {
                spec.insert("name".into(), json!("fixed"));
                spec.insert("ratio".into(), json!(ratio));
                limits(&mut spec, xlim, ylim);
            }
            Coord::Flip { xlim, ylim } => {
                spec.insert("name".into(), json!("flip"));
                limits(&mut spec, xlim, ylim);
            }
            Coord::Polar {
                theta,
                start,
                clockwise,
            } => {
                spec.insert("name".into(), json!("polar"));
                spec.insert("theta".into(), json!(theta.to_string()));
                spec.insert("start".into(), json!(start));
                spec.insert("direction".into(), json!(if clockwise { 1 } else { -1 }));
            }
        }
        Value::Object(spec)
    }
}
