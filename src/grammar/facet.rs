//! Faceting for Grammar of Graphics.
//!
//! Creates small multiples by splitting data on one or more variables.
//! Marginal layers are repeated around every panel by the engine.

use serde_json::{json, Map, Value};

/// Which panel scales may vary between facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacetScales {
    /// Shared scales.
    #[default]
    Fixed,
    /// Both scales free.
    Free,
    /// Free x scale.
    FreeX,
    /// Free y scale.
    FreeY,
}

impl FacetScales {
    fn name(self) -> &'static str {
        match self {
            FacetScales::Fixed => "fixed",
            FacetScales::Free => "free",
            FacetScales::FreeX => "free_x",
            FacetScales::FreeY => "free_y",
        }
    }
}

/// Ordering of facet values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacetOrder {
    /// Ascending.
    #[default]
    Ascending,
    /// Descending.
    Descending,
    /// Order of appearance in the data.
    AsIs,
}

impl FacetOrder {
    fn code(self) -> i8 {
        match self {
            FacetOrder::Ascending => 1,
            FacetOrder::Descending => -1,
            FacetOrder::AsIs => 0,
        }
    }
}

/// Faceting specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Facet {
    /// Grid of panels by up to two variables.
    Grid {
        /// Variable splitting columns.
        x: Option<String>,
        /// Variable splitting rows.
        y: Option<String>,
        /// Column ordering.
        x_order: FacetOrder,
        /// Row ordering.
        y_order: FacetOrder,
        /// Scale sharing.
        scales: FacetScales,
    },
    /// Panels wrapped into rows.
    Wrap {
        /// Variables to facet by.
        facets: Vec<String>,
        /// Number of columns.
        ncol: Option<usize>,
        /// Number of rows.
        nrow: Option<usize>,
        /// Panel label format, e.g. `"{d} cyl"`.
        format: Option<String>,
        /// Scale sharing.
        scales: FacetScales,
    },
}

impl Facet {
    /// Facet into a grid of columns by `x` and rows by `y`.
    #[must_use]
    pub fn grid(x: Option<&str>, y: Option<&str>) -> Self {
        Facet::Grid {
            x: x.map(str::to_string),
            y: y.map(str::to_string),
            x_order: FacetOrder::default(),
            y_order: FacetOrder::default(),
            scales: FacetScales::default(),
        }
    }

    /// Facet with wrapping on one variable.
    #[must_use]
    pub fn wrap(var: &str) -> Self {
        Facet::Wrap {
            facets: vec![var.to_string()],
            ncol: None,
            nrow: None,
            format: None,
            scales: FacetScales::default(),
        }
    }

    /// Set scale sharing.
    #[must_use]
    pub fn scales(mut self, value: FacetScales) -> Self {
        match &mut self {
            Facet::Grid { scales, .. } | Facet::Wrap { scales, .. } => *scales = value,
        }
        self
    }

    /// Set grid column ordering.
    #[must_use]
    pub fn x_order(mut self, order: FacetOrder) -> Self {
        if let Facet::Grid { ref mut x_order, .. } = self {
            *x_order = order;
        }
        self
    }

    /// Set grid row ordering.
    #[must_use]
    pub fn y_order(mut self, order: FacetOrder) -> Self {
        if let Facet::Grid { ref mut y_order, .. } = self {
            *y_order = order;
        }
        self
    }

    /// Set number of wrap columns.
    #[must_use]
    pub fn ncol(mut self, n: usize) -> Self {
        if let Facet::Wrap { ref mut ncol, .. } = self {
            *ncol = Some(n);
        }
        self
    }

    /// Set number of wrap rows.
    #[must_use]
    pub fn nrow(mut self, n: usize) -> Self {
        if let Facet::Wrap { ref mut nrow, .. } = self {
            *nrow = Some(n);
        }
        self
    }

    /// Set wrap panel label format.
    #[must_use]
    pub fn format(mut self, fmt: &str) -> Self {
        if let Facet::Wrap { ref mut format, .. } = self {
            *format = Some(fmt.to_string());
        }
        self
    }

    pub(crate) fn to_spec(&self) -> Value {
        let mut spec = Map::new();
        match self {
            Facet::Grid {
                x,
                y,
                x_order,
                y_order,
                scales,
            } => {
                spec.insert("name".into(), json!("grid"));
                if let Some(x) = x {
                    spec.insert("x".into(), json!(x));
                }
                if let Some(y) = y {
                    spec.insert("y".into(), json!(y));
                }
                spec.insert("x_order".into(), json!(x_order.code()));
                spec.insert("y_order".into(), json!(y_order.code()));
                spec.insert("scales".into(), json!(scales.name()));
            }
            Facet::Wrap {
                facets,
                ncol,
                nrow,
                format,
                scales,
            } => {
                spec.insert("name".into(), json!("wrap"));
                spec.insert("facets".into(), json!(facets));
                if let Some(ncol) = ncol {
                    spec.insert("ncol".into(), json!(ncol));
                }
                if let Some(nrow) = nrow {
                    spec.insert("nrow".into(), json!(nrow));
                }
                if let Some(format) = format {
                    spec.insert("format".into(), json!(format));
                }
                spec.insert("scales".into(), json!(scales.name()));
            }
        }
        Value::Object(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facet_grid() {
        let f = Facet::grid(None, Some("origin of car"))
            .y_order(FacetOrder::AsIs)
            .scales(FacetScales::FreeY);
        match &f {
            Facet::Grid {
                x,
                y,
                y_order,
                scales,
                ..
            } => {
                assert!(x.is_none());
                assert_eq!(y.as_deref(), Some("origin of car"));
                assert_eq!(*y_order, FacetOrder::AsIs);
                assert_eq!(*scales, FacetScales::FreeY);
            }
            Facet::Wrap { .. } => panic!("Expected Grid"),
        }

        let spec = f.to_spec();
        assert_eq!(spec["name"], "grid");
        assert_eq!(spec["y_order"], 0);
        assert_eq!(spec["x_order"], 1);
        assert_eq!(spec["scales"], "free_y");
        assert!(spec.get("x").is_none());
    }

    #[test]
    fn test_facet_wrap() {
        let f = Facet::wrap("number of cylinders")
            .format("{d} cyl")
            .ncol(3)
            .scales(FacetScales::FreeX);
        let spec = f.to_spec();
        assert_eq!(spec["facets"], json!(["number of cylinders"]));
        assert_eq!(spec["format"], "{d} cyl");
        assert_eq!(spec["ncol"], 3);
        assert_eq!(spec["scales"], "free_x");
        assert!(spec.get("nrow").is_none());
    }

    #[test]
    fn test_grid_setters_ignored_on_wrap() {
        let f = Facet::wrap("cyl").x_order(FacetOrder::Descending);
        assert_eq!(f, Facet::wrap("cyl"));
        let g = Facet::grid(Some("a"), None).ncol(2).format("{}");
        assert_eq!(g, Facet::grid(Some("a"), None));
    }
}
