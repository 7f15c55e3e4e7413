use crate::core::{Color, Dashboard, Geometry2D, Graph2D, Layer2D, Plot, Style};
use glam::DVec2;

pub fn dash() -> DashBuilder {
    DashBuilder {
        dash: Dashboard::default(),
    }
}

pub struct DashBuilder {
    dash: Dashboard,
}

impl DashBuilder {
    pub fn background_color(mut self, c: Color) -> Self {
        self.dash.background = c;
        self
    }

    pub fn add_2d<F>(mut self, f: F) -> Self
    where
        F: FnOnce(Plot2DBuilder) -> Plot2DBuilder,
    {
        let b = f(Plot2DBuilder::new());
        self.dash.plots.push(Plot::Graph2D(b.graph));
        self
    }

    pub fn build(self) -> Dashboard {
        self.dash
    }
}

/* -------------------- PLOT 2D BUILDER -------------------- */

pub struct Plot2DBuilder {
    graph: Graph2D,
}

impl Plot2DBuilder {
    fn new() -> Self {
        Self {
            graph: Graph2D::new(),
        }
    }

    fn push_layer(mut self, mut layer: Layer2D, style: Option<Style>) -> Self {
        if let Some(st) = style {
            layer.style = st;
        }
        self.graph.layers.push(layer);
        self
    }

    pub fn line(self, xy: Vec<DVec2>, style: impl Into<Option<Style>>) -> Self {
        self.push_layer(Layer2D::new(Geometry2D::Line, xy), style.into())
    }

    /// Histogram-style bars centered on each x with a shared width.
    pub fn bars(self, xy: Vec<DVec2>, width: f64, style: impl Into<Option<Style>>) -> Self {
        let mut layer = Layer2D::new(Geometry2D::Bars, xy);
        layer.bar_width = Some(width);
        self.push_layer(layer, style.into())
    }

    /// Dashed vertical marker at `x`.
    pub fn vrule(self, x: f64, style: impl Into<Option<Style>>) -> Self {
        self.push_layer(
            Layer2D::new(Geometry2D::VRule, vec![DVec2::new(x, 0.0)]),
            style.into(),
        )
    }

    /// Attach a legend label to the most recently added layer.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        if let Some(layer) = self.graph.layers.last_mut() {
            layer.label = Some(label.into());
        }
        self
    }

    /// Set the X-axis label
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.graph.x_label = Some(label.into());
        self
    }

    /// Set the Y-axis label
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.graph.y_label = Some(label.into());
        self
    }

    /// Set the plot title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.graph.meta.title = Some(title.into());
        self
    }
}

// Allow passing &Style into the `impl Into<Option<Style>>` slot.
impl From<&Style> for Option<Style> {
    #[inline]
    fn from(s: &Style) -> Self {
        Some(*s)
    }
}

/// Convert `(x, y)` pairs into plot points.
pub fn points(xy: &[(f64, f64)]) -> Vec<DVec2> {
    xy.iter().map(|&(x, y)| DVec2::new(x, y)).collect()
}
