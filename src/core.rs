use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Common metadata for all plot types
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlotMeta {
    /// Title displayed at the top of the plot
    pub title: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
    pub const fn with_a(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xff) as f32 / 255.0,
            ((rgb >> 8) & 0xff) as f32 / 255.0,
            (rgb & 0xff) as f32 / 255.0,
        )
    }

    /// 8-bit channels, alpha excluded.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b))
    }

    /// CSS `#rrggbb` form.
    pub fn to_css(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::hex(0x008000);
    pub const SKY_BLUE: Self = Self::hex(0x87ceeb);
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Style {
    pub color: Color,
    pub size: f32,    // stroke width
    pub opacity: f32, // multiplied into alpha
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 2.0,
            opacity: 1.0,
        }
    }
}

impl Style {
    #[inline]
    pub const fn color(mut self, c: Color) -> Self {
        self.color = c;
        self
    }

    #[inline]
    pub const fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    #[inline]
    pub const fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Color with the style opacity folded into alpha.
    pub fn effective_color(&self) -> Color {
        self.color.with_a(self.color.a * self.opacity)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Plot {
    Graph2D(Graph2D),
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Graph2D {
    pub meta: PlotMeta,
    pub layers: Vec<Layer2D>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
}

impl Graph2D {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layer(mut self, layer: Layer2D) -> Self {
        self.layers.push(layer);
        self
    }

    /// Data bounds over every finite point, with bars expanded by half their width.
    ///
    /// Vertical rules only contribute their x coordinate.
    pub fn bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        let mut min = [f64::INFINITY; 2];
        let mut max = [f64::NEG_INFINITY; 2];
        let mut any = false;
        for l in &self.layers {
            let half = l.bar_width.unwrap_or(0.0) * 0.5;
            for p in &l.xy {
                if !p.x.is_finite() || !p.y.is_finite() {
                    continue;
                }
                min[0] = min[0].min(p.x - half);
                max[0] = max[0].max(p.x + half);
                if !matches!(l.geometry, Geometry2D::VRule) {
                    min[1] = min[1].min(p.y);
                    max[1] = max[1].max(p.y);
                }
                any = true;
            }
            // Bars are anchored at zero
            if matches!(l.geometry, Geometry2D::Bars) && !l.xy.is_empty() {
                min[1] = min[1].min(0.0);
                max[1] = max[1].max(0.0);
            }
        }
        if !min[1].is_finite() {
            min[1] = 0.0;
            max[1] = 1.0;
        }
        any.then_some((min, max))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Geometry2D {
    Line,
    /// xy are (bin center, height); width comes from the layer
    Bars,
    /// Vertical dashed marker at each point's x, spanning the plot
    VRule,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Layer2D {
    pub geometry: Geometry2D,
    pub xy: Vec<DVec2>,
    pub style: Style,
    /// Legend entry; unlabelled layers stay out of the legend
    pub label: Option<String>,
    pub bar_width: Option<f64>,
}

impl Layer2D {
    pub fn new(geometry: Geometry2D, xy: Vec<DVec2>) -> Self {
        Self {
            geometry,
            xy,
            style: Style::default(),
            label: None,
            bar_width: None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Dashboard {
    pub background: Color,
    pub plots: Vec<Plot>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            plots: vec![],
        }
    }
}

impl Dashboard {
    pub fn graphs(&self) -> impl Iterator<Item = &Graph2D> {
        self.plots.iter().map(|p| match p {
            Plot::Graph2D(g) => g,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        let c = Color::hex(0x2e86de);
        assert_eq!(c.to_css(), "#2e86de");
        assert_eq!(Color::SKY_BLUE.to_rgb8(), (0x87, 0xce, 0xeb));
    }

    #[test]
    fn test_bounds_include_bar_edges_and_zero() {
        let mut bars = Layer2D::new(
            Geometry2D::Bars,
            vec![DVec2::new(1.0, 4.0), DVec2::new(2.0, 6.0)],
        );
        bars.bar_width = Some(1.0);
        let g = Graph2D::new().with_layer(bars);
        let (min, max) = g.bounds().unwrap();
        assert_eq!(min, [0.5, 0.0]);
        assert_eq!(max, [2.5, 6.0]);
    }

    #[test]
    fn test_vrule_does_not_stretch_y() {
        let line = Layer2D::new(
            Geometry2D::Line,
            vec![DVec2::new(0.0, 0.2), DVec2::new(1.0, 0.8)],
        );
        let rule = Layer2D::new(Geometry2D::VRule, vec![DVec2::new(3.0, 100.0)]);
        let g = Graph2D::new().with_layer(line).with_layer(rule);
        let (min, max) = g.bounds().unwrap();
        assert_eq!(min, [0.0, 0.2]);
        assert_eq!(max, [3.0, 0.8]);
    }

    #[test]
    fn test_empty_graph_has_no_bounds() {
        assert!(Graph2D::new().bounds().is_none());
    }
}
