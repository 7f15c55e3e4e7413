//! SVG rendering of the plot model.

use error_stack::ResultExt;
use plotters::coord::Shift;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use crate::core::{self as model, Dashboard, Geometry2D, Graph2D, Layer2D};
use crate::{Result, VizError};

/// Number of dashes in a vertical rule.
const RULE_DASHES: usize = 40;

/// Draws one graph on a canvas filled with `background`.
pub fn render_svg(graph: &Graph2D, size: (u32, u32), background: model::Color) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        draw_graph(&root, graph, background).change_context(VizError::Render)?;
        root.present().change_context(VizError::Render)?;
    }
    Ok(svg)
}

/// One SVG document per plot, in dashboard order.
pub fn render_dashboard(dashboard: &Dashboard, size: (u32, u32)) -> Result<Vec<String>> {
    dashboard
        .graphs()
        .map(|g| render_svg(g, size, dashboard.background))
        .collect()
}

fn to_rgba(c: model::Color) -> RGBAColor {
    let (r, g, b) = c.to_rgb8();
    RGBAColor(r, g, b, c.a.clamp(0.0, 1.0) as f64)
}

fn axis_range(lo: f64, hi: f64, pad: f64) -> (f64, f64) {
    if hi > lo {
        let span = hi - lo;
        (lo - span * pad, hi + span * pad)
    } else {
        (lo - 0.5, hi + 0.5)
    }
}

fn draw_graph<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    graph: &Graph2D,
    background: model::Color,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&to_rgba(background))?;

    let Some((min, max)) = graph.bounds() else {
        return Ok(());
    };
    let (x0, x1) = axis_range(min[0], max[0], 0.02);
    let (y0, y1) = if max[1] > min[1] {
        (min[1], max[1] + (max[1] - min[1]) * 0.05)
    } else {
        (min[1] - 0.5, max[1] + 0.5)
    };

    let mut builder = ChartBuilder::on(root);
    builder
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(55);
    if let Some(title) = &graph.meta.title {
        builder.caption(title, ("sans-serif", 18));
    }
    let mut chart = builder.build_cartesian_2d(x0..x1, y0..y1)?;

    chart
        .configure_mesh()
        .x_desc(graph.x_label.clone().unwrap_or_default())
        .y_desc(graph.y_label.clone().unwrap_or_default())
        .light_line_style(BLACK.mix(0.05))
        .draw()?;

    for layer in &graph.layers {
        draw_layer(&mut chart, layer, (y0, y1))?;
    }

    if graph.layers.iter().any(|l| l.label.is_some()) {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK.mix(0.3))
            .draw()?;
    }

    Ok(())
}

fn draw_layer<'a, DB: DrawingBackend + 'a>(
    chart: &mut ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    layer: &Layer2D,
    (y0, y1): (f64, f64),
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let color = to_rgba(layer.style.effective_color());
    let stroke = color.stroke_width(layer.style.size.max(1.0).round() as u32);
    let points: Vec<(f64, f64)> = layer
        .xy
        .iter()
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .map(|p| (p.x, p.y))
        .collect();

    let label = layer.label.clone();

    match layer.geometry {
        Geometry2D::Line => {
            let anno = chart.draw_series(LineSeries::new(points, stroke))?;
            if let Some(label) = label {
                anno.label(label)
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], stroke));
            }
        }
        Geometry2D::Bars => {
            let half = layer.bar_width.unwrap_or(0.0) * 0.5;
            let fill = color.filled();
            let edge = BLACK.mix(0.35).stroke_width(1);
            let anno = chart.draw_series(
                points
                    .iter()
                    .map(|&(x, y)| Rectangle::new([(x - half, 0.0), (x + half, y)], fill)),
            )?;
            if let Some(label) = label {
                anno.label(label)
                    .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], fill));
            }
            chart.draw_series(
                points
                    .iter()
                    .map(|&(x, y)| Rectangle::new([(x - half, 0.0), (x + half, y)], edge)),
            )?;
        }
        Geometry2D::VRule => {
            let step = (y1 - y0) / RULE_DASHES as f64;
            let dashes: Vec<PathElement<(f64, f64)>> = points
                .iter()
                .flat_map(|&(x, _)| {
                    (0..RULE_DASHES).map(move |i| {
                        let a = y0 + step * i as f64;
                        PathElement::new(vec![(x, a), (x, a + step * 0.6)], stroke)
                    })
                })
                .collect();
            let anno = chart.draw_series(dashes)?;
            if let Some(label) = label {
                anno.label(label)
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], stroke));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Style;
    use crate::dash::{dash, points};

    #[test]
    fn test_renders_every_geometry() {
        let d = dash()
            .add_2d(|p| {
                p.title("Mixed")
                    .bars(points(&[(0.0, 2.0), (1.0, 4.0)]), 1.0, None)
                    .label("Generated Data")
                    .line(points(&[(-0.5, 0.0), (1.5, 4.0)]), &Style::default())
                    .label("Theoretical Normal Curve")
                    .vrule(0.5, None)
                    .label("P(X < 0.5)")
            })
            .build();
        let svgs = render_dashboard(&d, (640, 400)).unwrap();
        assert_eq!(svgs.len(), 1);
        let svg = &svgs[0];
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Mixed"));
        assert!(svg.contains("Theoretical Normal Curve"));
        assert!(svg.contains("Generated Data"));
    }

    #[test]
    fn test_empty_graph_renders_blank_canvas() {
        let svg = render_svg(&Graph2D::new(), (200, 100), model::Color::WHITE).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_canvas_uses_dashboard_background() {
        let d = dash()
            .background_color(model::Color::hex(0xf0f2f6))
            .add_2d(|p| p.line(points(&[(0.0, 0.0), (1.0, 1.0)]), None))
            .build();
        let svg = render_dashboard(&d, (300, 200)).unwrap().remove(0);
        assert!(svg.to_uppercase().contains("#F0F2F6"));
    }

    #[test]
    fn test_axis_range_pads_or_widens() {
        assert_eq!(axis_range(1.0, 1.0, 0.1), (0.5, 1.5));
        let (lo, hi) = axis_range(0.0, 10.0, 0.1);
        assert!((lo + 1.0).abs() < 1e-12 && (hi - 11.0).abs() < 1e-12);
    }
}
