//! Fills the page template for one report.

use normviz::export::EXPORT_FILENAME;
use normviz::params::{MEAN, SAMPLE_COUNT, STD_DEV};
use normviz::report::Report;
use normviz::theme::{self, Section, Theme};

const TEMPLATE: &str = include_str!("../static/page.html");

/// Escape text for an HTML text node or quoted attribute.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Link that re-creates exactly this report's sample.
pub fn download_href(report: &Report) -> String {
    let p = &report.params;
    format!(
        "/download?mean={}&std_dev={}&samples={}&seed={}",
        p.mean, p.std_dev, p.sample_count, report.seed
    )
}

pub fn render(report: &Report, svgs: &[String], theme: Theme) -> String {
    let svg = |i: usize| svgs.get(i).map(String::as_str).unwrap_or_default();
    let p = &report.params;

    let fields = [
        ("css", theme::stylesheet(theme)),
        ("title", escape(theme.heading(Section::Title))),
        ("inputs_heading", escape(theme.heading(Section::Inputs))),
        ("plot_heading", escape(theme.heading(Section::Plot))),
        ("stats_heading", escape(theme.heading(Section::Statistics))),
        ("probability_heading", escape(theme.heading(Section::Probability))),
        ("cdf_heading", escape(theme.heading(Section::Cdf))),
        ("download_heading", escape(theme.heading(Section::Download))),
        ("download_label", escape(theme.download_label())),
        ("mean_min", MEAN.min.to_string()),
        ("mean_max", MEAN.max.to_string()),
        ("mean_step", MEAN.step.to_string()),
        ("std_min", STD_DEV.min.to_string()),
        ("std_max", STD_DEV.max.to_string()),
        ("std_step", STD_DEV.step.to_string()),
        ("samples_min", SAMPLE_COUNT.min.to_string()),
        ("samples_max", SAMPLE_COUNT.max.to_string()),
        ("mean", p.mean.to_string()),
        ("std_dev", p.std_dev.to_string()),
        ("samples", p.sample_count.to_string()),
        ("query", report.query.to_string()),
        ("sample_mean", report.mean_text()),
        ("sample_std", report.std_dev_text()),
        ("probability_line", escape(&report.probability_line())),
        ("download_href", escape(&download_href(report))),
    ];

    let mut html = TEMPLATE.to_string();
    for (key, value) in &fields {
        html = html.replace(&format!("{{{{{key}}}}}"), value);
    }
    // Plots and the file name go last so nothing inside them is re-expanded
    html.replace("{{download_name}}", EXPORT_FILENAME)
        .replace("{{histogram_svg}}", svg(0))
        .replace("{{cdf_svg}}", svg(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use normviz::params::Inputs;

    fn report() -> Report {
        let i = Inputs {
            mean: Some(1.5),
            std_dev: Some(0.5),
            samples: Some(200),
            query: Some(2.0),
            anchor: None,
            seed: Some(99),
        }
        .resolve();
        Report::compute(&i, Theme::Card).unwrap()
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("P(X < 1.0) & \"q\""), "P(X &lt; 1.0) &amp; &quot;q&quot;");
    }

    #[test]
    fn test_download_href_carries_seed() {
        let r = report();
        assert_eq!(
            download_href(&r),
            "/download?mean=1.5&std_dev=0.5&samples=200&seed=99"
        );
    }

    #[test]
    fn test_every_placeholder_is_filled() {
        let r = report();
        let html = render(&r, &["<svg>a</svg>".into(), "<svg>b</svg>".into()], Theme::Plain);
        assert!(!html.contains("{{"), "unfilled placeholder");
        assert!(html.contains("<svg>a</svg>"));
        assert!(html.contains("<svg>b</svg>"));
        assert!(html.contains("P(X &lt; 2.0) = "));
        assert!(html.contains("Mean (μ)"));
        assert!(html.contains("Standard Deviation (σ)"));
        assert!(html.contains("Number of Samples"));
        assert!(html.contains("Enter a value (X) to find P(X &lt; value):"));
        assert!(html.contains(EXPORT_FILENAME));
    }

    #[test]
    fn test_themes_change_only_decoration() {
        let r = report();
        let card = render(&r, &[], Theme::Card);
        let plain = render(&r, &[], Theme::Plain);
        assert!(card.contains("#2e86de"));
        assert!(!plain.contains("#2e86de"));
        assert!(card.contains(&r.probability_line().replace('<', "&lt;")));
        assert!(plain.contains(&r.probability_line().replace('<', "&lt;")));
    }
}
