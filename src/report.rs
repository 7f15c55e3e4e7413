//! One interaction, top to bottom: draw the sample, derive every statistic
//! and curve, and lay out the two plots.

use serde::Serialize;
use tracing::debug;

use crate::core::Dashboard;
use crate::dash::{dash, points};
use crate::export;
use crate::params::{Interaction, Parameters};
use crate::render;
use crate::sample::{Sample, fresh_seed};
use crate::stats::{self, CurveRange, HISTOGRAM_BINS, Histogram, KDE_POINTS, SampleStats};
use crate::theme::Theme;
use crate::Result;

pub const HISTOGRAM_LABEL: &str = "Generated Data";
pub const THEORETICAL_LABEL: &str = "Theoretical Normal Curve";
pub const CDF_LABEL: &str = "CDF Curve";

#[derive(Clone, Debug)]
pub struct Report {
    pub params: Parameters,
    pub query: f64,
    pub seed: u64,
    pub sample: Sample,
    pub stats: SampleStats,
    pub probability: f64,
    pub histogram: Histogram,
    pub kde: Vec<(f64, f64)>,
    pub density: Vec<(f64, f64)>,
    pub cdf: Vec<(f64, f64)>,
    pub dashboard: Dashboard,
}

impl Report {
    /// Uses the interaction's seed if it has one, otherwise a fresh one.
    pub fn compute(interaction: &Interaction, theme: Theme) -> Result<Self> {
        let params = interaction.params;
        let seed = interaction.seed.unwrap_or_else(fresh_seed);

        let sample = Sample::seeded(&params, seed)?;
        let stats = SampleStats::of(&sample);

        let histogram = Histogram::compute(sample.values(), HISTOGRAM_BINS);
        let kde = stats::kde_curve(
            sample.values(),
            KDE_POINTS,
            sample.len() as f64 * histogram.bin_width,
        );
        let density = stats::density_curve(&params, &sample)?;

        let probability = stats::probability_below(&params, interaction.query)?;
        let cdf = stats::cdf_curve(&params)?;

        debug!(
            seed,
            n = sample.len(),
            mean = stats.mean,
            std_dev = stats.std_dev,
            probability,
            "computed report"
        );

        let dashboard = layout(
            theme,
            &histogram,
            &kde,
            &density,
            &cdf,
            interaction.query,
        );

        Ok(Self {
            params,
            query: interaction.query,
            seed,
            sample,
            stats,
            probability,
            histogram,
            kde,
            density,
            cdf,
            dashboard,
        })
    }

    pub fn curve_range(&self) -> CurveRange {
        CurveRange::for_params(&self.params)
    }

    pub fn mean_text(&self) -> String {
        format!("{:.2}", self.stats.mean)
    }

    pub fn std_dev_text(&self) -> String {
        format!("{:.2}", self.stats.std_dev)
    }

    /// `P(X < q) = p` with p to four decimals.
    pub fn probability_line(&self) -> String {
        format!("{} = {:.4}", query_label(self.query), self.probability)
    }

    pub fn csv(&self) -> Vec<u8> {
        export::to_csv(self.sample.values())
    }

    /// Both plots as standalone SVG documents.
    pub fn render(&self, size: (u32, u32)) -> Result<Vec<String>> {
        render::render_dashboard(&self.dashboard, size)
    }

    pub fn summary(&self) -> ReportSummary<'_> {
        ReportSummary {
            params: &self.params,
            query: self.query,
            seed: self.seed,
            sample_len: self.sample.len(),
            stats: &self.stats,
            probability: self.probability,
            curve_range: self.curve_range(),
            histogram: &self.histogram,
            dashboard: &self.dashboard,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportSummary<'a> {
    pub params: &'a Parameters,
    pub query: f64,
    pub seed: u64,
    pub sample_len: usize,
    pub stats: &'a SampleStats,
    pub probability: f64,
    pub curve_range: CurveRange,
    pub histogram: &'a Histogram,
    pub dashboard: &'a Dashboard,
}

/// `P(X < q)`, with q printed so integral values keep a trailing `.0`.
pub fn query_label(query: f64) -> String {
    format!("P(X < {query:?})")
}

fn layout(
    theme: Theme,
    histogram: &Histogram,
    kde: &[(f64, f64)],
    density: &[(f64, f64)],
    cdf: &[(f64, f64)],
    query: f64,
) -> Dashboard {
    let palette = theme.palette();
    let bars: Vec<(f64, f64)> = histogram
        .centers()
        .into_iter()
        .zip(histogram.counts.iter().map(|&c| c as f64))
        .collect();

    dash()
        .background_color(palette.background)
        .add_2d(|p| {
            p.x_label("Value")
                .y_label("Count")
                .bars(points(&bars), histogram.bin_width, &palette.histogram)
                .label(HISTOGRAM_LABEL)
                .line(points(kde), &palette.kde)
                .line(points(density), &palette.theoretical)
                .label(THEORETICAL_LABEL)
        })
        .add_2d(|p| {
            p.x_label("Value")
                .y_label("P(X < x)")
                .line(points(cdf), &palette.cdf)
                .label(CDF_LABEL)
                .vrule(query, &palette.marker)
                .label(query_label(query))
        })
        .build()
}
