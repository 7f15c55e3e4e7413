//! Descriptive statistics, theoretical curves, and histogram/KDE geometry.
//!
//! | Quantity | Definition |
//! |---|---|
//! | sample mean | Σx / n |
//! | sample std | √(Σ(x−x̄)² / n), population convention |
//! | curve range | [μ − 4σ, μ + 4σ] |
//! | density curve | φ(x; μ, σ) · n · (max − min) / 30, 100 points |
//! | CDF curve | Φ(x; μ, σ), 1000 points |

use error_stack::ResultExt;
use serde::Serialize;
use statrs::distribution::{Continuous, ContinuousCDF, Normal};

use crate::params::Parameters;
use crate::sample::Sample;
use crate::{Result, VizError};

/// Bin count the histogram and the density scaling share.
pub const HISTOGRAM_BINS: usize = 30;
/// Points on the theoretical density curve.
pub const DENSITY_POINTS: usize = 100;
/// Points on the theoretical CDF curve.
pub const CDF_POINTS: usize = 1000;
/// Points on the KDE overlay.
pub const KDE_POINTS: usize = 200;
/// Half-width of the curve range in standard deviations.
pub const CURVE_HALF_WIDTH: f64 = 4.0;

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Standard deviation dividing by `n`.
pub fn population_std_dev(values: &[f64]) -> f64 {
    let m = mean(values);
    let var = values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

/// Standard deviation dividing by `n - 1`.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    var.sqrt()
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SampleStats {
    pub mean: f64,
    pub std_dev: f64,
}

impl SampleStats {
    pub fn of(sample: &Sample) -> Self {
        Self {
            mean: mean(sample.values()),
            std_dev: population_std_dev(sample.values()),
        }
    }
}

/// `n` evenly spaced values over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CurveRange {
    pub start: f64,
    pub end: f64,
}

impl CurveRange {
    pub fn for_params(params: &Parameters) -> Self {
        Self {
            start: params.mean - CURVE_HALF_WIDTH * params.std_dev,
            end: params.mean + CURVE_HALF_WIDTH * params.std_dev,
        }
    }

    pub fn points(&self, n: usize) -> Vec<f64> {
        linspace(self.start, self.end, n)
    }
}

fn normal(params: &Parameters) -> Result<Normal> {
    Normal::new(params.mean, params.std_dev).change_context(VizError::Distribution)
}

/// Theoretical PDF scaled to sit on a 30-bin count histogram of `sample`.
///
/// The scale uses the sample's own min/max, so the curve height varies with
/// the draw.
pub fn density_curve(params: &Parameters, sample: &Sample) -> Result<Vec<(f64, f64)>> {
    let dist = normal(params)?;
    let scale = params.sample_count as f64 * sample.range() / HISTOGRAM_BINS as f64;
    Ok(CurveRange::for_params(params)
        .points(DENSITY_POINTS)
        .into_iter()
        .map(|x| (x, dist.pdf(x) * scale))
        .collect())
}

pub fn cdf_curve(params: &Parameters) -> Result<Vec<(f64, f64)>> {
    let dist = normal(params)?;
    Ok(CurveRange::for_params(params)
        .points(CDF_POINTS)
        .into_iter()
        .map(|x| (x, dist.cdf(x)))
        .collect())
}

/// P(X < x) under Normal(mean, std_dev).
pub fn probability_below(params: &Parameters, x: f64) -> Result<f64> {
    Ok(normal(params)?.cdf(x))
}

/// Equal-width bins over `[min, max]`; the last bin is closed on the right.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
    pub bin_width: f64,
}

impl Histogram {
    pub fn compute(values: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let min_val = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max_val = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if !min_val.is_finite() || !max_val.is_finite() {
            return Self {
                edges: vec![],
                counts: vec![],
                bin_width: 0.0,
            };
        }

        // A constant sample gets a unit-wide range around its value
        let (lo, hi) = if min_val < max_val {
            (min_val, max_val)
        } else {
            (min_val - 0.5, max_val + 0.5)
        };

        let bin_width = (hi - lo) / bins as f64;
        let mut counts = vec![0usize; bins];
        for &v in values {
            let idx = ((v - lo) / bin_width).floor() as usize;
            counts[idx.min(bins - 1)] += 1;
        }

        Self {
            edges: linspace(lo, hi, bins + 1),
            counts,
            bin_width,
        }
    }

    pub fn centers(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| (w[0] + w[1]) * 0.5).collect()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Gaussian KDE over `[min, max]` of `values`, multiplied by `scale`.
///
/// Bandwidth follows Scott's rule, `σ̂ · n^(-1/5)`. Fewer than two values or
/// zero spread yields an empty curve.
pub fn kde_curve(values: &[f64], points: usize, scale: f64) -> Vec<(f64, f64)> {
    let n = values.len();
    if n < 2 {
        return vec![];
    }
    let bandwidth = sample_std_dev(values) * (n as f64).powf(-0.2);
    if bandwidth.is_nan() || bandwidth <= 0.0 {
        return vec![];
    }

    let min_val = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_val = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let norm = 1.0 / ((2.0 * std::f64::consts::PI).sqrt() * bandwidth * n as f64);

    linspace(min_val, max_val, points)
        .into_iter()
        .map(|x| {
            let density = values
                .iter()
                .map(|&xi| {
                    let u = (x - xi) / bandwidth;
                    (-0.5 * u * u).exp()
                })
                .sum::<f64>()
                * norm;
            (x, density * scale)
        })
        .collect()
}
