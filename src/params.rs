//! Request inputs and their widget-imposed ranges.
//!
//! Every bounded input is clamped into range instead of rejected, the same
//! way a slider cannot be dragged past its ends.

use serde::{Deserialize, Deserializer, Serialize};

/// Range, default, and step of a bounded control.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
    pub default: T,
    pub step: T,
}

impl Bounds<f64> {
    /// Clamp into range; non-finite input falls back to the default.
    pub fn clamp(&self, v: f64) -> f64 {
        if v.is_finite() {
            v.clamp(self.min, self.max)
        } else {
            self.default
        }
    }
}

impl Bounds<usize> {
    pub fn clamp(&self, v: usize) -> usize {
        v.clamp(self.min, self.max)
    }
}

pub const MEAN: Bounds<f64> = Bounds {
    min: -10.0,
    max: 10.0,
    default: 0.0,
    step: 0.01,
};

pub const STD_DEV: Bounds<f64> = Bounds {
    min: 0.1,
    max: 5.0,
    default: 1.0,
    step: 0.01,
};

pub const SAMPLE_COUNT: Bounds<usize> = Bounds {
    min: 100,
    max: 5000,
    default: 1000,
    step: 1,
};

/// Normal distribution parameters for one interaction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Parameters {
    pub mean: f64,
    pub std_dev: f64,
    pub sample_count: usize,
}

impl Parameters {
    pub fn new(mean: f64, std_dev: f64, sample_count: usize) -> Self {
        Self {
            mean: MEAN.clamp(mean),
            std_dev: STD_DEV.clamp(std_dev),
            sample_count: SAMPLE_COUNT.clamp(sample_count),
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            mean: MEAN.default,
            std_dev: STD_DEV.default,
            sample_count: SAMPLE_COUNT.default,
        }
    }
}

/// Raw control values as they arrive in a query string.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Inputs {
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
    pub samples: Option<usize>,
    /// Query point for P(X < query); a cleared field arrives as `query=`
    #[serde(default, deserialize_with = "blank_as_none")]
    pub query: Option<f64>,
    /// Mean the query field was last shown against
    pub anchor: Option<f64>,
    pub seed: Option<u64>,
}

fn blank_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Resolved inputs of one interaction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interaction {
    pub params: Parameters,
    pub query: f64,
    pub seed: Option<u64>,
}

impl Inputs {
    pub fn resolve(&self) -> Interaction {
        let params = Parameters::new(
            self.mean.unwrap_or(MEAN.default),
            self.std_dev.unwrap_or(STD_DEV.default),
            self.samples.unwrap_or(SAMPLE_COUNT.default),
        );

        // The query field defaults to the mean and follows it when the mean moves.
        let moved = self.anchor.is_some_and(|a| a != params.mean);
        let query = match self.query {
            Some(q) if q.is_finite() && !moved => q,
            _ => params.mean,
        };

        Interaction {
            params,
            query,
            seed: self.seed,
        }
    }
}

impl Default for Interaction {
    fn default() -> Self {
        Inputs::default().resolve()
    }
}
