use error_stack::ResultExt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::Serialize;
use tracing::debug;

use crate::params::Parameters;
use crate::{Result, VizError};

/// Seed for a new, non-reproducible draw.
pub fn fresh_seed() -> u64 {
    rand::rng().random()
}

/// `sample_count` i.i.d. draws from Normal(mean, std_dev).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    pub fn generate<R: Rng + ?Sized>(params: &Parameters, rng: &mut R) -> Result<Self> {
        let normal =
            Normal::new(params.mean, params.std_dev).change_context(VizError::Distribution)?;
        let values = (0..params.sample_count)
            .map(|_| normal.sample(rng))
            .collect::<Vec<f64>>();
        debug!(
            n = values.len(),
            mean = params.mean,
            std_dev = params.std_dev,
            "drew normal sample"
        );
        Ok(Self { values })
    }

    /// Same parameters and seed give the same sample.
    pub fn seeded(params: &Parameters, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(params, &mut rng)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// `max - min`, zero for an empty sample.
    pub fn range(&self) -> f64 {
        if self.values.is_empty() {
            0.0
        } else {
            self.max() - self.min()
        }
    }
}

impl From<Vec<f64>> for Sample {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_matches_count() {
        for n in [100, 1000, 5000] {
            let p = Parameters::new(0.0, 1.0, n);
            let s = Sample::seeded(&p, 7).unwrap();
            assert_eq!(s.len(), n);
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let p = Parameters::new(1.5, 0.3, 250);
        let a = Sample::seeded(&p, 42).unwrap();
        let b = Sample::seeded(&p, 42).unwrap();
        let c = Sample::seeded(&p, 43).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_moments_are_close() {
        let p = Parameters::new(5.0, 2.0, 5000);
        let s = Sample::seeded(&p, 1).unwrap();
        let mean = s.values().iter().sum::<f64>() / s.len() as f64;
        assert!((mean - 5.0).abs() < 0.15, "mean = {mean}");
    }

    #[test]
    fn test_min_max_range() {
        let s = Sample::from(vec![2.0, -1.0, 0.5]);
        assert_eq!(s.min(), -1.0);
        assert_eq!(s.max(), 2.0);
        assert_eq!(s.range(), 3.0);
        assert_eq!(Sample::from(vec![]).range(), 0.0);
    }
}
