pub mod core;
pub mod dash;
pub mod export;
pub mod params;
pub mod render;
pub mod report;
pub mod sample;
pub mod stats;
pub mod theme;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VizError {
    /// Invalid distribution parameters reached a sampler or evaluator
    Distribution,
    Render,
    Export,
}

impl fmt::Display for VizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VizError::Distribution => write!(f, "invalid normal distribution parameters"),
            VizError::Render => write!(f, "failed to render plot"),
            VizError::Export => write!(f, "malformed sample export"),
        }
    }
}

impl std::error::Error for VizError {}

pub type Result<T> = std::result::Result<T, error_stack::Report<VizError>>;

pub mod prelude {
    pub use crate::core::*;
    pub use crate::dash::*;
    pub use crate::export::{EXPORT_FILENAME, EXPORT_MIME, parse_csv, to_csv};
    pub use crate::params::{Inputs, Interaction, Parameters};
    pub use crate::report::Report;
    pub use crate::sample::Sample;
    pub use crate::theme::Theme;
}
