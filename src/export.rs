//! Single-column CSV export of a sample.

use error_stack::{Report, ResultExt};

use crate::{Result, VizError};

pub const EXPORT_HEADER: &str = "Generated Values";
pub const EXPORT_FILENAME: &str = "normal_distribution_data.csv";
pub const EXPORT_MIME: &str = "text/csv";

/// Header line, then one value per line, no index column.
///
/// Values use the shortest decimal form that parses back to the same `f64`.
pub fn to_csv(values: &[f64]) -> Vec<u8> {
    let mut out = String::with_capacity(EXPORT_HEADER.len() + 1 + values.len() * 21);
    out.push_str(EXPORT_HEADER);
    out.push('\n');
    for v in values {
        out.push_str(&v.to_string());
        out.push('\n');
    }
    out.into_bytes()
}

/// Read back a file written by [`to_csv`].
pub fn parse_csv(bytes: &[u8]) -> Result<Vec<f64>> {
    let text = std::str::from_utf8(bytes).change_context(VizError::Export)?;
    let mut lines = text.lines();

    match lines.next() {
        Some(header) if header.trim_end_matches('\r') == EXPORT_HEADER => {}
        _ => return Err(Report::new(VizError::Export)),
    }

    lines
        .filter(|l| !l.is_empty())
        .map(|l| {
            l.trim_end_matches('\r')
                .parse::<f64>()
                .change_context(VizError::Export)
        })
        .collect()
}
