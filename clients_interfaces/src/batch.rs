//! Submits a file of smoothie selections, one JSON object per line.
use std::io::BufRead;

use anyhow::{Context, Result};
use orders::{OrderSelection, Price};
use tracing::{info, warn};

use crate::screen::{OrderForm, Screen};

/// Outcome of a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub accepted: usize,
    pub incomplete: usize,
    pub skipped: usize,
    pub total: Price,
}

/// Submits every selection read from `reader` to the form, in order.
///
/// Blank lines are ignored and lines that are not a valid selection are
/// logged and skipped; only a read error aborts the batch.
pub fn process_orders<S: Screen, R: BufRead>(
    form: &mut OrderForm<S>,
    reader: R,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.with_context(|| format!("reading selection on line {line_number}"))?;
        if line.trim().is_empty() {
            continue;
        }
        let selection: OrderSelection = match serde_json::from_str(&line) {
            Ok(selection) => selection,
            Err(e) => {
                warn!(line = line_number, error = %e, "skipping malformed selection");
                report.skipped += 1;
                continue;
            }
        };
        match form.submit(&selection) {
            Ok(priced) => {
                report.accepted += 1;
                report.total = report.total + priced.price();
            }
            Err(_) => report.incomplete += 1,
        }
    }
    info!(
        accepted = report.accepted,
        incomplete = report.incomplete,
        skipped = report.skipped,
        total = %report.total,
        "batch finished"
    );
    Ok(report)
}
