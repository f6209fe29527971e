use crate::data::model::RawTable;

// ---------------------------------------------------------------------------
// ObservationSeries – paired (x, y) observations for one sample
// ---------------------------------------------------------------------------

/// Paired numeric observations extracted from one raw table.
/// `xs` and `ys` always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservationSeries {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl ObservationSeries {
    pub fn push(&mut self, x: f64, y: f64) {
        self.xs.push(x);
        self.ys.push(y);
    }

    /// Number of (x, y) pairs.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Extract the (x, y) pairs from a raw table.
///
/// Only rows with exactly two cells contribute a pair; header rows, blank
/// rows and rows with extra columns are skipped without complaint.
///
/// A kept row whose cell does not read as a number still contributes, with
/// `NaN` standing in for the unreadable cell.  That keeps row counting
/// identical to the source data; the fit stage rejects non-finite
/// observations as [`FitError::NonFiniteObservation`], so such a series
/// surfaces as a degenerate sample rather than as NaN in the output.
///
/// [`FitError::NonFiniteObservation`]: super::error::FitError::NonFiniteObservation
pub fn extract_series(table: &RawTable) -> ObservationSeries {
    let mut series = ObservationSeries::default();
    for row in table {
        if let [x, y] = row.as_slice() {
            series.push(
                x.as_f64().unwrap_or(f64::NAN),
                y.as_f64().unwrap_or(f64::NAN),
            );
        }
    }
    series
}
