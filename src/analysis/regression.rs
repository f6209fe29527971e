use serde::Serialize;

use super::error::FitError;
use super::series::ObservationSeries;

// ---------------------------------------------------------------------------
// LinearModel – a fitted least-squares line
// ---------------------------------------------------------------------------

/// Least-squares line `y = slope·x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearModel {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearModel {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Display form with two fraction digits: `"y = 2.00x + 0.50"`.
    pub fn equation(&self) -> String {
        format!("y = {:.2}x + {:.2}", self.slope, self.intercept)
    }
}

// ---------------------------------------------------------------------------
// Fitting
// ---------------------------------------------------------------------------

/// Fit a line through the series by ordinary least squares:
///
/// ```text
/// slope     = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)
/// intercept = (Σy − slope·Σx) / n
/// ```
///
/// The input is validated up front so the closed form never divides by
/// zero: an empty or mismatched series, non-finite observations, and a
/// zero denominator (all x identical) each map to their own [`FitError`].
pub fn fit_line(series: &ObservationSeries) -> Result<LinearModel, FitError> {
    if series.xs.len() != series.ys.len() {
        return Err(FitError::LengthMismatch {
            xs: series.xs.len(),
            ys: series.ys.len(),
        });
    }
    if series.is_empty() {
        return Err(FitError::EmptySeries);
    }
    if series
        .xs
        .iter()
        .chain(series.ys.iter())
        .any(|v| !v.is_finite())
    {
        return Err(FitError::NonFiniteObservation);
    }

    let n = series.len() as f64;
    let sum_x: f64 = series.xs.iter().sum();
    let sum_y: f64 = series.ys.iter().sum();
    let sum_xy: f64 = series.xs.iter().zip(&series.ys).map(|(x, y)| x * y).sum();
    let sum_x2: f64 = series.xs.iter().map(|x| x * x).sum();

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 {
        return Err(FitError::DegenerateX);
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    Ok(LinearModel { slope, intercept })
}
