use serde::Serialize;

use crate::data::model::TableSource;

use super::regression::{LinearModel, fit_line};
use super::score::r_squared;
use super::series::extract_series;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// How the mean R² across samples is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MeanPolicy {
    /// Divide the accumulated R² by the count of **all** expected samples.
    /// Missing and degenerate samples contribute nothing to the numerator
    /// but still count in the denominator, pulling the mean toward zero.
    /// This matches the reference workbook analyzer.
    #[default]
    OverExpected,
    /// Divide by the count of samples that actually produced a fit.
    OverFitted,
}

/// Options for an analysis run.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    pub mean_policy: MeanPolicy,
}

// ---------------------------------------------------------------------------
// Per-sample results
// ---------------------------------------------------------------------------

/// Outcome of analysing one expected sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SampleOutcome {
    /// The table was found and a finite line was fitted and scored.
    Fitted { model: LinearModel, r_squared: f64 },
    /// The table was found but fit or score is undefined for its data
    /// (no rows, no x spread, constant y, unreadable cells).
    Degenerate { reason: String },
    /// No table with this name in the source.
    Missing,
}

/// One row of the final report, in `expected_ids` order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleRecord {
    pub sample_id: String,
    pub outcome: SampleOutcome,
}

impl SampleRecord {
    /// Fitted equation with two fraction digits, or `"N/A"`.
    pub fn equation(&self) -> String {
        match &self.outcome {
            SampleOutcome::Fitted { model, .. } => model.equation(),
            _ => "N/A".to_string(),
        }
    }

    /// R² with four fraction digits, or `"N/A"`.
    pub fn r_squared_display(&self) -> String {
        match &self.outcome {
            SampleOutcome::Fitted { r_squared, .. } => format!("{r_squared:.4}"),
            _ => "N/A".to_string(),
        }
    }
}

/// The complete result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub records: Vec<SampleRecord>,
    pub mean_r_squared: f64,
}

// ---------------------------------------------------------------------------
// The pipeline
// ---------------------------------------------------------------------------

/// Analyse every expected sample against `source`.
///
/// For each id, in the given order: look up the table, extract its (x, y)
/// pairs, fit a line, score it.  A missing table or a degenerate fit
/// produces a placeholder record and the run continues; no condition here
/// aborts the remaining samples.
///
/// With `MeanPolicy::OverExpected` (the default) an empty `expected_ids`
/// yields a NaN mean (0/0), the same as the reference implementation.
pub fn run<S: TableSource>(
    expected_ids: &[String],
    source: &S,
    options: &PipelineOptions,
) -> AnalysisResult {
    let mut records = Vec::with_capacity(expected_ids.len());
    let mut r2_sum = 0.0;
    let mut fitted = 0usize;

    for id in expected_ids {
        let outcome = match source.table(id) {
            Some(table) => {
                let series = extract_series(table);
                let scored = fit_line(&series)
                    .and_then(|model| r_squared(&series, &model).map(|r2| (model, r2)));
                match scored {
                    Ok((model, r2)) => {
                        log::debug!("{id}: {} ({} pairs, R² {r2:.4})", model.equation(), series.len());
                        r2_sum += r2;
                        fitted += 1;
                        SampleOutcome::Fitted {
                            model,
                            r_squared: r2,
                        }
                    }
                    Err(e) => {
                        log::warn!("{id}: degenerate sample: {e}");
                        SampleOutcome::Degenerate {
                            reason: e.to_string(),
                        }
                    }
                }
            }
            None => {
                log::warn!("{id}: no such table in source");
                SampleOutcome::Missing
            }
        };
        records.push(SampleRecord {
            sample_id: id.clone(),
            outcome,
        });
    }

    let denominator = match options.mean_policy {
        MeanPolicy::OverExpected => expected_ids.len(),
        MeanPolicy::OverFitted => fitted,
    };
    // 0/0 deliberately yields NaN rather than a fabricated 0.0.
    let mean_r_squared = r2_sum / denominator as f64;

    AnalysisResult {
        records,
        mean_r_squared,
    }
}
