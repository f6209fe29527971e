/// Analysis core: extraction, regression, scoring, orchestration.
///
/// ```text
///   RawTable ──extract_series──▶ ObservationSeries
///                                      │
///                              fit_line │ r_squared
///                                      ▼
///                         LinearModel + R² per sample
///                                      │
///                                 pipeline::run
///                                      ▼
///                    AnalysisResult (ordered records + mean R²)
/// ```

pub mod error;
pub mod pipeline;
pub mod regression;
pub mod score;
pub mod series;

pub use error::FitError;
pub use pipeline::{AnalysisResult, MeanPolicy, PipelineOptions, SampleOutcome, SampleRecord};
pub use regression::{LinearModel, fit_line};
pub use score::r_squared;
pub use series::{ObservationSeries, extract_series};
