use thiserror::Error;

/// Conditions under which a least-squares fit or its R² is undefined.
///
/// None of these abort an analysis run: the pipeline records the affected
/// sample as degenerate and moves on to the next one.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitError {
    #[error("series is empty, nothing to fit")]
    EmptySeries,

    #[error("series has {xs} x values but {ys} y values")]
    LengthMismatch { xs: usize, ys: usize },

    #[error("series contains non-finite observations")]
    NonFiniteObservation,

    #[error("x values carry no spread, slope is undefined")]
    DegenerateX,

    #[error("y values carry no spread, R² is undefined")]
    DegenerateY,
}
