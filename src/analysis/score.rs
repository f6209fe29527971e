use super::error::FitError;
use super::regression::LinearModel;
use super::series::ObservationSeries;

/// Coefficient of determination of `model` against the observed series:
///
/// ```text
/// R² = 1 − Σ(yᵢ − ŷᵢ)² / Σ(yᵢ − ȳ)²
/// ```
///
/// R² is at most 1.0 (all residuals zero) and can go negative when the
/// line predicts worse than the mean of y.  A series whose y values are
/// all identical has a zero total sum of squares and no defined R²; that
/// is reported as [`FitError::DegenerateY`] instead of dividing by zero.
pub fn r_squared(series: &ObservationSeries, model: &LinearModel) -> Result<f64, FitError> {
    if series.is_empty() {
        return Err(FitError::EmptySeries);
    }

    let n = series.len() as f64;
    let mean_y: f64 = series.ys.iter().sum::<f64>() / n;

    let ss_total: f64 = series.ys.iter().map(|y| (y - mean_y).powi(2)).sum();
    if ss_total == 0.0 || !ss_total.is_finite() {
        return Err(FitError::DegenerateY);
    }

    let ss_residual: f64 = series
        .xs
        .iter()
        .zip(&series.ys)
        .map(|(&x, &y)| (y - model.predict(x)).powi(2))
        .sum();

    Ok(1.0 - ss_residual / ss_total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::regression::fit_line;

    fn series(pairs: &[(f64, f64)]) -> ObservationSeries {
        let mut s = ObservationSeries::default();
        for &(x, y) in pairs {
            s.push(x, y);
        }
        s
    }

    #[test]
    fn perfect_fit_scores_exactly_one() {
        let s = series(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]);
        let model = fit_line(&s).unwrap();

        assert_eq!(r_squared(&s, &model).unwrap(), 1.0);
    }

    #[test]
    fn fitted_line_never_scores_above_one() {
        let s = series(&[(1.0, 2.2), (2.0, 3.9), (3.0, 6.1), (4.0, 7.6), (5.0, 10.3)]);
        let model = fit_line(&s).unwrap();
        let r2 = r_squared(&s, &model).unwrap();

        assert!(r2 <= 1.0);
        assert!(r2 > 0.9); // near-linear data scores high
    }

    #[test]
    fn bad_model_can_score_negative() {
        let s = series(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        let wrong = LinearModel {
            slope: -5.0,
            intercept: 100.0,
        };

        assert!(r_squared(&s, &wrong).unwrap() < 0.0);
    }

    #[test]
    fn constant_y_is_degenerate() {
        let s = series(&[(1.0, 5.0), (2.0, 5.0), (3.0, 5.0)]);
        let model = LinearModel {
            slope: 0.0,
            intercept: 5.0,
        };

        assert_eq!(r_squared(&s, &model), Err(FitError::DegenerateY));
    }

    #[test]
    fn empty_series_is_rejected() {
        let model = LinearModel {
            slope: 1.0,
            intercept: 0.0,
        };
        assert_eq!(
            r_squared(&ObservationSeries::default(), &model),
            Err(FitError::EmptySeries)
        );
    }
}
