use crate::errors::PredictError;
use crate::models::RatingPoint;

/// Fit a line through the monthly averages and extrapolate one month ahead.
///
/// The regression feature of the i-th point is its position i, so the caller's
/// ordering is the timeline. Returns the modeled rating at index = len(series),
/// rounded to 2 decimal places.
pub fn predict_next_rating(series: &[RatingPoint]) -> Result<f64, PredictError> {
    let n = series.len();
    if n < 2 {
        return Err(PredictError::InsufficientData);
    }

    let n_f = n as f64;

    // Indices are 0..n-1, so their mean has a closed form.
    let mean_x = (n_f - 1.0) / 2.0;
    let mean_y = series.iter().map(|p| p.avg_rating).sum::<f64>() / n_f;

    let mut covariance = 0.0;
    let mut variance = 0.0;
    for (i, point) in series.iter().enumerate() {
        let dx = i as f64 - mean_x;
        covariance += dx * (point.avg_rating - mean_y);
        variance += dx * dx;
    }

    // variance > 0 whenever n >= 2, the indices are always distinct.
    let slope = covariance / variance;
    let intercept = mean_y - slope * mean_x;

    let predicted = slope * n_f + intercept;
    Ok(round_to_cents(predicted))
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
