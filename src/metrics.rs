//! Regression evaluation metrics

use ndarray::Array1;

/// Trait for evaluation metrics
pub trait Metric {
    /// Compute the metric given predictions and targets
    fn compute(&self, predictions: &Array1<f64>, targets: &Array1<f64>) -> f64;

    /// Name of the metric
    fn name(&self) -> &str;

    /// Whether higher values are better (true) or lower (false)
    fn higher_is_better(&self) -> bool {
        true
    }
}

/// R² (coefficient of determination)
///
/// R² = 1 - SS_res / SS_tot
///
/// 1.0 is perfect prediction, 0.0 matches predicting the mean, and values
/// below zero mean the predictions are worse than the mean.
///
/// # Example
///
/// ```
/// use calificar::metrics::{Metric, R2Score};
/// use ndarray::array;
///
/// let pred = array![1.0, 2.0, 3.0];
/// let target = array![1.0, 2.0, 3.0];
/// assert_eq!(R2Score.compute(&pred, &target), 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct R2Score;

impl Metric for R2Score {
    fn compute(&self, predictions: &Array1<f64>, targets: &Array1<f64>) -> f64 {
        assert_eq!(
            predictions.len(),
            targets.len(),
            "predictions and targets must have same length"
        );

        if predictions.is_empty() {
            return 0.0;
        }

        let mean = targets.sum() / targets.len() as f64;

        let ss_res: f64 = predictions
            .iter()
            .zip(targets.iter())
            .map(|(p, t)| (t - p).powi(2))
            .sum();
        let ss_tot: f64 = targets.iter().map(|t| (t - mean).powi(2)).sum();

        if ss_tot == 0.0 {
            return if ss_res == 0.0 { 1.0 } else { 0.0 };
        }

        1.0 - ss_res / ss_tot
    }

    fn name(&self) -> &str {
        "R²"
    }
}

/// Mean absolute error
#[derive(Debug, Clone, Copy, Default)]
pub struct Mae;

impl Metric for Mae {
    fn compute(&self, predictions: &Array1<f64>, targets: &Array1<f64>) -> f64 {
        assert_eq!(predictions.len(), targets.len());

        if predictions.is_empty() {
            return 0.0;
        }

        predictions
            .iter()
            .zip(targets.iter())
            .map(|(p, t)| (p - t).abs())
            .sum::<f64>()
            / predictions.len() as f64
    }

    fn name(&self) -> &str {
        "MAE"
    }

    fn higher_is_better(&self) -> bool {
        false
    }
}

/// Root mean squared error
#[derive(Debug, Clone, Copy, Default)]
pub struct Rmse;

impl Metric for Rmse {
    fn compute(&self, predictions: &Array1<f64>, targets: &Array1<f64>) -> f64 {
        assert_eq!(predictions.len(), targets.len());

        if predictions.is_empty() {
            return 0.0;
        }

        let mse = predictions
            .iter()
            .zip(targets.iter())
            .map(|(p, t)| (p - t).powi(2))
            .sum::<f64>()
            / predictions.len() as f64;

        mse.sqrt()
    }

    fn name(&self) -> &str {
        "RMSE"
    }

    fn higher_is_better(&self) -> bool {
        false
    }
}
