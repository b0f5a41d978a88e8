//! Numeric preprocessing branch: mean imputation + standardization

use crate::error::{Error, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Fitted statistics for one numeric column
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NumericStats {
    /// Column name
    pub column: String,
    /// Imputation value: mean of observed training values
    pub fill: f64,
    /// Centering offset: mean of the imputed training column
    pub center: f64,
    /// Scaling divisor: population standard deviation (1.0 when degenerate)
    pub scale: f64,
}

/// Fitted numeric sub-pipeline
///
/// Missing values are filled with the training mean, then each column is
/// standardized to zero mean and unit variance using training statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NumericPipeline {
    stats: Vec<NumericStats>,
}

impl NumericPipeline {
    /// Fit imputation and scaling statistics on training columns
    ///
    /// `columns` pairs each column name with its training values, aligned by
    /// row. A column with no observed value at all cannot be imputed and is
    /// an error.
    pub fn fit(columns: &[(String, Vec<Option<f64>>)]) -> Result<Self> {
        let mut stats = Vec::with_capacity(columns.len());

        for (name, values) in columns {
            let observed: Vec<f64> = values.iter().filter_map(|v| *v).collect();
            if observed.is_empty() {
                return Err(Error::Fit(format!(
                    "numeric column {name} has no observed values to impute from"
                )));
            }

            let fill = observed.iter().sum::<f64>() / observed.len() as f64;

            let imputed: Vec<f64> = values.iter().map(|v| v.unwrap_or(fill)).collect();
            let center = imputed.iter().sum::<f64>() / imputed.len() as f64;
            let variance =
                imputed.iter().map(|v| (v - center).powi(2)).sum::<f64>() / imputed.len() as f64;
            let std = variance.sqrt();
            let scale = if std == 0.0 { 1.0 } else { std };

            stats.push(NumericStats {
                column: name.clone(),
                fill,
                center,
                scale,
            });
        }

        Ok(Self { stats })
    }

    /// Apply training-derived statistics to columns, without refitting
    pub fn transform(&self, columns: &[(String, Vec<Option<f64>>)]) -> Result<Array2<f64>> {
        if columns.len() != self.stats.len() {
            return Err(Error::Preprocess(format!(
                "expected {} numeric columns, got {}",
                self.stats.len(),
                columns.len()
            )));
        }
        let rows = columns.first().map_or(0, |(_, v)| v.len());
        let mut out = Array2::zeros((rows, self.stats.len()));

        for (j, ((name, values), stats)) in columns.iter().zip(&self.stats).enumerate() {
            if name != &stats.column {
                return Err(Error::Preprocess(format!(
                    "numeric column order mismatch: expected {}, got {name}",
                    stats.column
                )));
            }
            for (i, value) in values.iter().enumerate() {
                let v = value.unwrap_or(stats.fill);
                out[[i, j]] = (v - stats.center) / stats.scale;
            }
        }

        Ok(out)
    }

    /// Number of output feature columns
    pub fn output_dim(&self) -> usize {
        self.stats.len()
    }

    /// Fitted per-column statistics
    pub fn stats(&self) -> &[NumericStats] {
        &self.stats
    }
}
