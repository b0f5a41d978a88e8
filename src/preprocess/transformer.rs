//! Column-grouped preprocessing transformer
//!
//! `PreprocessorSpec` is the declarative, unfit transformation plan: which
//! columns feed the numeric branch and which feed the categorical branch.
//! Fitting it on the training partition produces a `FittedPreprocessor` that
//! applies training-derived statistics to any later data without refitting.

use super::categorical::CategoricalPipeline;
use super::numeric::NumericPipeline;
use crate::data::schema::{CATEGORICAL_COLUMNS, NUMERIC_FEATURES};
use crate::data::StudentRecord;
use crate::error::Result;
use ndarray::{s, Array2};
use serde::{Deserialize, Serialize};

/// Unfit, declarative preprocessing plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreprocessorSpec {
    numeric_columns: Vec<String>,
    categorical_columns: Vec<String>,
}

impl PreprocessorSpec {
    /// Plan with explicit column groups
    pub fn new(numeric_columns: Vec<String>, categorical_columns: Vec<String>) -> Self {
        Self {
            numeric_columns,
            categorical_columns,
        }
    }

    /// The fixed student-score feature plan: two numeric predictors, five
    /// categorical attributes
    pub fn student_features() -> Self {
        Self::new(
            NUMERIC_FEATURES.iter().map(|c| c.to_string()).collect(),
            CATEGORICAL_COLUMNS.iter().map(|c| c.to_string()).collect(),
        )
    }

    /// Fit both branches independently on the training partition
    pub fn fit(&self, records: &[StudentRecord]) -> Result<FittedPreprocessor> {
        let numeric_cols = self.gather_numeric(records)?;
        let categorical_cols = self.gather_categorical(records)?;

        Ok(FittedPreprocessor {
            spec: self.clone(),
            numeric: NumericPipeline::fit(&numeric_cols)?,
            categorical: CategoricalPipeline::fit(&categorical_cols)?,
        })
    }

    fn gather_numeric(&self, records: &[StudentRecord]) -> Result<Vec<(String, Vec<Option<f64>>)>> {
        self.numeric_columns
            .iter()
            .map(|column| {
                let values = records
                    .iter()
                    .map(|r| r.numeric_value(column))
                    .collect::<Result<Vec<_>>>()?;
                Ok((column.clone(), values))
            })
            .collect()
    }

    fn gather_categorical(
        &self,
        records: &[StudentRecord],
    ) -> Result<Vec<(String, Vec<Option<String>>)>> {
        self.categorical_columns
            .iter()
            .map(|column| {
                let values = records
                    .iter()
                    .map(|r| Ok(r.categorical_value(column)?.map(str::to_string)))
                    .collect::<Result<Vec<_>>>()?;
                Ok((column.clone(), values))
            })
            .collect()
    }
}

/// Fitted preprocessing transformer
///
/// Holds the full fit state (imputation values, scaling statistics, category
/// vocabularies) of both branches; serializable so it can be persisted and
/// reused independently of the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FittedPreprocessor {
    spec: PreprocessorSpec,
    numeric: NumericPipeline,
    categorical: CategoricalPipeline,
}

impl FittedPreprocessor {
    /// Transform records into the numeric feature space
    ///
    /// Output column order is stable: the numeric block first, then the
    /// categorical one-hot blocks.
    pub fn transform(&self, records: &[StudentRecord]) -> Result<Array2<f64>> {
        let numeric_cols = self.spec.gather_numeric(records)?;
        let categorical_cols = self.spec.gather_categorical(records)?;

        let numeric = self.numeric.transform(&numeric_cols)?;
        let categorical = self.categorical.transform(&categorical_cols)?;

        let rows = records.len();
        let mut out = Array2::zeros((rows, self.output_dim()));
        out.slice_mut(s![.., ..numeric.ncols()]).assign(&numeric);
        out.slice_mut(s![.., numeric.ncols()..]).assign(&categorical);

        Ok(out)
    }

    /// Total width of the transformed feature matrix
    pub fn output_dim(&self) -> usize {
        self.numeric.output_dim() + self.categorical.output_dim()
    }

    /// The plan this transformer was fit from
    pub fn spec(&self) -> &PreprocessorSpec {
        &self.spec
    }

    /// Fitted numeric branch
    pub fn numeric(&self) -> &NumericPipeline {
        &self.numeric
    }

    /// Fitted categorical branch
    pub fn categorical(&self) -> &CategoricalPipeline {
        &self.categorical
    }
}
