//! Typed dataset rows with derived score columns

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A raw row as it appears in the source table
///
/// All fields are optional: empty cells deserialize as `None` and are handled
/// by imputation later in the pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub gender: Option<String>,
    pub race_ethnicity: Option<String>,
    pub parental_level_of_education: Option<String>,
    pub lunch: Option<String>,
    pub test_preparation_course: Option<String>,
    pub math_score: Option<f64>,
    pub reading_score: Option<f64>,
    pub writing_score: Option<f64>,
}

/// One row of the engineered table
///
/// `total_score` and `average` are always recomputed from the three subject
/// scores; they are `None` whenever any component score is missing. They are
/// carried in the table but excluded from the model's feature set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentRecord {
    pub gender: Option<String>,
    pub race_ethnicity: Option<String>,
    pub parental_level_of_education: Option<String>,
    pub lunch: Option<String>,
    pub test_preparation_course: Option<String>,
    pub math_score: Option<f64>,
    pub reading_score: Option<f64>,
    pub writing_score: Option<f64>,
    pub total_score: Option<f64>,
    pub average: Option<f64>,
}

impl StudentRecord {
    /// Build an engineered record from a raw row, deriving the composite score
    pub fn from_raw(raw: RawRecord) -> Self {
        let total_score = match (raw.math_score, raw.reading_score, raw.writing_score) {
            (Some(m), Some(r), Some(w)) => Some(m + r + w),
            _ => None,
        };
        let average = total_score.map(|t| t / 3.0);

        Self {
            gender: raw.gender,
            race_ethnicity: raw.race_ethnicity,
            parental_level_of_education: raw.parental_level_of_education,
            lunch: raw.lunch,
            test_preparation_course: raw.test_preparation_course,
            math_score: raw.math_score,
            reading_score: raw.reading_score,
            writing_score: raw.writing_score,
            total_score,
            average,
        }
    }

    /// Look up a numeric feature column by name
    ///
    /// Only the two numeric predictor columns are reachable here; the target
    /// and derived columns are deliberately not addressable as features.
    pub fn numeric_value(&self, column: &str) -> Result<Option<f64>> {
        match column {
            "reading_score" => Ok(self.reading_score),
            "writing_score" => Ok(self.writing_score),
            other => Err(Error::Preprocess(format!(
                "unknown numeric feature column: {other}"
            ))),
        }
    }

    /// Look up a categorical feature column by name
    pub fn categorical_value(&self, column: &str) -> Result<Option<&str>> {
        let value = match column {
            "gender" => &self.gender,
            "race_ethnicity" => &self.race_ethnicity,
            "parental_level_of_education" => &self.parental_level_of_education,
            "lunch" => &self.lunch,
            "test_preparation_course" => &self.test_preparation_course,
            other => {
                return Err(Error::Preprocess(format!(
                    "unknown categorical feature column: {other}"
                )))
            }
        };
        Ok(value.as_deref())
    }
}
