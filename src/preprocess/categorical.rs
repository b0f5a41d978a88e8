//! Categorical preprocessing branch: mode imputation, one-hot expansion,
//! and scaling without centering
//!
//! One-hot indicator columns are sparse and bounded in [0,1]; centering them
//! would destroy that structure, so this branch divides by the indicator
//! standard deviation only. Categories never seen during fitting encode as an
//! all-zero indicator block instead of failing.

use crate::error::{Error, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of encoding one categorical value against a fitted vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Value was seen during fitting; index into the sorted vocabulary
    Known(usize),
    /// Value was never seen during fitting; encodes as a zero block
    Unknown,
}

/// Fitted vocabulary and statistics for one categorical column
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryVocabulary {
    /// Column name
    pub column: String,
    /// Imputation value: most frequent training value (ties break toward the
    /// lexicographically smallest)
    pub fill: String,
    /// Sorted category vocabulary observed during fitting
    pub categories: Vec<String>,
    /// Per-indicator scaling divisors (population std, 1.0 when degenerate)
    pub scales: Vec<f64>,
}

impl CategoryVocabulary {
    /// Encode a value against this vocabulary
    pub fn encode(&self, value: &str) -> Encoding {
        match self.categories.binary_search_by(|c| c.as_str().cmp(value)) {
            Ok(index) => Encoding::Known(index),
            Err(_) => Encoding::Unknown,
        }
    }
}

/// Fitted categorical sub-pipeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoricalPipeline {
    vocabularies: Vec<CategoryVocabulary>,
}

impl CategoricalPipeline {
    /// Fit imputation values, vocabularies, and indicator scales on training
    /// columns
    pub fn fit(columns: &[(String, Vec<Option<String>>)]) -> Result<Self> {
        let mut vocabularies = Vec::with_capacity(columns.len());

        for (name, values) in columns {
            let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
            for value in values.iter().flatten() {
                *counts.entry(value.as_str()).or_insert(0) += 1;
            }
            if counts.is_empty() {
                return Err(Error::Fit(format!(
                    "categorical column {name} has no observed values to impute from"
                )));
            }

            // BTreeMap iterates in key order, so on a tie the smallest key wins
            let mut fill = "";
            let mut best = 0;
            for (&value, &count) in &counts {
                if count > best {
                    best = count;
                    fill = value;
                }
            }
            let fill = fill.to_string();

            let imputed: Vec<&str> = values
                .iter()
                .map(|v| v.as_deref().unwrap_or(fill.as_str()))
                .collect();

            let mut categories: Vec<String> =
                imputed.iter().map(|v| (*v).to_string()).collect();
            categories.sort();
            categories.dedup();

            let n = imputed.len() as f64;
            let scales = categories
                .iter()
                .map(|category| {
                    let hits = imputed
                        .iter()
                        .filter(|v| ***v == *category.as_str())
                        .count();
                    let p = hits as f64 / n;
                    let std = (p * (1.0 - p)).sqrt();
                    if std == 0.0 {
                        1.0
                    } else {
                        std
                    }
                })
                .collect();

            vocabularies.push(CategoryVocabulary {
                column: name.clone(),
                fill,
                categories,
                scales,
            });
        }

        Ok(Self { vocabularies })
    }

    /// Apply fitted imputation, encoding, and scaling to columns
    pub fn transform(&self, columns: &[(String, Vec<Option<String>>)]) -> Result<Array2<f64>> {
        if columns.len() != self.vocabularies.len() {
            return Err(Error::Preprocess(format!(
                "expected {} categorical columns, got {}",
                self.vocabularies.len(),
                columns.len()
            )));
        }
        let rows = columns.first().map_or(0, |(_, v)| v.len());
        let mut out = Array2::zeros((rows, self.output_dim()));

        let mut offset = 0;
        for ((name, values), vocab) in columns.iter().zip(&self.vocabularies) {
            if name != &vocab.column {
                return Err(Error::Preprocess(format!(
                    "categorical column order mismatch: expected {}, got {name}",
                    vocab.column
                )));
            }
            for (i, value) in values.iter().enumerate() {
                let v = value.as_deref().unwrap_or(vocab.fill.as_str());
                match vocab.encode(v) {
                    Encoding::Known(k) => out[[i, offset + k]] = 1.0 / vocab.scales[k],
                    Encoding::Unknown => {} // whole block stays zero
                }
            }
            offset += vocab.categories.len();
        }

        Ok(out)
    }

    /// Number of output feature columns across all one-hot blocks
    pub fn output_dim(&self) -> usize {
        self.vocabularies.iter().map(|v| v.categories.len()).sum()
    }

    /// Fitted per-column vocabularies
    pub fn vocabularies(&self) -> &[CategoryVocabulary] {
        &self.vocabularies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(name: &str, values: &[Option<&str>]) -> (String, Vec<Option<String>>) {
        (
            name.to_string(),
            values.iter().map(|v| v.map(str::to_string)).collect(),
        )
    }

    #[test]
    fn test_fit_sorted_vocabulary() {
        let columns = vec![col("lunch", &[Some("standard"), Some("free/reduced")])];
        let pipeline = CategoricalPipeline::fit(&columns).unwrap();

        assert_eq!(
            pipeline.vocabularies()[0].categories,
            vec!["free/reduced".to_string(), "standard".to_string()]
        );
    }

    #[test]
    fn test_mode_imputation() {
        let columns = vec![col(
            "lunch",
            &[Some("standard"), Some("standard"), Some("free/reduced"), None],
        )];
        let pipeline = CategoricalPipeline::fit(&columns).unwrap();
        assert_eq!(pipeline.vocabularies()[0].fill, "standard");
    }

    #[test]
    fn test_mode_tie_breaks_lexicographically() {
        let columns = vec![col("gender", &[Some("male"), Some("female")])];
        let pipeline = CategoricalPipeline::fit(&columns).unwrap();
        assert_eq!(pipeline.vocabularies()[0].fill, "female");
    }

    #[test]
    fn test_unseen_category_encodes_as_zero_block() {
        let columns = vec![col("gender", &[Some("female"), Some("male")])];
        let pipeline = CategoricalPipeline::fit(&columns).unwrap();

        assert_eq!(
            pipeline.vocabularies()[0].encode("other"),
            Encoding::Unknown
        );

        let test = vec![col("gender", &[Some("other")])];
        let out = pipeline.transform(&test).unwrap();
        assert!(out.row(0).iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_known_category_single_indicator() {
        let columns = vec![col("gender", &[Some("female"), Some("male")])];
        let pipeline = CategoricalPipeline::fit(&columns).unwrap();

        let test = vec![col("gender", &[Some("male")])];
        let out = pipeline.transform(&test).unwrap();

        // Exactly one nonzero entry, in the slot for "male" (sorted index 1)
        assert_eq!(out[[0, 0]], 0.0);
        assert!(out[[0, 1]] > 0.0);
    }

    #[test]
    fn test_indicator_scaling_uncentered() {
        // p = 0.5 for both categories: std = 0.5, so indicators scale to 2.0
        let columns = vec![col("gender", &[Some("female"), Some("male")])];
        let pipeline = CategoricalPipeline::fit(&columns).unwrap();

        let out = pipeline.transform(&columns).unwrap();
        assert!((out[[0, 0]] - 2.0).abs() < 1e-12);
        assert!((out[[1, 1]] - 2.0).abs() < 1e-12);
        // Never negative: no centering applied
        assert!(out.iter().all(|v| *v >= 0.0));
    }

    #[test]
    fn test_constant_column_unit_scale() {
        let columns = vec![col("lunch", &[Some("standard"), Some("standard")])];
        let pipeline = CategoricalPipeline::fit(&columns).unwrap();
        assert_eq!(pipeline.vocabularies()[0].scales, vec![1.0]);
    }

    #[test]
    fn test_missing_values_imputed_before_encoding() {
        let columns = vec![col("lunch", &[Some("standard"), Some("standard"), None])];
        let pipeline = CategoricalPipeline::fit(&columns).unwrap();

        let test = vec![col("lunch", &[None])];
        let out = pipeline.transform(&test).unwrap();
        // Imputed to "standard", which is a known category
        assert!(out[[0, 0]] > 0.0);
    }

    #[test]
    fn test_fit_all_missing_fails() {
        let columns = vec![col("lunch", &[None, None])];
        let err = CategoricalPipeline::fit(&columns).unwrap_err();
        assert!(matches!(err, Error::Fit(_)));
    }

    #[test]
    fn test_fit_is_deterministic() {
        let columns = vec![
            col("gender", &[Some("female"), Some("male"), None]),
            col("lunch", &[Some("standard"), Some("free/reduced"), Some("standard")]),
        ];
        let a = CategoricalPipeline::fit(&columns).unwrap();
        let b = CategoricalPipeline::fit(&columns).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_output_dim_sums_blocks() {
        let columns = vec![
            col("gender", &[Some("female"), Some("male")]),
            col("lunch", &[Some("standard"), Some("free/reduced")]),
        ];
        let pipeline = CategoricalPipeline::fit(&columns).unwrap();
        assert_eq!(pipeline.output_dim(), 4);
    }
}
