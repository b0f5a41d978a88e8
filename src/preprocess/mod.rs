//! Feature preprocessing
//!
//! Two independent branches, numeric (mean-impute + standardize) and
//! categorical (mode-impute + one-hot + uncentered scale), composed by a
//! column-grouped transformer. Fit once on the training partition, applied
//! identically everywhere else.

mod categorical;
mod numeric;
mod transformer;

pub use categorical::{CategoricalPipeline, CategoryVocabulary, Encoding};
pub use numeric::{NumericPipeline, NumericStats};
pub use transformer::{FittedPreprocessor, PreprocessorSpec};
