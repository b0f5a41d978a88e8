//! Dataset schema: required columns and the feature/target layout
//!
//! The source table must carry exactly three numeric subject scores and five
//! categorical attributes. Two derived columns (`total_score`, `average`) are
//! computed after loading and are never part of the feature set.

/// Numeric subject-score columns required in the source table
pub const SCORE_COLUMNS: [&str; 3] = ["math_score", "reading_score", "writing_score"];

/// Categorical attribute columns required in the source table
pub const CATEGORICAL_COLUMNS: [&str; 5] = [
    "gender",
    "race_ethnicity",
    "parental_level_of_education",
    "lunch",
    "test_preparation_course",
];

/// Numeric columns used as model inputs (the target score is excluded)
pub const NUMERIC_FEATURES: [&str; 2] = ["reading_score", "writing_score"];

/// The subject score the model predicts
pub const TARGET_COLUMN: &str = "math_score";

/// Derived columns present in the table but excluded from features
pub const DERIVED_COLUMNS: [&str; 2] = ["total_score", "average"];

/// All columns the source table must provide
pub fn required_columns() -> Vec<&'static str> {
    SCORE_COLUMNS
        .iter()
        .chain(CATEGORICAL_COLUMNS.iter())
        .copied()
        .collect()
}
