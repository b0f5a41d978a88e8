//! Training orchestrator
//!
//! Runs the whole pipeline in strict sequence: load, feature/label
//! separation, seeded split, fit-on-train-only preprocessing, model fit,
//! evaluation of both partitions, and persistence of the two fitted
//! artifacts.

use super::observer::{ConsoleObserver, NullObserver, PipelineObserver};
use crate::artifact::{save_artifact, SaveConfig};
use crate::config::PipelineConfig;
use crate::data::schema::TARGET_COLUMN;
use crate::data::{load_dataset, StudentRecord};
use crate::error::{Error, Result};
use crate::metrics::{Metric, R2Score};
use crate::model::LinearRegression;
use crate::preprocess::PreprocessorSpec;
use crate::split::{take, train_test_split};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Summary of a completed training run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainReport {
    /// R² on the training partition
    pub train_r2: f64,
    /// R² on the held-out partition
    pub test_r2: f64,
    /// Rows in the training partition
    pub train_rows: usize,
    /// Rows in the held-out partition
    pub test_rows: usize,
    /// Width of the transformed feature matrix
    pub feature_count: usize,
    /// Where the fitted preprocessor was written
    pub preprocessor_path: PathBuf,
    /// Where the fitted model was written
    pub model_path: PathBuf,
}

/// End-to-end training pipeline
///
/// # Example
///
/// ```no_run
/// use calificar::config::PipelineConfig;
/// use calificar::pipeline::TrainPipeline;
///
/// let report = TrainPipeline::new(PipelineConfig::default()).run().unwrap();
/// println!("test R²: {:.4}", report.test_r2);
/// ```
pub struct TrainPipeline {
    config: PipelineConfig,
    observer: Box<dyn PipelineObserver>,
}

impl TrainPipeline {
    /// Create a pipeline that reports progress to standard output
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            observer: Box::new(ConsoleObserver),
        }
    }

    /// Create a silent pipeline
    pub fn silent(config: PipelineConfig) -> Self {
        Self {
            config,
            observer: Box::new(NullObserver),
        }
    }

    /// Replace the observer collaborator
    pub fn with_observer(mut self, observer: Box<dyn PipelineObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Run the full pipeline and return the report
    pub fn run(&mut self) -> Result<TrainReport> {
        self.config.validate()?;

        self.observer.on_stage("load");
        let records = load_dataset(&self.config.data_path)?;

        self.observer.on_stage("split");
        let (train_idx, test_idx) =
            train_test_split(records.len(), self.config.test_fraction, self.config.seed)?;
        let train_records = take(&records, &train_idx);
        let test_records = take(&records, &test_idx);

        let y_train = label_vector(&train_records)?;
        let y_test = label_vector(&test_records)?;

        self.observer.on_stage("fit");
        // Transformer statistics come from training rows only; the held-out
        // partition is transformed with them, never refit.
        let preprocessor = PreprocessorSpec::student_features().fit(&train_records)?;
        let x_train = preprocessor.transform(&train_records)?;
        let x_test = preprocessor.transform(&test_records)?;

        let model = LinearRegression::fit(x_train.view(), y_train.view())?;

        self.observer.on_stage("evaluate");
        let train_pred = model.predict(x_train.view())?;
        let test_pred = model.predict(x_test.view())?;

        let train_r2 = R2Score.compute(&train_pred, &y_train);
        let test_r2 = R2Score.compute(&test_pred, &y_test);
        self.observer.on_metric("train_r2", train_r2);
        self.observer.on_metric("test_r2", test_r2);

        self.observer.on_stage("persist");
        let save_config = SaveConfig::new(self.config.format);
        let preprocessor_path = self.config.preprocessor_path();
        let model_path = self.config.model_path();
        // Two independent writes; one may succeed while the other fails, and
        // no cross-artifact atomicity is promised.
        save_artifact(&preprocessor, &preprocessor_path, &save_config)?;
        save_artifact(&model, &model_path, &save_config)?;

        let report = TrainReport {
            train_r2,
            test_r2,
            train_rows: train_records.len(),
            test_rows: test_records.len(),
            feature_count: preprocessor.output_dim(),
            preprocessor_path,
            model_path,
        };

        self.observer.on_complete(&report);
        Ok(report)
    }
}

/// Extract the label vector, failing fast on rows without a target value
fn label_vector(records: &[StudentRecord]) -> Result<Array1<f64>> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            r.math_score.ok_or_else(|| {
                Error::Fit(format!("row {i} is missing the target column {TARGET_COLUMN}"))
            })
        })
        .collect()
}
