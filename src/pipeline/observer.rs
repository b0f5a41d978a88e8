//! Observability hooks for pipeline runs
//!
//! The orchestrator reports stage transitions and scalar metrics through an
//! injected observer instead of logging directly, so tests can capture the
//! run with a recording fake.

use super::train::TrainReport;

/// Trait for pipeline run observers
///
/// All methods have default no-op implementations; implement only the events
/// you care about.
///
/// # Example
///
/// ```
/// use calificar::pipeline::PipelineObserver;
///
/// struct StageLogger;
///
/// impl PipelineObserver for StageLogger {
///     fn on_stage(&mut self, stage: &'static str) {
///         println!("entering stage: {stage}");
///     }
/// }
/// ```
pub trait PipelineObserver {
    /// Called when the pipeline enters a stage
    fn on_stage(&mut self, _stage: &'static str) {}

    /// Called for each scalar metric produced by the run
    fn on_metric(&mut self, _name: &str, _value: f64) {}

    /// Called once after both artifacts are written
    fn on_complete(&mut self, _report: &TrainReport) {}
}

/// Observer that prints progress to standard output
#[derive(Debug, Default)]
pub struct ConsoleObserver;

impl PipelineObserver for ConsoleObserver {
    fn on_stage(&mut self, stage: &'static str) {
        println!("[{stage}]");
    }

    fn on_metric(&mut self, name: &str, value: f64) {
        println!("  {name}: {value:.6}");
    }

    fn on_complete(&mut self, report: &TrainReport) {
        println!(
            "✓ Preprocessor and model saved: {} / {}",
            report.preprocessor_path.display(),
            report.model_path.display()
        );
    }
}

/// Observer that ignores everything
#[derive(Debug, Default)]
pub struct NullObserver;

impl PipelineObserver for NullObserver {}
