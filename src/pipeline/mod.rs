//! End-to-end training pipeline

mod observer;
mod train;

pub use observer::{ConsoleObserver, NullObserver, PipelineObserver};
pub use train::{TrainPipeline, TrainReport};
