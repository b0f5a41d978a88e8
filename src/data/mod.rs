//! Dataset schema, typed records, and loading

mod loader;
mod record;
pub mod schema;

pub use loader::load_dataset;
pub use record::{RawRecord, StudentRecord};
