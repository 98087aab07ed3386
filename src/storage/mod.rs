//! Snapshot storage
//!
//! Loads record snapshots from a [`RecordSource`]. The default source reads
//! API responses saved as JSON files in the snapshot directory.

pub mod file_io;
pub mod snapshot;
pub mod source;

pub use snapshot::{load_reports, Snapshot};
pub use source::{Collection, JsonDirSource, RecordSource};
