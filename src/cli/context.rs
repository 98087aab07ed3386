//! Per-invocation context handed to every command

use chrono::NaiveDate;

use crate::config::{FinboardPaths, Settings};
use crate::error::FinboardResult;
use crate::storage::{JsonDirSource, Snapshot};

/// Paths, settings and the reference day for one run
#[derive(Debug, Clone)]
pub struct Context {
    pub paths: FinboardPaths,
    pub settings: Settings,
    /// The day all date-relative metrics are computed against
    pub today: NaiveDate,
}

impl Context {
    /// Load settings (creating the config file on first run)
    pub fn load(paths: FinboardPaths, today: NaiveDate) -> FinboardResult<Self> {
        paths.ensure_directories()?;
        let settings = Settings::load_or_create(&paths)?;
        Ok(Self {
            paths,
            settings,
            today,
        })
    }

    pub fn source(&self) -> JsonDirSource {
        JsonDirSource::new(self.paths.snapshot_dir())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::load(&self.source())
    }
}
