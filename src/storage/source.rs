//! Record sources
//!
//! A `RecordSource` hands out validated records for one collection at a time.
//! `JsonDirSource` reads API responses saved as JSON files, one file per
//! endpoint, in the exact shape the API returns them.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::file_io::read_json;
use crate::error::{FinboardError, FinboardResult};
use crate::models::wire::{WireBudget, WireExpense, WireGoal, WireIncome, WireReport};
use crate::models::{Budget, Expense, Goal, Income, Report};

/// The record collections served by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Expenses,
    Incomes,
    Budgets,
    Goals,
    Reports,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Expenses => "expenses",
            Self::Incomes => "incomes",
            Self::Budgets => "budgets",
            Self::Goals => "goals",
            Self::Reports => "reports",
        }
    }

    /// File name used by [`JsonDirSource`]
    pub fn file_name(&self) -> String {
        format!("{}.json", self.name())
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Something that can produce each record collection independently
pub trait RecordSource: Sync {
    fn expenses(&self) -> FinboardResult<Vec<Expense>>;
    fn incomes(&self) -> FinboardResult<Vec<Income>>;
    fn budgets(&self) -> FinboardResult<Vec<Budget>>;
    fn goals(&self) -> FinboardResult<Vec<Goal>>;
    fn reports(&self) -> FinboardResult<Vec<Report>>;
}

/// Reads `expenses.json`, `incomes.json`, ... from a directory.
///
/// A missing file is an empty collection. A malformed file, or any record in
/// it that fails validation, fails the whole collection.
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, collection: Collection) -> PathBuf {
        self.dir.join(collection.file_name())
    }

    fn read<W, T>(&self, collection: Collection) -> FinboardResult<Vec<T>>
    where
        W: DeserializeOwned,
        T: TryFrom<W, Error = FinboardError>,
    {
        let path = self.path_for(collection);
        let wire: Vec<W> = read_json(&path)?;
        tracing::debug!(%collection, count = wire.len(), path = %path.display(), "read records");

        wire.into_iter()
            .enumerate()
            .map(|(index, record)| {
                T::try_from(record).map_err(|e| {
                    FinboardError::Validation(format!("{} record #{}: {}", collection, index, e))
                })
            })
            .collect()
    }
}

impl RecordSource for JsonDirSource {
    fn expenses(&self) -> FinboardResult<Vec<Expense>> {
        self.read::<WireExpense, _>(Collection::Expenses)
    }

    fn incomes(&self) -> FinboardResult<Vec<Income>> {
        self.read::<WireIncome, _>(Collection::Incomes)
    }

    fn budgets(&self) -> FinboardResult<Vec<Budget>> {
        self.read::<WireBudget, _>(Collection::Budgets)
    }

    fn goals(&self) -> FinboardResult<Vec<Goal>> {
        self.read::<WireGoal, _>(Collection::Goals)
    }

    fn reports(&self) -> FinboardResult<Vec<Report>> {
        self.read::<WireReport, _>(Collection::Reports)
    }
}
