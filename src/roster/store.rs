use std::{
    path::{Path, PathBuf},
    sync::{
        Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use crate::foundation::error::{PassError, PassResult};

/// One roster row as ordered cell text.
pub type Row = Vec<String>;

/// 1-based row address in the backing store (row 1 is the first stored row).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct RowLocation(pub u32);

/// 0-based column address in the backing store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct ColumnIndex(pub usize);

impl ColumnIndex {
    /// Spreadsheet column letters: `0 -> A`, `25 -> Z`, `26 -> AA`.
    pub fn letters(self) -> String {
        let mut n = self.0 + 1;
        let mut out = Vec::new();
        while n > 0 {
            let rem = (n - 1) % 26;
            out.push(b'A' + rem as u8);
            n = (n - 1) / 26;
        }
        out.reverse();
        String::from_utf8_lossy(&out).into_owned()
    }
}

/// A1-style reference (`C2`) for sheet-like backends.
pub fn a1_cell_ref(row: RowLocation, col: ColumnIndex) -> String {
    format!("{}{}", col.letters(), row.0)
}

/// Tabular backing store for the roster.
///
/// No transactional guarantees: concurrent writers race and the last write wins.
pub trait RosterStore: Send + Sync {
    /// Read every stored row, header included if the store has one.
    fn read_all_rows(&self) -> PassResult<Vec<Row>>;

    /// Overwrite a single cell.
    ///
    /// Writing past the end of a row extends it with empty cells. Addressing a row the store
    /// does not hold fails with [`PassError::InvalidLocation`].
    fn update_cell(&self, row: RowLocation, col: ColumnIndex, value: &str) -> PassResult<()>;
}

fn set_cell(rows: &mut [Row], row: RowLocation, col: ColumnIndex, value: &str) -> PassResult<()> {
    let len = rows.len();
    let idx = (row.0 as usize)
        .checked_sub(1)
        .filter(|&i| i < len)
        .ok_or_else(|| {
            PassError::invalid_location(format!("row {} outside 1..={len}", row.0))
        })?;
    let cells = &mut rows[idx];
    if cells.len() <= col.0 {
        cells.resize(col.0 + 1, String::new());
    }
    cells[col.0] = value.to_owned();
    Ok(())
}

/// In-memory roster used for tests and ephemeral runs.
///
/// Counts successful writes so callers can assert how many updates a flow issued.
#[derive(Debug, Default)]
pub struct MemoryRosterStore {
    rows: Mutex<Vec<Row>>,
    writes: AtomicUsize,
    offline: AtomicBool,
}

impl MemoryRosterStore {
    /// Store holding `rows` verbatim.
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows: Mutex::new(rows),
            writes: AtomicUsize::new(0),
            offline: AtomicBool::new(false),
        }
    }

    /// Convenience constructor from string literals.
    pub fn from_strs(rows: &[&[&str]]) -> Self {
        Self::new(
            rows.iter()
                .map(|r| r.iter().map(|c| (*c).to_owned()).collect())
                .collect(),
        )
    }

    /// Number of successful `update_cell` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Simulate an unreachable store: every call fails with `StoreUnavailable`.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Snapshot of the current rows.
    pub fn snapshot(&self) -> PassResult<Vec<Row>> {
        self.read_all_rows()
    }

    fn check_online(&self) -> PassResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(PassError::store_unavailable("memory roster is offline"));
        }
        Ok(())
    }
}

impl RosterStore for MemoryRosterStore {
    fn read_all_rows(&self) -> PassResult<Vec<Row>> {
        self.check_online()?;
        let rows = self
            .rows
            .lock()
            .map_err(|_| PassError::store_unavailable("roster lock poisoned"))?;
        Ok(rows.clone())
    }

    fn update_cell(&self, row: RowLocation, col: ColumnIndex, value: &str) -> PassResult<()> {
        self.check_online()?;
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| PassError::store_unavailable("roster lock poisoned"))?;
        set_cell(&mut rows, row, col, value)?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Roster kept in a CSV file. Every update rewrites the whole file.
#[derive(Clone, Debug)]
pub struct CsvRosterStore {
    path: PathBuf,
}

impl CsvRosterStore {
    /// Store backed by the CSV file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, what: &str, err: impl std::fmt::Display) -> PassError {
        PassError::store_unavailable(format!("{what} '{}': {err}", self.path.display()))
    }

    fn write_rows(&self, rows: &[Row]) -> PassResult<()> {
        let tmp = self.path.with_extension("csv.tmp");
        {
            let mut wtr = csv::WriterBuilder::new()
                .flexible(true)
                .from_path(&tmp)
                .map_err(|e| self.unavailable("open roster for writing", e))?;
            for row in rows {
                wtr.write_record(row)
                    .map_err(|e| self.unavailable("write roster row", e))?;
            }
            wtr.flush()
                .map_err(|e| self.unavailable("flush roster", e))?;
        }
        std::fs::rename(&tmp, &self.path).map_err(|e| self.unavailable("replace roster", e))
    }
}

impl RosterStore for CsvRosterStore {
    fn read_all_rows(&self) -> PassResult<Vec<Row>> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| self.unavailable("open roster", e))?;

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record.map_err(|e| self.unavailable("read roster", e))?;
            rows.push(record.iter().map(str::to_owned).collect());
        }
        Ok(rows)
    }

    fn update_cell(&self, row: RowLocation, col: ColumnIndex, value: &str) -> PassResult<()> {
        let mut rows = self.read_all_rows()?;
        set_cell(&mut rows, row, col, value)?;
        self.write_rows(&rows)?;
        tracing::debug!(
            cell = %a1_cell_ref(row, col),
            path = %self.path.display(),
            "roster cell updated"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/roster/store.rs"]
mod tests;
