use crate::models::{Record, Table};
use crate::utils::StoreError;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Columns the login scan depends on. A data file without them is unusable
/// for authentication and is treated the same as a missing file.
const REQUIRED_COLUMNS: [&str; 2] = ["email", "password"];

/// Owns load/append access to the tabular record file shared by the
/// registration and login services.
///
/// Appends are full read-modify-write: the whole table is loaded, the new
/// row added, and the file rewritten. The mutex serializes appends within
/// one process; nothing guards against a second process racing on the same
/// file (last writer wins).
pub struct RecordStore {
    path: PathBuf,
    append_lock: Mutex<()>,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            append_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the table for authentication. Returns `None` when the file is
    /// missing, unreadable, or lacks the required columns; each case is
    /// logged and callers surface it as a service-unavailable condition.
    ///
    /// `email` and `password` cells are trimmed of surrounding whitespace so
    /// comparisons downstream are against clean values.
    pub fn load(&self) -> Option<Table> {
        if !self.path.exists() {
            log::error!(
                "❌ User data file '{}' not found. Ensure it exists.",
                self.path.display()
            );
            return None;
        }

        let mut table = match self.read_table() {
            Ok(table) => table,
            Err(e) => {
                log::error!("❌ Error reading data file '{}': {}", self.path.display(), e);
                return None;
            }
        };

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .filter(|col| table.column_index(col).is_none())
            .copied()
            .collect();
        if !missing.is_empty() {
            log::error!(
                "❌ '{}' is missing one or more required columns ({})",
                self.path.display(),
                missing.join(", ")
            );
            return None;
        }

        for col in REQUIRED_COLUMNS {
            if let Some(index) = table.column_index(col) {
                for row in &mut table.rows {
                    row[index] = row[index].trim().to_string();
                }
            }
        }

        Some(table)
    }

    /// Appends one record, creating the file with a header derived from the
    /// record's columns if it does not exist yet. Columns the record lacks
    /// become empty cells; columns the record introduces extend the header
    /// and backfill existing rows with empty cells.
    pub fn append(&self, record: &Record) -> Result<(), StoreError> {
        let _guard = self
            .append_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        // Raw read on purpose: appending must not rewrite stored cells with
        // trimmed copies.
        let mut table = if self.path.exists() {
            self.read_table()?
        } else {
            Table::default()
        };

        for column in record.columns() {
            if table.column_index(&column).is_none() {
                table.columns.push(column);
                for row in &mut table.rows {
                    row.push(String::new());
                }
            }
        }

        let row: Vec<String> = table
            .columns
            .iter()
            .map(|column| record.value(column).unwrap_or("").to_string())
            .collect();
        table.rows.push(row);

        self.write_table(&table)
    }

    fn read_table(&self) -> Result<Table, StoreError> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Table { columns, rows })
    }

    fn write_table(&self, table: &Table) -> Result<(), StoreError> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(&table.columns)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
