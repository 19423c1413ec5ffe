//! Read-through cache of loaded source tables.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::Result;

use crate::csv_table::{CsvTable, IngestOptions, read_csv_table_with_options};

/// Session-wide read-through cache of loaded tables, keyed by file path.
///
/// The first access for a path loads the file; later accesses reuse the
/// loaded table. Entries are never invalidated within a session, so a path
/// must always be requested with the same options.
#[derive(Debug, Default)]
pub struct TableCache {
    inner: Mutex<HashMap<PathBuf, Arc<CsvTable>>>,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached table for `path`, loading it on first access.
    pub fn get_or_load(&self, path: &Path, options: IngestOptions) -> Result<Arc<CsvTable>> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| anyhow::anyhow!("table cache lock poisoned"))?;
        if let Some(table) = inner.get(path) {
            tracing::debug!(path = %path.display(), "table cache hit");
            return Ok(Arc::clone(table));
        }
        let table = Arc::new(read_csv_table_with_options(path, options)?);
        inner.insert(path.to_path_buf(), Arc::clone(&table));
        Ok(table)
    }
}
