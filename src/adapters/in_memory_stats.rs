//! In-memory stats repository for testing
//!
//! Stores records in a shared map keyed by path, avoiding file system I/O
//! entirely. Clones share the same underlying storage, so a test can keep
//! one handle while the session owns another.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use crate::{ports::StatsRepository, stats::SessionStats, Result};

/// In-memory repository for tests.
#[derive(Clone, Default)]
pub struct InMemoryStatsRepository {
    storage: Arc<Mutex<HashMap<PathBuf, SessionStats>>>,
}

impl InMemoryStatsRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently stored. Useful to verify saves occurred.
    pub fn count(&self) -> usize {
        self.storage.lock().unwrap().len()
    }

    /// Fetch a stored record directly, bypassing the port.
    pub fn stored(&self, path: &Path) -> Option<SessionStats> {
        self.storage.lock().unwrap().get(path).copied()
    }

    /// Pre-seed a record, as if a previous run had persisted it.
    pub fn seed(&self, path: &Path, stats: SessionStats) {
        self.storage.lock().unwrap().insert(path.to_path_buf(), stats);
    }
}

impl StatsRepository for InMemoryStatsRepository {
    fn load(&self, path: &Path) -> Result<SessionStats> {
        Ok(self
            .storage
            .lock()
            .unwrap()
            .get(path)
            .copied()
            .unwrap_or_default())
    }

    fn save(&self, stats: &SessionStats, path: &Path) -> Result<()> {
        self.storage
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), *stats);
        Ok(())
    }
}
