//! JSON file implementation of the stats repository
//!
//! The score record is a small pretty-printed JSON document, rewritten
//! whole on every save. A missing file loads as the zeroed default so a
//! fresh install starts counting from nothing.

use std::{fs::File, path::Path};

use crate::{error::Error, ports::StatsRepository, stats::SessionStats, Result};

/// JSON-file-backed stats repository.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonStatsRepository;

impl JsonStatsRepository {
    pub fn new() -> Self {
        Self
    }
}

impl StatsRepository for JsonStatsRepository {
    fn load(&self, path: &Path) -> Result<SessionStats> {
        if !path.exists() {
            return Ok(SessionStats::default());
        }

        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open stats file {path:?}"),
            source,
        })?;

        let stats = serde_json::from_reader(file)?;
        Ok(stats)
    }

    fn save(&self, stats: &SessionStats, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create stats file {path:?}"),
            source,
        })?;

        serde_json::to_writer_pretty(file, stats)?;
        Ok(())
    }
}
