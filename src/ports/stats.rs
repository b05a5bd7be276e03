//! Stats persistence port

use std::path::Path;

use crate::{stats::SessionStats, Result};

/// Port for persisting and loading the session score record.
///
/// The record is rewritten whole on every save; there is no schema
/// versioning and no append log. A single running instance is assumed;
/// concurrent writers against the same path are out of scope.
pub trait StatsRepository {
    /// Load the score record.
    ///
    /// A missing record yields the zeroed default; only an unreadable or
    /// corrupt record is an error.
    fn load(&self, path: &Path) -> Result<SessionStats>;

    /// Rewrite the full score record.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be written or serialization
    /// fails.
    fn save(&self, stats: &SessionStats, path: &Path) -> Result<()>;
}
