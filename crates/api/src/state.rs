use std::sync::Arc;

use condmon_core::thresholds::ThresholdTable;
use condmon_store::ReadingStore;

use crate::config::ServerConfig;

/// Handed to every handler through `State<AppState>`; clones share the
/// config and threshold table.
#[derive(Clone)]
pub struct AppState {
    /// Reading file handle. Blocking; use through `spawn_blocking`.
    pub store: ReadingStore,
    pub config: Arc<ServerConfig>,
    /// Per-equipment limits used by the deviation report.
    pub thresholds: Arc<ThresholdTable>,
}
