//! History log entries.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use crate::store::value::ConfigMap;

/// Tag attached to history entries produced by something other than a plain update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryAction {
    Reset,
}

/// The configuration as it stood immediately before a mutating operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// When the operation ran.
    pub timestamp: SystemTime,

    /// Owned copy of the pre-operation configuration.
    pub config: ConfigMap,

    /// `Some(Reset)` for resets, absent for plain updates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<HistoryAction>,
}

impl HistoryEntry {
    /// Entry recorded ahead of an update.
    pub fn update(snapshot: ConfigMap) -> Self {
        Self {
            timestamp: SystemTime::now(),
            config: snapshot,
            action: None,
        }
    }

    /// Entry recorded ahead of a reset.
    pub fn reset(snapshot: ConfigMap) -> Self {
        Self {
            timestamp: SystemTime::now(),
            config: snapshot,
            action: Some(HistoryAction::Reset),
        }
    }

    pub fn is_reset(&self) -> bool {
        self.action == Some(HistoryAction::Reset)
    }
}
