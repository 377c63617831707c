//! Pipeline configuration.

use crate::{RgError, RgResult};

/// Tuning knobs for graph extraction.
///
/// Typically filled from command-line flags by the application crate and
/// passed to `RoadGraph::build`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphConfig {
    /// Stop the traversal once this many roads have been kept.  `None` keeps
    /// the whole reachable component.
    pub max_roads: Option<usize>,

    /// Emit a progress line every N kept roads.  Default: 10.
    pub progress_interval: usize,
}

impl GraphConfig {
    pub fn validate(&self) -> RgResult<()> {
        if self.progress_interval == 0 {
            return Err(RgError::Config("progress_interval must be at least 1".into()));
        }
        if self.max_roads == Some(0) {
            return Err(RgError::Config("max_roads must be at least 1 when set".into()));
        }
        Ok(())
    }

    /// `true` once `kept` roads reach the configured cap.
    #[inline]
    pub fn cap_reached(&self, kept: usize) -> bool {
        self.max_roads.is_some_and(|max| kept >= max)
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_roads: None,
            progress_interval: 10,
        }
    }
}
