//! In-terminal chart backend
//!
//! Keeps the configs of the chart instances that are alive. The chart view
//! draws whichever was constructed last.

use std::collections::BTreeMap;

use tracing::warn;

use crate::presenter::{ChartBackend, ChartConfig, ChartHandle};

#[derive(Debug, Default)]
pub struct TuiChart {
    live: BTreeMap<ChartHandle, ChartConfig>,
    next: u64,
}

impl TuiChart {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently constructed chart still alive
    pub fn current(&self) -> Option<&ChartConfig> {
        self.live.values().next_back()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

impl ChartBackend for TuiChart {
    fn construct(&mut self, config: ChartConfig) -> ChartHandle {
        self.next += 1;
        let handle = ChartHandle(self.next);
        self.live.insert(handle, config);
        handle
    }

    fn destroy(&mut self, handle: ChartHandle) {
        if self.live.remove(&handle).is_none() {
            warn!(handle = handle.0, "destroying unknown chart");
        }
    }
}
