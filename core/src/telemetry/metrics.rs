use std::fmt;

/// Counters kept by a filter stage over its lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Points pulled from upstream.
    pub pulled: usize,
    /// Points handed downstream.
    pub accepted: usize,
    pub rejected_stationary: usize,
    pub rejected_too_fast: usize,
    /// Direction reversals detected in the lookback window.
    pub spikes: usize,
    /// Points discarded because of detected spikes.
    pub dropped: usize,
}

impl FilterStats {
    pub fn rejected(&self) -> usize {
        self.rejected_stationary + self.rejected_too_fast + self.dropped
    }
}

impl fmt::Display for FilterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pulled {}, accepted {}, stationary {}, too fast {}, spikes {} ({} points dropped)",
            self.pulled,
            self.accepted,
            self.rejected_stationary,
            self.rejected_too_fast,
            self.spikes,
            self.dropped
        )
    }
}
