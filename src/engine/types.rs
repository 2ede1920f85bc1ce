//! Engine types
//!
//! Configuration, lifecycle states, and run statistics for the pagination
//! engine.

use std::time::Duration;

/// Default interval between fetch cycles
pub const DEFAULT_CADENCE: Duration = Duration::from_secs(1);

/// Configuration for a pagination run
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Fixed interval between successive fetch attempts
    pub cadence: Duration,
    /// Whether cancellation may abort a fetch already in flight
    ///
    /// Off by default: the signal is then only observed between cycles, so a
    /// request already handed to the transport always runs to completion.
    pub abort_in_flight: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cadence: DEFAULT_CADENCE,
            abort_in_flight: false,
        }
    }
}

impl EngineConfig {
    /// Create a new engine config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fetch cadence
    #[must_use]
    pub fn with_cadence(mut self, cadence: Duration) -> Self {
        self.cadence = cadence;
        self
    }

    /// Allow cancellation to interrupt an in-flight fetch
    #[must_use]
    pub fn with_abort_in_flight(mut self, abort: bool) -> Self {
        self.abort_in_flight = abort;
        self
    }
}

/// Lifecycle state of a pagination run
///
/// `Stopped` is terminal; there is no transition back to `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Constructed, loop not yet started
    Idle,
    /// Fetch loop active
    Running,
    /// Terminal: exhaustion, error, or cancellation
    Stopped,
}

impl EngineState {
    /// Check if this state is terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stopped)
    }
}

/// Statistics from one pagination run
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineStats {
    /// Pages fetched and emitted
    pub pages_emitted: u64,
    /// Movies seen across all emitted pages
    pub movies_seen: u64,
}

impl EngineStats {
    /// Record an emitted page with its movie count
    pub fn add_page(&mut self, movies: usize) {
        self.pages_emitted += 1;
        self.movies_seen += movies as u64;
    }
}
