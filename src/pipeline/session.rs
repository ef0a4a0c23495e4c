//! Last-write-wins coordination for logically overlapping runs
//!
//! A new upload or grid-size change supersedes any run still in flight. Each
//! run draws a monotonically increasing token; only a commit carrying the
//! latest token replaces the retained grid, so stale results are discarded
//! deterministically.

use crate::grid::HexagramGrid;

/// Token identifying one processing run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunToken(u64);

/// Issues run tokens and retains the grid of the latest committed run
#[derive(Debug, Default)]
pub struct RunCoordinator {
    issued: u64,
    current: Option<HexagramGrid>,
}

impl RunCoordinator {
    /// Create a coordinator with no retained grid
    pub const fn new() -> Self {
        Self {
            issued: 0,
            current: None,
        }
    }

    /// Begin a run, superseding any token issued earlier
    pub const fn begin(&mut self) -> RunToken {
        self.issued += 1;
        RunToken(self.issued)
    }

    /// Commit a finished run's grid
    ///
    /// Returns `true` and retains the grid only if `token` is the latest
    /// issued; a stale run's result is dropped.
    pub fn commit(&mut self, token: RunToken, grid: HexagramGrid) -> bool {
        if token.0 == self.issued {
            self.current = Some(grid);
            true
        } else {
            false
        }
    }

    /// Grid of the latest committed run, if any
    pub const fn latest(&self) -> Option<&HexagramGrid> {
        self.current.as_ref()
    }

    /// Discard the retained grid without issuing a token
    pub fn reset(&mut self) {
        self.current = None;
    }
}
