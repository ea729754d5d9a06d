// src/console/stats.rs

//! Console operation counters
//!
//! Lock-free counters in the style of the kernel diagnostics block. They are
//! updated with relaxed ordering from every console and are only meant for
//! health reporting, never for synchronization.

use core::sync::atomic::{AtomicU64, Ordering};

/// Counters shared by every console in the process
pub static CONSOLE_STATS: ConsoleStats = ConsoleStats::new();

#[derive(Debug)]
pub struct ConsoleStats {
    cell_writes: AtomicU64,
    dropped_writes: AtomicU64,
    clears: AtomicU64,
    rejected_clears: AtomicU64,
    cells_cleared: AtomicU64,
    scrolls: AtomicU64,
    rows_moved: AtomicU64,
}

/// Point-in-time copy of [`ConsoleStats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub cell_writes: u64,
    pub dropped_writes: u64,
    pub clears: u64,
    pub rejected_clears: u64,
    pub cells_cleared: u64,
    pub scrolls: u64,
    pub rows_moved: u64,
}

impl ConsoleStats {
    pub const fn new() -> Self {
        Self {
            cell_writes: AtomicU64::new(0),
            dropped_writes: AtomicU64::new(0),
            clears: AtomicU64::new(0),
            rejected_clears: AtomicU64::new(0),
            cells_cleared: AtomicU64::new(0),
            scrolls: AtomicU64::new(0),
            rows_moved: AtomicU64::new(0),
        }
    }

    /// Record a single-cell write (stored or dropped)
    #[inline]
    pub fn record_write(&self, stored: bool) {
        if stored {
            self.cell_writes.fetch_add(1, Ordering::Relaxed);
        } else {
            self.dropped_writes.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a clear that touched `cells` cells
    #[inline]
    pub fn record_clear(&self, cells: u64) {
        self.clears.fetch_add(1, Ordering::Relaxed);
        self.cells_cleared.fetch_add(cells, Ordering::Relaxed);
    }

    /// Record a clear anchored outside the grid
    #[inline]
    pub fn record_rejected_clear(&self) {
        self.rejected_clears.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_scroll(&self, rows: u64) {
        self.scrolls.fetch_add(1, Ordering::Relaxed);
        self.rows_moved.fetch_add(rows, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            cell_writes: self.cell_writes.load(Ordering::Relaxed),
            dropped_writes: self.dropped_writes.load(Ordering::Relaxed),
            clears: self.clears.load(Ordering::Relaxed),
            rejected_clears: self.rejected_clears.load(Ordering::Relaxed),
            cells_cleared: self.cells_cleared.load(Ordering::Relaxed),
            scrolls: self.scrolls.load(Ordering::Relaxed),
            rows_moved: self.rows_moved.load(Ordering::Relaxed),
        }
    }
}

impl Default for ConsoleStats {
    fn default() -> Self {
        Self::new()
    }
}
