// src/console/mod.rs

//! VGA text mode console
//!
//! A [`Console`] is a non-owning view over a grid of `width * height` 16-bit
//! cells, usually the memory-mapped text buffer at `0xB8000`. It provides the
//! primitives a terminal or kernel logger builds on:
//! - [`Console::clear`]: fill a clipped rectangle with the clear pattern
//! - [`Console::scroll`]: shift whole rows up or down
//! - [`Console::write`]: store one character cell
//!
//! # Safety and Robustness
//!
//! Caller coordinates are never trusted. Rectangles anchored inside the grid
//! are truncated at its edges, anything anchored outside is dropped, and
//! every store goes through a bounds-checked [`CellBuffer`]. None of the
//! drawing operations can fail or panic.
//!
//! # Concurrency
//!
//! A console takes `&mut self` for every mutation and performs no locking.
//! Share one between execution contexts through [`LockedConsole`].

mod buffer;
mod color;
pub mod constants;
mod locked;
mod stats;

pub use buffer::CellBuffer;
pub use color::{Cell, ColorCode, VgaColor};
pub use locked::{LockedConsole, global, init_global};
pub use stats::{CONSOLE_STATS, ConsoleStats, StatsSnapshot};

use crate::errors::{ConsoleError, Result};
use constants::{VGA_BUFFER_ADDR, VGA_CELL_COUNT, VGA_HEIGHT, VGA_WIDTH};

/// Vertical scroll direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Content moves toward row 0
    Up,
    /// Content moves toward the last row
    Down,
}

/// Text-mode console bound to a caller-owned cell buffer
#[derive(Debug)]
pub struct Console<'a> {
    width: u16,
    height: u16,
    buffer: CellBuffer<'a>,
}

impl<'a> Console<'a> {
    /// Bind a console to `width * height` cells at `addr`.
    ///
    /// The address is not validated.
    ///
    /// # Safety
    ///
    /// `addr` must be non-null, aligned for `u16`, and valid for volatile
    /// reads and writes of `width * height` cells for the whole of `'a`.
    /// Nothing else may access the region while the console exists.
    pub unsafe fn from_raw_parts(width: u16, height: u16, addr: *mut u16) -> Self {
        let cells = width as usize * height as usize;
        log::debug!("console: binding {}x{} grid at {:p}", width, height, addr);
        Self {
            width,
            height,
            // SAFETY: forwarded caller contract.
            buffer: unsafe { CellBuffer::from_raw_parts(addr, cells) },
        }
    }

    /// Bind a console to a borrowed slice.
    ///
    /// Cells beyond `width * height` are never touched.
    ///
    /// # Errors
    ///
    /// - [`ConsoleError::GeometryOverflow`] if `width * height` overflows
    /// - [`ConsoleError::BufferTooSmall`] if `cells` is shorter than the grid
    pub fn new(width: u16, height: u16, cells: &'a mut [u16]) -> Result<Self> {
        let required = (width as usize)
            .checked_mul(height as usize)
            .ok_or(ConsoleError::GeometryOverflow)?;
        if cells.len() < required {
            return Err(ConsoleError::BufferTooSmall {
                required,
                actual: cells.len(),
            });
        }

        log::debug!(
            "console: binding {}x{} grid to {}-cell slice",
            width,
            height,
            cells.len()
        );
        Ok(Self {
            width,
            height,
            buffer: CellBuffer::from_slice(&mut cells[..required]),
        })
    }

    /// Grid size as `(width, height)`
    #[inline]
    pub const fn dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Fill the rectangle `[x, x+w) × [y, y+h)` with [`Cell::BLANK`].
    ///
    /// A rectangle anchored outside the grid (`x >= width` or
    /// `y >= height`) is ignored. Otherwise it is truncated at the right and
    /// bottom edges.
    pub fn clear(&mut self, x: u16, y: u16, w: u16, h: u16) {
        if x >= self.width || y >= self.height {
            CONSOLE_STATS.record_rejected_clear();
            return;
        }

        let w = w.min(self.width - x);
        let h = h.min(self.height - y);
        let blank = Cell::BLANK.raw();

        for row in y..y + h {
            let start = self.index_unchecked(x, row);
            let filled = self.buffer.fill(start, w as usize, blank);
            debug_assert!(filled, "clipped row {row} escaped the grid");
        }
        self.buffer.fence();

        CONSOLE_STATS.record_clear(w as u64 * h as u64);
    }

    /// Clear the whole grid
    pub fn clear_all(&mut self) {
        self.clear(0, 0, self.width, self.height);
    }

    /// Shift the grid content by `lines` rows.
    ///
    /// Vacated rows keep whatever they held before; clear them explicitly if
    /// needed. `lines == 0` and `lines >= height` leave the buffer untouched.
    pub fn scroll(&mut self, direction: ScrollDirection, lines: u16) {
        if lines == 0 || lines >= self.height {
            return;
        }

        let kept = self.height - lines;
        match direction {
            // Top to bottom: row `dst + lines` is read before anything
            // below it is overwritten.
            ScrollDirection::Up => {
                for dst in 0..kept {
                    self.move_row(dst + lines, dst);
                }
            }
            // Bottom to top, mirrored.
            ScrollDirection::Down => {
                for dst in (lines..self.height).rev() {
                    self.move_row(dst - lines, dst);
                }
            }
        }
        self.buffer.fence();

        CONSOLE_STATS.record_scroll(kept as u64);
    }

    /// Store `character` with `attribute` at `(x, y)`.
    ///
    /// Off-grid positions are dropped, never wrapped or clamped.
    pub fn write(&mut self, character: u8, attribute: impl Into<ColorCode>, x: u16, y: u16) {
        self.write_cell(Cell::new(character, attribute.into()), x, y);
    }

    /// Store a pre-encoded cell at `(x, y)`.
    pub fn write_cell(&mut self, cell: Cell, x: u16, y: u16) {
        let stored = match self.index(x, y) {
            Some(index) => {
                let stored = self.buffer.write(index, cell.raw());
                self.buffer.fence();
                stored
            }
            None => false,
        };
        CONSOLE_STATS.record_write(stored);
    }

    /// Read the cell at `(x, y)`, or `None` when off-grid
    pub fn read(&self, x: u16, y: u16) -> Option<Cell> {
        self.index(x, y)
            .and_then(|index| self.buffer.read(index))
            .map(Cell::from_raw)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.index_unchecked(x, y))
    }

    /// Linear index of `(x, y)`; callers have already bounded both.
    #[inline]
    const fn index_unchecked(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn move_row(&mut self, src: u16, dst: u16) {
        let width = self.width as usize;
        let src = self.index_unchecked(0, src);
        let dst = self.index_unchecked(0, dst);
        let moved = self.buffer.copy_within(src, dst, width);
        debug_assert!(moved, "row move {src} -> {dst} escaped the grid");
    }
}

impl Console<'static> {
    /// Bind the legacy 80x25 text buffer at `0xB8000`.
    ///
    /// # Safety
    ///
    /// The VGA text buffer must be identity-mapped and writable, and no
    /// other console may be bound to it.
    pub unsafe fn vga_text_mode() -> Self {
        debug_assert_eq!(VGA_CELL_COUNT, VGA_WIDTH as usize * VGA_HEIGHT as usize);
        // SAFETY: forwarded caller contract.
        unsafe { Self::from_raw_parts(VGA_WIDTH, VGA_HEIGHT, VGA_BUFFER_ADDR as *mut u16) }
    }
}
