// src/lib.rs
//! VGA text-mode console driver
//!
//! Bounds-safe clear, scroll and write primitives over a caller-owned,
//! memory-mapped cell buffer. The driver never allocates and never touches a
//! cell outside the grid it was bound to.
//!
//! # Examples
//!
//! ```
//! use vga_console::{Console, ScrollDirection, VgaColor};
//!
//! let mut cells = [0u16; 80 * 25];
//! let mut console = Console::new(80, 25, &mut cells).unwrap();
//!
//! console.clear_all();
//! console.write(b'!', VgaColor::Red, 0, 24);
//! console.scroll(ScrollDirection::Up, 1);
//! console.clear(0, 24, 80, 1);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod console;
pub mod errors;

pub use console::{
    CONSOLE_STATS, Cell, CellBuffer, ColorCode, Console, ConsoleStats, LockedConsole,
    ScrollDirection, StatsSnapshot, VgaColor, constants, global, init_global,
};
pub use errors::{ConsoleError, ErrorContext};
