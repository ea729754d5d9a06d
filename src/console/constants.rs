// src/console/constants.rs

//! Constants for VGA text buffer operations

use super::color::{ColorCode, VgaColor};

/// Legacy VGA text buffer physical memory address
pub const VGA_BUFFER_ADDR: usize = 0xb8000;

/// Legacy text mode dimensions
pub const VGA_WIDTH: u16 = 80;
pub const VGA_HEIGHT: u16 = 25;

/// Total number of cells in the legacy text buffer
pub const VGA_CELL_COUNT: usize = VGA_WIDTH as usize * VGA_HEIGHT as usize;

/// Character written by clear operations
pub const CLEAR_CHAR: u8 = b' ';

/// Attribute written by clear operations (light gray on black)
pub const CLEAR_COLOR: ColorCode = ColorCode::new(VgaColor::LightGray, VgaColor::Black);
