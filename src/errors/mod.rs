// src/errors/mod.rs

//! Error types for the console driver
//!
//! Geometry mistakes (off-grid coordinates, oversized rectangles, excessive
//! scroll counts) are not errors: they are clipped or dropped silently by the
//! console. The only fallible operation is binding a console to a borrowed
//! slice, which must be large enough for the requested grid, and installing
//! the process-wide console, which may only happen once.

use core::fmt;

/// Errors returned when a console cannot be bound to a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleError {
    /// The backing slice holds fewer cells than `width * height`.
    BufferTooSmall {
        /// Cells needed for the requested geometry
        required: usize,
        /// Cells actually supplied
        actual: usize,
    },
    /// `width * height` does not fit in `usize`.
    GeometryOverflow,
    /// A process-wide console is already installed.
    AlreadyInitialized,
}

impl ConsoleError {
    /// Convert the error into a human-readable static message.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BufferTooSmall { .. } => "buffer too small",
            Self::GeometryOverflow => "geometry overflow",
            Self::AlreadyInitialized => "already initialized",
        }
    }
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall { required, actual } => write!(
                f,
                "{}: {} cells required, {} supplied",
                self.as_str(),
                required,
                actual
            ),
            Self::GeometryOverflow | Self::AlreadyInitialized => f.write_str(self.as_str()),
        }
    }
}

impl core::error::Error for ConsoleError {}

/// Helper trait for error context
pub trait ErrorContext {
    /// Get a detailed description of the error
    fn context(&self) -> &'static str;
}

impl ErrorContext for ConsoleError {
    fn context(&self) -> &'static str {
        match self {
            Self::BufferTooSmall { .. } => "Backing buffer cannot hold the requested cell grid",
            Self::GeometryOverflow => "Grid dimensions exceed the addressable cell count",
            Self::AlreadyInitialized => "The global console cannot be installed twice",
        }
    }
}

/// Result type alias for console binding
pub type Result<T> = core::result::Result<T, ConsoleError>;
