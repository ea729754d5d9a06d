// src/console/locked.rs

//! Interrupt-safe shared access to a console
//!
//! [`Console`] performs no locking of its own. When several execution
//! contexts (kernel threads, interrupt handlers) print to the same screen,
//! wrap it in a [`LockedConsole`] and go through [`LockedConsole::with`].
//!
//! # Deadlock Prevention
//!
//! On bare-metal x86_64 the lock is held with interrupts disabled, so an
//! interrupt handler can never spin on a lock its own CPU already holds.

use super::Console;
use crate::errors::{ConsoleError, Result};
use spin::{Mutex, Once};

/// Console behind a spin lock
#[derive(Debug)]
pub struct LockedConsole<'a> {
    inner: Mutex<Console<'a>>,
}

impl<'a> LockedConsole<'a> {
    pub const fn new(console: Console<'a>) -> Self {
        Self {
            inner: Mutex::new(console),
        }
    }

    /// Run `f` with exclusive access to the console.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Console<'a>) -> R,
    {
        without_interrupts(|| f(&mut self.inner.lock()))
    }

    /// Like [`with`](Self::with), but returns `None` instead of spinning
    /// when the lock is already held.
    pub fn try_with<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut Console<'a>) -> R,
    {
        without_interrupts(|| self.inner.try_lock().map(|mut console| f(&mut console)))
    }

    pub fn into_inner(self) -> Console<'a> {
        self.inner.into_inner()
    }
}

#[cfg(all(target_arch = "x86_64", target_os = "none"))]
use x86_64::instructions::interrupts::without_interrupts;

/// Hosted builds have no interrupt flag to manage.
#[cfg(not(all(target_arch = "x86_64", target_os = "none")))]
fn without_interrupts<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    f()
}

/// Process-wide console used by kernel logging
static GLOBAL: Once<LockedConsole<'static>> = Once::new();

/// Install the process-wide console.
///
/// # Errors
///
/// Returns [`ConsoleError::AlreadyInitialized`] if a console was installed
/// before; `console` is dropped in that case and the existing one is kept.
pub fn init_global(console: Console<'static>) -> Result<&'static LockedConsole<'static>> {
    let mut installed = false;
    let locked = GLOBAL.call_once(|| {
        installed = true;
        LockedConsole::new(console)
    });

    if installed {
        let (width, height) = locked.with(|console| console.dimensions());
        log::debug!("console: global {}x{} console installed", width, height);
        Ok(locked)
    } else {
        Err(ConsoleError::AlreadyInitialized)
    }
}

/// The process-wide console, if [`init_global`] has run
pub fn global() -> Option<&'static LockedConsole<'static>> {
    GLOBAL.get()
}
