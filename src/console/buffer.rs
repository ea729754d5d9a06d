// src/console/buffer.rs

//! Bounds-checked, volatile access to a caller-owned cell region
//!
//! [`CellBuffer`] is a non-owning view over `len` contiguous 16-bit cells.
//! Every access is checked against `len` before the pointer is touched, and
//! every load and store is volatile so that writes to memory-mapped display
//! hardware are neither elided nor merged.

use core::marker::PhantomData;
use core::ptr::NonNull;
use core::sync::atomic::{Ordering, compiler_fence};

/// Non-owning view of the display cells
#[derive(Debug)]
pub struct CellBuffer<'a> {
    ptr: NonNull<u16>,
    len: usize,
    _region: PhantomData<&'a mut [u16]>,
}

// SAFETY: a CellBuffer is an exclusive borrow of its region, like `&mut [u16]`.
unsafe impl Send for CellBuffer<'_> {}

impl<'a> CellBuffer<'a> {
    /// View a borrowed slice.
    pub fn from_slice(cells: &'a mut [u16]) -> Self {
        let len = cells.len();
        Self {
            ptr: NonNull::from(cells).cast(),
            len,
            _region: PhantomData,
        }
    }

    /// View `len` cells starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null, aligned for `u16`, and valid for volatile
    /// reads and writes of `len` cells for the whole of `'a`. Nothing else
    /// may access the region while the view exists.
    pub unsafe fn from_raw_parts(ptr: *mut u16, len: usize) -> Self {
        debug_assert!(!ptr.is_null(), "cell buffer address must not be null");
        Self {
            // SAFETY: non-null per the caller contract.
            ptr: unsafe { NonNull::new_unchecked(ptr) },
            len,
            _region: PhantomData,
        }
    }

    /// Number of addressable cells
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn read(&self, index: usize) -> Option<u16> {
        if index >= self.len {
            return None;
        }
        // SAFETY: index < len, and the region is valid for len cells.
        Some(unsafe { core::ptr::read_volatile(self.ptr.as_ptr().add(index)) })
    }

    /// Store `value` at `index`. Returns `false` and touches nothing when
    /// `index` is out of range.
    #[inline]
    pub fn write(&mut self, index: usize, value: u16) -> bool {
        if index >= self.len {
            return false;
        }
        // SAFETY: index < len, and the region is valid for len cells.
        unsafe { core::ptr::write_volatile(self.ptr.as_ptr().add(index), value) };
        true
    }

    /// Store `value` into `count` cells starting at `start`.
    ///
    /// The whole range is validated first; a range reaching past the end
    /// writes nothing.
    pub fn fill(&mut self, start: usize, count: usize, value: u16) -> bool {
        if !self.range_in_bounds(start, count) {
            return false;
        }
        let base = self.ptr.as_ptr();
        for offset in 0..count {
            // SAFETY: start + count <= len was checked above.
            unsafe { core::ptr::write_volatile(base.add(start + offset), value) };
        }
        true
    }

    /// Copy `count` cells from `src` to `dst`, memmove-style.
    ///
    /// Both ranges are validated first. When the ranges overlap the copy
    /// runs in the direction that reads every source cell before it is
    /// overwritten.
    pub fn copy_within(&mut self, src: usize, dst: usize, count: usize) -> bool {
        if !self.range_in_bounds(src, count) || !self.range_in_bounds(dst, count) {
            return false;
        }
        if count == 0 || src == dst {
            return true;
        }

        let base = self.ptr.as_ptr();
        let mut move_cell = |offset: usize| {
            // SAFETY: src + count and dst + count are both <= len.
            unsafe {
                let value = core::ptr::read_volatile(base.add(src + offset));
                core::ptr::write_volatile(base.add(dst + offset), value);
            }
        };

        if dst < src {
            (0..count).for_each(&mut move_cell);
        } else {
            (0..count).rev().for_each(&mut move_cell);
        }
        true
    }

    /// Keep the stores issued so far ordered before anything that follows.
    #[inline]
    pub fn fence(&self) {
        compiler_fence(Ordering::SeqCst);
    }

    #[inline]
    fn range_in_bounds(&self, start: usize, count: usize) -> bool {
        start.checked_add(count).is_some_and(|end| end <= self.len)
    }
}
