use core::ffi::{c_int, c_void};
use core::fmt;
use core::mem::{align_of, size_of};
use core::num::NonZeroUsize;
use core::ops::{Deref, DerefMut};
use core::ptr::{self, NonNull};
use core::slice::{from_raw_parts, from_raw_parts_mut};

use nix::sys::mman;
use static_assertions::const_assert;
use thiserror::Error;
use tracing::{debug, warn};

pub const PAGE_LEN: usize = 1 << 12;

/// Write back on retire.
///
/// Not part of mainline Linux: kernels patched for the non speculative page mitigation
/// change the cache write back behaviour of such a mapping, stock kernels ignore the bit.
pub const MAP_WB_ON_RETIRE: c_int = 0x200000;

const_assert!(PAGE_LEN.is_power_of_two());

#[derive(Debug, Error)]
pub enum MapError {
    #[error("cannot map an empty region")]
    Empty,
    #[error("alignment {0} is larger than a page")]
    Alignment(usize),
    #[error("{len} elements of {element} bytes overflow the address space")]
    TooLarge { len: usize, element: usize },
    #[error("mmap failed: {0}")]
    Map(#[source] nix::Error),
}

/// The bare mapping, unmapped on drop without looking at its contents.
struct Region {
    pointer: NonNull<c_void>,
    bytes: usize,
}

impl Drop for Region {
    fn drop(&mut self) {
        if let Err(e) = unsafe { mman::munmap(self.pointer, self.bytes) } {
            warn!("munmap of {} bytes failed: {}", self.bytes, e);
        }
    }
}

/// An anonymous private mapping holding `len` values of `T`.
///
/// The region is zeroed before the initializer runs and unmapped on drop.
pub struct MMappedMemory<T> {
    pointer: NonNull<T>,
    len: usize,
    wb_on_retire: bool,
    region: Region,
}

impl<T> MMappedMemory<T> {
    pub fn try_new(
        len: usize,
        wb_on_retire: bool,
        initializer: impl Fn(usize) -> T,
    ) -> Result<MMappedMemory<T>, MapError> {
        if align_of::<T>() > PAGE_LEN {
            return Err(MapError::Alignment(align_of::<T>()));
        }
        let bytes = len
            .checked_mul(size_of::<T>())
            .ok_or(MapError::TooLarge {
                len,
                element: size_of::<T>(),
            })?;
        let bytes = NonZeroUsize::new(bytes).ok_or(MapError::Empty)?;

        let mut flags = mman::MapFlags::MAP_PRIVATE | mman::MapFlags::MAP_ANONYMOUS;
        if wb_on_retire {
            flags |= mman::MapFlags::from_bits_retain(MAP_WB_ON_RETIRE);
        }
        let p = unsafe {
            mman::mmap_anonymous(
                None,
                bytes,
                mman::ProtFlags::PROT_READ | mman::ProtFlags::PROT_WRITE,
                flags,
            )
        }
        .map_err(MapError::Map)?;
        debug!(bytes = bytes.get(), wb_on_retire, "mapped region");

        // Unmapped by the region alone if the initializer panics.
        let region = Region {
            pointer: p,
            bytes: bytes.get(),
        };
        let pointer = p.cast::<T>();
        // Touch every byte so the pages are resident before anything is timed.
        unsafe { ptr::write_bytes(pointer.as_ptr() as *mut u8, 0, bytes.get()) };
        for i in 0..len {
            unsafe { pointer.as_ptr().add(i).write(initializer(i)) };
        }
        Ok(MMappedMemory {
            pointer,
            len,
            wb_on_retire,
            region,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn wb_on_retire(&self) -> bool {
        self.wb_on_retire
    }

    /// Start of the mapping. Stays valid for as long as `self` lives, moves included.
    pub fn as_non_null(&self) -> NonNull<T> {
        self.pointer
    }

    pub fn slice(&self) -> &[T] {
        unsafe { from_raw_parts(self.pointer.as_ptr(), self.len) }
    }

    pub fn slice_mut(&mut self) -> &mut [T] {
        unsafe { from_raw_parts_mut(self.pointer.as_ptr(), self.len) }
    }
}

impl<T> Drop for MMappedMemory<T> {
    fn drop(&mut self) {
        // The region field unmaps right after this.
        unsafe { ptr::drop_in_place(self.slice_mut() as *mut [T]) };
    }
}

impl<T> Deref for MMappedMemory<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.slice()
    }
}

impl<T> DerefMut for MMappedMemory<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.slice_mut()
    }
}

impl<T> fmt::Debug for MMappedMemory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MMappedMemory")
            .field("pointer", &self.pointer)
            .field("len", &self.len)
            .field("wb_on_retire", &self.wb_on_retire)
            .field("bytes", &self.region.bytes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_is_zeroed() {
        let m = MMappedMemory::<u8>::try_new(PAGE_LEN, false, |_| 0).unwrap();
        assert_eq!(m.len(), PAGE_LEN);
        assert!(m.iter().all(|&b| b == 0));
    }

    #[test]
    fn initializer_runs_per_element() {
        let m = MMappedMemory::<u32>::try_new(1024, false, |i| i as u32 * 3).unwrap();
        for (i, v) in m.iter().enumerate() {
            assert_eq!(*v, i as u32 * 3);
        }
    }

    #[test]
    fn region_is_writable() {
        let mut m = MMappedMemory::<u8>::try_new(PAGE_LEN, false, |_| 0).unwrap();
        m[0] = 0xaa;
        m[PAGE_LEN - 1] = 0x55;
        assert_eq!(m.slice()[0], 0xaa);
        assert_eq!(m.slice()[PAGE_LEN - 1], 0x55);
    }

    #[test]
    fn empty_region_is_rejected() {
        assert!(matches!(
            MMappedMemory::<u8>::try_new(0, false, |_| 0),
            Err(MapError::Empty)
        ));
    }

    #[test]
    fn oversized_region_is_rejected() {
        let calls = core::cell::Cell::new(0);
        let result = MMappedMemory::<u32>::try_new((1 << 62) + 1, false, |i| {
            calls.set(calls.get() + 1);
            i as u32
        });
        assert!(matches!(
            result,
            Err(MapError::TooLarge {
                len,
                element: 4
            }) if len == (1 << 62) + 1
        ));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn panicking_initializer_does_not_keep_the_mapping() {
        let result = std::panic::catch_unwind(|| {
            MMappedMemory::<u64>::try_new(PAGE_LEN, false, |i| {
                assert!(i < 7, "initializer gave up");
                i as u64
            })
        });
        assert!(result.is_err());
        let m = MMappedMemory::<u64>::try_new(PAGE_LEN, false, |i| i as u64).unwrap();
        assert_eq!(m[PAGE_LEN - 1], (PAGE_LEN - 1) as u64);
    }

    #[test]
    fn pointer_survives_a_move() {
        let m = MMappedMemory::<u8>::try_new(16, false, |i| i as u8).unwrap();
        let pointer = m.as_non_null();
        let moved = Box::new(m);
        assert_eq!(moved.as_non_null(), pointer);
        assert!(!moved.wb_on_retire());
        assert_eq!(unsafe { *pointer.as_ptr().add(15) }, 15);
    }

    #[test]
    fn spans_several_pages() {
        let m = MMappedMemory::<u8>::try_new(3 * PAGE_LEN + 1, false, |i| i as u8).unwrap();
        assert_eq!(m[3 * PAGE_LEN], (3 * PAGE_LEN) as u8);
    }
}
