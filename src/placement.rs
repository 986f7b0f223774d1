//! Where the benchmark buffers live.
//!
//! Mitigations that stop speculation on selected data need to know which memory holds
//! that data. A [`PlacementPolicy`] copies a buffer into storage chosen by the policy and
//! hands back the owning [`Placed`] handle.

use core::ops::{Deref, DerefMut};
use core::ptr::NonNull;

use cache_utils::mmap::{MMappedMemory, MapError};

/// A boxed slice held through a raw pointer.
///
/// Moving it does not reborrow the allocation, so pointers taken with
/// [`Placed::as_non_null`] stay usable after the handle moves.
pub struct HeapBuffer<T> {
    pointer: NonNull<[T]>,
}

impl<T> From<Box<[T]>> for HeapBuffer<T> {
    fn from(buffer: Box<[T]>) -> Self {
        // Box::into_raw never returns null.
        let pointer = unsafe { NonNull::new_unchecked(Box::into_raw(buffer)) };
        HeapBuffer { pointer }
    }
}

impl<T> Drop for HeapBuffer<T> {
    fn drop(&mut self) {
        drop(unsafe { Box::from_raw(self.pointer.as_ptr()) });
    }
}

impl<T> core::fmt::Debug for HeapBuffer<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HeapBuffer")
            .field("pointer", &self.pointer.cast::<T>())
            .field("len", &self.pointer.len())
            .finish()
    }
}

/// Owning handle to a placed buffer.
#[derive(Debug)]
pub enum Placed<T> {
    Heap(HeapBuffer<T>),
    Page(MMappedMemory<T>),
}

impl<T> Placed<T> {
    /// Start of the buffer, valid for the life of the handle wherever it moves.
    pub fn as_non_null(&self) -> NonNull<T> {
        match self {
            Placed::Heap(b) => b.pointer.cast::<T>(),
            Placed::Page(m) => m.as_non_null(),
        }
    }

    /// The placement this buffer actually got.
    pub fn placement(&self) -> Placement {
        match self {
            Placed::Heap(_) => Placement::Heap,
            Placed::Page(m) => Placement::Page {
                wb_on_retire: m.wb_on_retire(),
            },
        }
    }
}

impl<T> Deref for Placed<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        match self {
            Placed::Heap(b) => unsafe { b.pointer.as_ref() },
            Placed::Page(m) => m.slice(),
        }
    }
}

impl<T> DerefMut for Placed<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        match self {
            Placed::Heap(b) => unsafe { b.pointer.as_mut() },
            Placed::Page(m) => m.slice_mut(),
        }
    }
}

pub trait PlacementPolicy {
    fn mark<T: Copy>(&self, buffer: &[T]) -> Result<Placed<T>, MapError>;
}

/// Ordinary heap allocation, no hint.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeapPlacement;

impl PlacementPolicy for HeapPlacement {
    fn mark<T: Copy>(&self, buffer: &[T]) -> Result<Placed<T>, MapError> {
        Ok(Placed::Heap(Box::<[T]>::from(buffer).into()))
    }
}

/// Private anonymous pages of their own, optionally mapped write back on retire.
#[derive(Debug, Default, Clone, Copy)]
pub struct PagePlacement {
    pub wb_on_retire: bool,
}

impl PlacementPolicy for PagePlacement {
    fn mark<T: Copy>(&self, buffer: &[T]) -> Result<Placed<T>, MapError> {
        MMappedMemory::try_new(buffer.len(), self.wb_on_retire, |i| buffer[i]).map(Placed::Page)
    }
}

/// Placement selected by the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Heap,
    Page { wb_on_retire: bool },
}

impl PlacementPolicy for Placement {
    fn mark<T: Copy>(&self, buffer: &[T]) -> Result<Placed<T>, MapError> {
        match *self {
            Placement::Heap => HeapPlacement.mark(buffer),
            Placement::Page { wb_on_retire } => PagePlacement { wb_on_retire }.mark(buffer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_copies_the_buffer() {
        let placed = HeapPlacement.mark(&[1u8, 2, 3]).unwrap();
        assert!(matches!(placed, Placed::Heap(_)));
        assert_eq!(&*placed, &[1, 2, 3]);
    }

    #[test]
    fn page_copies_the_buffer() {
        let source: Vec<u32> = (0..2000).collect();
        let placed = Placement::Page {
            wb_on_retire: false,
        }
        .mark(&source)
        .unwrap();
        assert!(matches!(placed, Placed::Page(_)));
        assert_eq!(&*placed, &source[..]);
    }

    #[test]
    fn placed_buffers_are_writable() {
        for policy in [Placement::Heap, Placement::Page { wb_on_retire: false }] {
            let mut placed = policy.mark(&[0u8; 64]).unwrap();
            placed[63] = 7;
            assert_eq!(placed[63], 7);
        }
    }

    #[test]
    fn handles_report_their_placement() {
        for policy in [
            Placement::Heap,
            Placement::Page {
                wb_on_retire: false,
            },
        ] {
            assert_eq!(policy.mark(&[1u32, 2]).unwrap().placement(), policy);
        }
    }

    #[test]
    fn pointer_stays_valid_across_moves() {
        let placed = HeapPlacement.mark(&[5u8, 6, 7]).unwrap();
        let pointer = placed.as_non_null();
        let mut moved = vec![placed];
        unsafe { pointer.as_ptr().add(1).write(60) };
        assert_eq!(&*moved[0], &[5, 60, 7]);
        moved[0][2] = 70;
        assert_eq!(unsafe { pointer.as_ptr().add(2).read() }, 70);
    }

    #[test]
    fn empty_page_is_an_error() {
        let empty: [u8; 0] = [];
        assert!(PagePlacement::default().mark(&empty).is_err());
        assert!(HeapPlacement.mark(&empty).unwrap().is_empty());
    }
}
