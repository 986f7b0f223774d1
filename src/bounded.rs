//! Bounds checked arrays.
//!
//! Every access compares the index with the declared length and only then touches the
//! buffer. Nothing masks the index, so a core that predicts the comparison can load past
//! the bound before the check resolves. The workload relies on that.

use core::marker::PhantomData;
use core::mem::size_of;
use core::ptr::{self, NonNull};
use core::slice;

use crate::error::ContainerError;
use crate::placement::Placed;

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u32 {}
}

/// Plain integer that can be read from any byte offset.
pub trait Element: sealed::Sealed + Copy + Default {}

impl Element for u8 {}
impl Element for u32 {}

/// A byte buffer accessed as `length` elements of `T`.
///
/// The buffer may be longer than `length` elements; the tail is never accessed.
pub struct BoundedArray<T: Element> {
    length: u32,
    data: NonNull<u8>,
    bytes: usize,
    storage: Placed<u8>,
    _element: PhantomData<T>,
}

impl<T: Element> BoundedArray<T> {
    pub fn new(length: u32, storage: Placed<u8>) -> Result<Self, ContainerError> {
        let needed = length as usize * size_of::<T>();
        if storage.len() < needed {
            return Err(ContainerError::TooShort {
                length,
                needed,
                available: storage.len(),
            });
        }
        let bytes = storage.len();
        // Taken without a reference, so moving `storage` below leaves it usable.
        let data = storage.as_non_null();
        Ok(BoundedArray {
            length,
            data,
            bytes,
            storage,
            _element: PhantomData,
        })
    }

    /// Declared length in elements.
    ///
    /// Read from memory on every call so that each check waits on a load.
    #[inline(always)]
    pub fn len(&self) -> u32 {
        unsafe { ptr::read_volatile(&self.length) }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`, or 0 when `index` is out of bounds.
    #[inline(always)]
    pub fn get(&self, index: u32) -> T {
        if index < self.len() {
            return unsafe {
                ptr::read_unaligned(self.data.as_ptr().add(index as usize * size_of::<T>()) as *const T)
            };
        }
        T::default()
    }

    /// Stores `value` at `index`, does nothing when `index` is out of bounds.
    #[inline(always)]
    pub fn set(&mut self, index: u32, value: T) {
        if index < self.len() {
            unsafe {
                ptr::write_unaligned(
                    self.data.as_ptr().add(index as usize * size_of::<T>()) as *mut T,
                    value,
                )
            };
        }
    }

    /// Raw view of the whole buffer, tail included, for bulk readers.
    pub fn as_bytes(&self) -> &[u8] {
        unsafe { slice::from_raw_parts(self.data.as_ptr(), self.bytes) }
    }
}

impl BoundedArray<u8> {
    #[inline(always)]
    pub fn get_byte(&self, index: u32) -> u8 {
        self.get(index)
    }

    #[inline(always)]
    pub fn set_byte(&mut self, index: u32, value: u8) {
        self.set(index, value)
    }
}

impl BoundedArray<u32> {
    /// Host endian word made of bytes `4 * index .. 4 * index + 4`.
    #[inline(always)]
    pub fn get_word(&self, index: u32) -> u32 {
        self.get(index)
    }
}

impl<T: Element> core::fmt::Debug for BoundedArray<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BoundedArray")
            .field("length", &self.length)
            .field("bytes", &self.bytes)
            .field("placement", &self.storage.placement())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::{HeapPlacement, PlacementPolicy};
    use proptest::prelude::*;

    fn bytes(length: u32, contents: &[u8]) -> BoundedArray<u8> {
        BoundedArray::new(length, HeapPlacement.mark(contents).unwrap()).unwrap()
    }

    #[test]
    fn declared_length_must_fit() {
        let storage = HeapPlacement.mark(&[0u8; 15]).unwrap();
        assert_eq!(
            BoundedArray::<u32>::new(4, storage).unwrap_err(),
            ContainerError::TooShort {
                length: 4,
                needed: 16,
                available: 15
            }
        );
    }

    #[test]
    fn heap_backed_writes_read_back() {
        let mut a = bytes(4, &[0; 4]);
        a.set_byte(1, 9);
        assert_eq!(a.get_byte(1), 9);
        let moved = Box::new(a);
        assert_eq!(moved.get_byte(1), 9);
        assert_eq!(moved.as_bytes(), &[0, 9, 0, 0]);
    }

    #[test]
    fn tail_past_the_length_is_unreachable() {
        let mut a = bytes(2, &[1, 2, 3, 4]);
        assert_eq!(a.get_byte(1), 2);
        assert_eq!(a.get_byte(2), 0);
        a.set_byte(3, 9);
        assert_eq!(a.as_bytes(), &[1, 2, 3, 4]);
    }

    #[test]
    fn words_use_element_indices() {
        let mut raw = Vec::new();
        for w in [0x11223344u32, 0xdeadbeef, 7] {
            raw.extend_from_slice(&w.to_ne_bytes());
        }
        let a = BoundedArray::<u32>::new(2, HeapPlacement.mark(&raw).unwrap()).unwrap();
        assert_eq!(a.get_word(0), 0x11223344);
        assert_eq!(a.get_word(1), 0xdeadbeef);
        assert_eq!(a.get_word(2), 0);
        assert_eq!(a.get_word(u32::MAX), 0);
    }

    #[test]
    fn empty_array() {
        let mut a = bytes(0, &[]);
        assert!(a.is_empty());
        assert_eq!(a.get_byte(0), 0);
        a.set_byte(0, 1);
    }

    proptest! {
        #[test]
        fn reads_are_total(
            contents in prop::collection::vec(any::<u8>(), 0..256),
            cut in 0usize..=256,
            index in any::<u32>(),
        ) {
            let length = cut.min(contents.len()) as u32;
            let a = bytes(length, &contents);
            let expected = if index < length { contents[index as usize] } else { 0 };
            prop_assert_eq!(a.get_byte(index), expected);
        }

        #[test]
        fn word_reads_are_total(
            words in prop::collection::vec(any::<u32>(), 0..64),
            cut in 0usize..=64,
            index in any::<u32>(),
        ) {
            let raw: Vec<u8> = words.iter().flat_map(|w| w.to_ne_bytes()).collect();
            let length = cut.min(words.len()) as u32;
            let a = BoundedArray::<u32>::new(length, HeapPlacement.mark(&raw).unwrap()).unwrap();
            let expected = if index < length { words[index as usize] } else { 0 };
            prop_assert_eq!(a.get_word(index), expected);
        }

        #[test]
        fn writes_touch_one_element_or_nothing(
            contents in prop::collection::vec(any::<u8>(), 0..256),
            cut in 0usize..=256,
            index in any::<u32>(),
            value in any::<u8>(),
        ) {
            let length = cut.min(contents.len()) as u32;
            let mut a = bytes(length, &contents);
            a.set_byte(index, value);
            let mut expected = contents.clone();
            if index < length {
                expected[index as usize] = value;
            }
            prop_assert_eq!(a.as_bytes(), &expected[..]);
        }
    }
}
