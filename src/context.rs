use aes_t_tables::{ExpandedKey, KeySchedule, KeySize, BLOCK_LEN};
use cache_utils::maccess;
use cache_utils::mmap::PAGE_LEN;
use static_assertions::const_assert;
use tracing::debug;

use crate::bounded::BoundedArray;
use crate::checksum::Checksum;
use crate::data::{INDEX_SOURCE, TABLE_LEN, VALUE_SOURCE};
use crate::error::BenchmarkError;
use crate::placement::{Placed, Placement, PlacementPolicy};
use crate::scenario::BenchmarkConfig;

/// Declared length of the index source, in words.
pub const INDEX_LEN: u32 = 1024;
pub const VALUE_LEN: u32 = 1600;
pub const DESTINATION_LEN: u32 = 8192;
pub const CIPHER_BUF_LEN: usize = 4096;

/// Raw key material.
///
/// Lives in the section that a loader with the non speculative page mitigation maps
/// without speculative forwarding. Other loaders treat it as ordinary data.
#[link_section = ".non-speculative"]
pub static KEY: [u8; 32] = *b"01234567890123456789012345678901";
pub const KEY_SIZE: KeySize = KeySize::Aes256;

const CACHE_LINE_LEN: usize = 64;

const_assert!(core::mem::size_of::<ExpandedKey>() <= PAGE_LEN);
const_assert!(INDEX_LEN as usize <= TABLE_LEN);
const_assert!(VALUE_LEN as usize <= TABLE_LEN);
// Both timed phases read and write at most this many blocks.
const_assert!(CIPHER_BUF_LEN / BLOCK_LEN <= DESTINATION_LEN as usize / BLOCK_LEN);

/// All buffers of a run, owned for the whole process.
#[derive(Debug)]
pub struct WorkloadContext {
    pub index_source: BoundedArray<u32>,
    pub value_source: BoundedArray<u8>,
    /// Written by the work phase, read as plaintext by the encrypt phase.
    pub destination: BoundedArray<u8>,
    pub cipher_out: Placed<u8>,
    pub key: Placed<ExpandedKey>,
    /// Placed with the cipher output.
    pub checksum: Placed<Checksum>,
}

impl WorkloadContext {
    /// Context with the key expanded by OpenSSL when the `openssl` feature is on.
    pub fn new(config: &BenchmarkConfig) -> Result<WorkloadContext, BenchmarkError> {
        #[cfg(feature = "openssl")]
        let schedule = aes_t_tables::OpenSsl;
        #[cfg(not(feature = "openssl"))]
        let schedule = aes_t_tables::Fips197;
        Self::with_schedule(config, &schedule)
    }

    /// Builds the buffers, expands [`KEY`] with `schedule` and prefaults everything.
    pub fn with_schedule(
        config: &BenchmarkConfig,
        schedule: &impl KeySchedule,
    ) -> Result<WorkloadContext, BenchmarkError> {
        let index_bytes: Vec<u8> = INDEX_SOURCE.iter().flat_map(|w| w.to_ne_bytes()).collect();
        let heap = Placement::Heap;

        let mut key = config.key_placement.mark(&[ExpandedKey::zeroed()])?;
        schedule.expand(&KEY, KEY_SIZE, &mut key[0])?;
        debug!(rounds = key[0].rounds(), placement = ?key.placement(), "key expanded");

        let mut context = WorkloadContext {
            index_source: BoundedArray::new(INDEX_LEN, heap.mark(&index_bytes)?)?,
            value_source: BoundedArray::new(VALUE_LEN, heap.mark(&VALUE_SOURCE[..])?)?,
            destination: BoundedArray::new(
                DESTINATION_LEN,
                heap.mark(&[0u8; DESTINATION_LEN as usize])?,
            )?,
            cipher_out: config.output_placement.mark(&[0u8; CIPHER_BUF_LEN])?,
            key,
            checksum: config.output_placement.mark(&[Checksum::default()])?,
        };
        debug!(
            output = ?context.cipher_out.placement(),
            checksum = ?context.checksum.placement(),
            "outputs placed"
        );
        context.prefault();
        Ok(context)
    }

    pub fn key(&self) -> &ExpandedKey {
        &self.key[0]
    }

    pub fn checksum(&self) -> Checksum {
        self.checksum[0]
    }

    /// Touches every buffer once so no page fault lands in a timed region.
    ///
    /// Leaves the destination and the cipher output zeroed.
    pub fn prefault(&mut self) {
        for i in 0..self.value_source.len() {
            self.destination.set_byte(i, self.value_source.get_byte(i));
        }
        for i in 0..self.index_source.len() {
            self.destination.set_byte(i, self.index_source.get_word(i) as u8);
        }
        for i in 0..self.destination.len() {
            self.destination.set_byte(i, 0);
        }
        self.cipher_out.fill(0);

        let key_bytes = core::mem::size_of::<ExpandedKey>();
        let key_pointer = self.key.as_ptr() as *const u8;
        for offset in (0..key_bytes).step_by(CACHE_LINE_LEN) {
            unsafe { maccess(key_pointer.add(offset)) };
        }
        self.checksum[0].reset();
    }
}
