use core::ffi::c_int;
use core::fmt;
use core::mem::size_of;

use static_assertions::const_assert_eq;
use thiserror::Error;

use crate::tables::sub_word;

pub const MAX_ROUNDS: usize = 14;
pub const ROUND_KEY_WORDS: usize = 4 * (MAX_ROUNDS + 1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeySize {
    Aes128,
    Aes192,
    Aes256,
}

impl KeySize {
    pub const fn bits(self) -> usize {
        match self {
            KeySize::Aes128 => 128,
            KeySize::Aes192 => 192,
            KeySize::Aes256 => 256,
        }
    }

    pub const fn bytes(self) -> usize {
        self.bits() / 8
    }

    /// Nk, the key length in 32 bit words.
    pub const fn words(self) -> usize {
        self.bits() / 32
    }

    pub const fn rounds(self) -> usize {
        self.words() + 6
    }

    pub fn from_bits(bits: usize) -> Option<KeySize> {
        match bits {
            128 => Some(KeySize::Aes128),
            192 => Some(KeySize::Aes192),
            256 => Some(KeySize::Aes256),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("expected a {expected} byte key, got {actual} bytes")]
    Length { expected: usize, actual: usize },
    #[error("key schedule rejected the key (code {0})")]
    Rejected(i32),
}

/// Round keys of one AES key, laid out like OpenSSL's `AES_KEY`.
///
/// Words are big endian: the first byte of a round key is the most significant byte of
/// its word. The all zero value is valid and describes a key that was never expanded.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ExpandedKey {
    pub(crate) round_keys: [u32; ROUND_KEY_WORDS],
    pub(crate) rounds: c_int,
}

const_assert_eq!(size_of::<ExpandedKey>(), 4 * ROUND_KEY_WORDS + 4);

impl ExpandedKey {
    pub const fn zeroed() -> ExpandedKey {
        ExpandedKey {
            round_keys: [0; ROUND_KEY_WORDS],
            rounds: 0,
        }
    }

    pub fn new(
        schedule: &impl KeySchedule,
        key: &[u8],
        size: KeySize,
    ) -> Result<ExpandedKey, KeyError> {
        let mut expanded = ExpandedKey::zeroed();
        schedule.expand(key, size, &mut expanded)?;
        Ok(expanded)
    }

    pub fn rounds(&self) -> usize {
        self.rounds as usize
    }

    /// The `4 * (rounds + 1)` words in use.
    pub fn round_keys(&self) -> &[u32] {
        &self.round_keys[..4 * (self.rounds() + 1)]
    }
}

impl Default for ExpandedKey {
    fn default() -> Self {
        ExpandedKey::zeroed()
    }
}

impl fmt::Debug for ExpandedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpandedKey")
            .field("rounds", &self.rounds)
            .finish_non_exhaustive()
    }
}

/// Turns a raw key into round keys, writing them in place.
pub trait KeySchedule {
    fn expand(&self, key: &[u8], size: KeySize, out: &mut ExpandedKey) -> Result<(), KeyError>;
}

fn check_length(key: &[u8], size: KeySize) -> Result<(), KeyError> {
    if key.len() != size.bytes() {
        return Err(KeyError::Length {
            expected: size.bytes(),
            actual: key.len(),
        });
    }
    Ok(())
}

/// The FIPS-197 key expansion.
#[derive(Debug, Default, Clone, Copy)]
pub struct Fips197;

impl KeySchedule for Fips197 {
    fn expand(&self, key: &[u8], size: KeySize, out: &mut ExpandedKey) -> Result<(), KeyError> {
        check_length(key, size)?;
        let nk = size.words();
        let total = 4 * (size.rounds() + 1);
        let w = &mut out.round_keys;

        for (i, chunk) in key.chunks_exact(4).enumerate() {
            w[i] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        let mut rcon: u8 = 0x01;
        for i in nk..total {
            let mut temp = w[i - 1];
            if i % nk == 0 {
                temp = sub_word(temp.rotate_left(8)) ^ ((rcon as u32) << 24);
                rcon = (rcon << 1) ^ if rcon & 0x80 != 0 { 0x1b } else { 0 };
            } else if nk > 6 && i % nk == 4 {
                temp = sub_word(temp);
            }
            w[i] = w[i - nk] ^ temp;
        }
        w[total..].fill(0);
        out.rounds = size.rounds() as c_int;
        Ok(())
    }
}

/// OpenSSL's `AES_set_encrypt_key`, writing straight into the destination.
#[cfg(feature = "openssl")]
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenSsl;

#[cfg(feature = "openssl")]
impl KeySchedule for OpenSsl {
    fn expand(&self, key: &[u8], size: KeySize, out: &mut ExpandedKey) -> Result<(), KeyError> {
        check_length(key, size)?;
        openssl::init();
        let r = unsafe {
            openssl_sys::AES_set_encrypt_key(
                key.as_ptr(),
                size.bits() as c_int,
                out as *mut ExpandedKey as *mut openssl_sys::AES_KEY,
            )
        };
        if r != 0 {
            return Err(KeyError::Rejected(r));
        }
        Ok(())
    }
}
