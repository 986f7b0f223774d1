//! AES encryption with the four T-tables.
//!
//! Each middle round is sixteen table reads and a handful of XORs, with no data dependent
//! branch. The round keys are expanded once, by [`key::Fips197`] or by OpenSSL with the
//! `openssl` feature, and then only read.
#![deny(unsafe_op_in_unsafe_fn)]

pub mod cipher;
pub mod key;
pub mod tables;

pub use cipher::{encrypt, encrypt_block, encrypt_block_unrolled, Block, CipherVariant, BLOCK_LEN};
pub use key::{ExpandedKey, Fips197, KeyError, KeySchedule, KeySize};

#[cfg(feature = "openssl")]
pub use key::OpenSsl;
