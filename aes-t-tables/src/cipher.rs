use crate::key::{ExpandedKey, ROUND_KEY_WORDS};
use crate::tables::{TE0, TE1, TE2, TE3};

pub const BLOCK_LEN: usize = 16;

pub type Block = [u8; BLOCK_LEN];

/// Code generation strategy for the round sequence. Both produce identical output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CipherVariant {
    /// One loop driven by the round count of the key.
    #[default]
    Looped,
    /// Nine rounds written out, then two or four more depending on the round count.
    Unrolled,
}

impl CipherVariant {
    #[inline(always)]
    pub fn encrypt_block(self, key: &ExpandedKey, input: &Block, output: &mut [u8], offset: usize) {
        match self {
            CipherVariant::Looped => encrypt_block(key, input, output, offset),
            CipherVariant::Unrolled => encrypt_block_unrolled(key, input, output, offset),
        }
    }
}

#[inline(always)]
fn round_key(rk: &[u32; ROUND_KEY_WORDS], round: usize) -> [u32; 4] {
    [
        rk[4 * round],
        rk[4 * round + 1],
        rk[4 * round + 2],
        rk[4 * round + 3],
    ]
}

#[inline(always)]
fn whiten(input: &Block, k: [u32; 4]) -> [u32; 4] {
    let word = |i: usize| {
        u32::from_be_bytes([input[4 * i], input[4 * i + 1], input[4 * i + 2], input[4 * i + 3]])
    };
    [word(0) ^ k[0], word(1) ^ k[1], word(2) ^ k[2], word(3) ^ k[3]]
}

// Column i takes byte lane 3 of s[i], lane 2 of s[i+1], lane 1 of s[i+2], lane 0 of s[i+3].
#[inline(always)]
fn round(s: [u32; 4], k: [u32; 4]) -> [u32; 4] {
    let column = |i: usize| {
        TE0[(s[i] >> 24) as usize]
            ^ TE1[((s[(i + 1) & 3] >> 16) & 0xff) as usize]
            ^ TE2[((s[(i + 2) & 3] >> 8) & 0xff) as usize]
            ^ TE3[(s[(i + 3) & 3] & 0xff) as usize]
            ^ k[i]
    };
    [column(0), column(1), column(2), column(3)]
}

// No MixColumns: keep only the lane of each table that holds the plain S-box byte.
#[inline(always)]
fn final_round(s: [u32; 4], k: [u32; 4]) -> [u32; 4] {
    let column = |i: usize| {
        (TE2[(s[i] >> 24) as usize] & 0xff000000)
            ^ (TE3[((s[(i + 1) & 3] >> 16) & 0xff) as usize] & 0x00ff0000)
            ^ (TE0[((s[(i + 2) & 3] >> 8) & 0xff) as usize] & 0x0000ff00)
            ^ (TE1[(s[(i + 3) & 3] & 0xff) as usize] & 0x000000ff)
            ^ k[i]
    };
    [column(0), column(1), column(2), column(3)]
}

#[inline(always)]
fn store(s: [u32; 4], output: &mut [u8], offset: usize) {
    let out = &mut output[offset..offset + BLOCK_LEN];
    for (chunk, word) in out.chunks_exact_mut(4).zip(s) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
}

/// Encrypts one block, writing the ciphertext to `output[offset..offset + 16]`.
///
/// Panics if that range is out of `output`.
#[inline]
pub fn encrypt_block(key: &ExpandedKey, input: &Block, output: &mut [u8], offset: usize) {
    let rk = &key.round_keys;
    let rounds = key.rounds();

    let mut s = whiten(input, round_key(rk, 0));
    for r in 1..rounds {
        s = round(s, round_key(rk, r));
    }
    store(final_round(s, round_key(rk, rounds)), output, offset);
}

macro_rules! rounds {
    ($s:ident, $rk:ident, $($r:literal),+) => {
        $( $s = round($s, round_key($rk, $r)); )+
    };
}

/// Same as [`encrypt_block`] with the rounds written out.
///
/// The key must have been expanded: a zeroed key does not run the same rounds here.
#[inline]
pub fn encrypt_block_unrolled(key: &ExpandedKey, input: &Block, output: &mut [u8], offset: usize) {
    let rk = &key.round_keys;

    let mut s = whiten(input, round_key(rk, 0));
    rounds!(s, rk, 1, 2, 3, 4, 5, 6, 7, 8, 9);
    if key.rounds > 10 {
        rounds!(s, rk, 10, 11);
        if key.rounds > 12 {
            rounds!(s, rk, 12, 13);
        }
    }
    store(final_round(s, round_key(rk, key.rounds())), output, offset);
}

pub fn encrypt(key: &ExpandedKey, input: &Block) -> Block {
    let mut out = [0u8; BLOCK_LEN];
    encrypt_block(key, input, &mut out, 0);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{Fips197, KeySize};
    use proptest::prelude::*;

    const PLAINTEXT: Block = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];

    fn counting_key(size: KeySize) -> ExpandedKey {
        let raw: Vec<u8> = (0..size.bytes() as u8).collect();
        ExpandedKey::new(&Fips197, &raw, size).unwrap()
    }

    // FIPS-197 appendix C.
    fn known_answers() -> [(KeySize, Block); 3] {
        [
            (
                KeySize::Aes128,
                [
                    0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70,
                    0xb4, 0xc5, 0x5a,
                ],
            ),
            (
                KeySize::Aes192,
                [
                    0xdd, 0xa9, 0x7c, 0xa4, 0x86, 0x4c, 0xdf, 0xe0, 0x6e, 0xaf, 0x70, 0xa0, 0xec,
                    0x0d, 0x71, 0x91,
                ],
            ),
            (
                KeySize::Aes256,
                [
                    0x8e, 0xa2, 0xb7, 0xca, 0x51, 0x67, 0x45, 0xbf, 0xea, 0xfc, 0x49, 0x90, 0x4b,
                    0x49, 0x60, 0x89,
                ],
            ),
        ]
    }

    #[test]
    fn known_answer_looped() {
        for (size, expected) in known_answers() {
            assert_eq!(encrypt(&counting_key(size), &PLAINTEXT), expected, "{:?}", size);
        }
    }

    #[test]
    fn known_answer_unrolled() {
        for (size, expected) in known_answers() {
            let mut out = [0u8; BLOCK_LEN];
            encrypt_block_unrolled(&counting_key(size), &PLAINTEXT, &mut out, 0);
            assert_eq!(out, expected, "{:?}", size);
        }
    }

    #[test]
    fn writes_only_at_offset() {
        let key = counting_key(KeySize::Aes256);
        let mut out = [0x5au8; 64];
        CipherVariant::Looped.encrypt_block(&key, &PLAINTEXT, &mut out, 16);
        assert!(out[..16].iter().all(|&b| b == 0x5a));
        assert_eq!(out[16..32], known_answers()[2].1);
        assert!(out[32..].iter().all(|&b| b == 0x5a));
    }

    #[test]
    #[should_panic]
    fn offset_past_the_end_panics() {
        let key = counting_key(KeySize::Aes256);
        let mut out = [0u8; 20];
        encrypt_block(&key, &PLAINTEXT, &mut out, 8);
    }

    proptest! {
        #[test]
        fn encryption_is_idempotent(
            raw in prop::array::uniform32(any::<u8>()),
            block in prop::array::uniform16(any::<u8>()),
        ) {
            let key = ExpandedKey::new(&Fips197, &raw, KeySize::Aes256).unwrap();
            prop_assert_eq!(encrypt(&key, &block), encrypt(&key, &block));
        }

        #[test]
        fn variants_agree(
            raw in prop::collection::vec(any::<u8>(), 32),
            bits in prop::sample::select(vec![128usize, 192, 256]),
            block in prop::array::uniform16(any::<u8>()),
        ) {
            let size = KeySize::from_bits(bits).unwrap();
            let key = ExpandedKey::new(&Fips197, &raw[..size.bytes()], size).unwrap();
            let mut looped = [0u8; BLOCK_LEN];
            let mut unrolled = [0u8; BLOCK_LEN];
            CipherVariant::Looped.encrypt_block(&key, &block, &mut looped, 0);
            CipherVariant::Unrolled.encrypt_block(&key, &block, &mut unrolled, 0);
            prop_assert_eq!(looped, unrolled);
        }
    }

    #[cfg(feature = "openssl")]
    #[test]
    fn matches_openssl_ecb() {
        use openssl::symm::{encrypt as ossl_encrypt, Cipher};
        use rand::{Rng, SeedableRng};
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..64 {
            let raw: [u8; 32] = rng.gen();
            let block: Block = rng.gen();
            let key = ExpandedKey::new(&Fips197, &raw, KeySize::Aes256).unwrap();
            let reference = ossl_encrypt(Cipher::aes_256_ecb(), &raw, None, &block).unwrap();
            assert_eq!(&encrypt(&key, &block)[..], &reference[..BLOCK_LEN]);
        }
    }
}
