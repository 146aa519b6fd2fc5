// AES-256 CTR-DRBG used by NIST KAT generators (PQCgenKAT style).
// State: Key (32 bytes), V (16 bytes, big-endian counter). Seed length: 48 bytes.
//
// Every output call is followed by an update that draws 48 more bytes from the
// same counter sequence and installs them as the next (Key, V). Reference .rsp
// files depend on that exact order.

use aes::Aes256;
use cipher::generic_array::GenericArray;
use cipher::{BlockEncrypt, KeyInit};

use crate::error::{KatError, Result};

pub const SEED_BYTES: usize = 48;
pub const KEY_BYTES: usize = 32;
pub const BLOCK_BYTES: usize = 16;

/// Byte-producing capability handed to a signer for keygen and signing.
///
/// One call corresponds to one `randombytes(x, xlen)` call of the C reference
/// harness, so the number and size of calls matter, not only the total length.
pub trait RandomSource {
    fn randombytes(&mut self, out: &mut [u8]);
}

#[derive(Clone)]
pub struct NistDrbg {
    key: [u8; KEY_BYTES],
    v: [u8; BLOCK_BYTES],
}

impl NistDrbg {
    /// Absorbs a 48-byte seed. Any other length is a configuration error.
    pub fn new(seed: &[u8]) -> Result<Self> {
        let seed48: &[u8; SEED_BYTES] = seed
            .try_into()
            .map_err(|_| KatError::InvalidSeedLength { len: seed.len() })?;

        let mut drbg = Self { key: [0u8; KEY_BYTES], v: [0u8; BLOCK_BYTES] };
        drbg.update(Some(seed48));
        Ok(drbg)
    }

    /// `[0, 1, ..., 47]`, the entropy input used by PQCgenKAT.
    pub fn kat_entropy() -> [u8; SEED_BYTES] {
        let mut entropy = [0u8; SEED_BYTES];
        for (i, b) in entropy.iter_mut().enumerate() {
            *b = i as u8;
        }
        entropy
    }

    fn inc_v(v: &mut [u8; BLOCK_BYTES]) {
        for i in (0..BLOCK_BYTES).rev() {
            let (nv, carry) = v[i].overflowing_add(1);
            v[i] = nv;
            if !carry {
                break;
            }
        }
    }

    /// V += 1 (mod 2^128).
    pub fn increment_counter(&mut self) {
        Self::inc_v(&mut self.v);
    }

    fn fill_keystream(&mut self, out: &mut [u8]) {
        let cipher = Aes256::new(GenericArray::from_slice(&self.key));
        for chunk in out.chunks_mut(BLOCK_BYTES) {
            self.increment_counter();
            let mut block = GenericArray::clone_from_slice(&self.v);
            cipher.encrypt_block(&mut block);
            // tail of the last block is dropped, never carried into the next call
            chunk.copy_from_slice(&block[..chunk.len()]);
        }
    }

    /// Raw keystream: no reseed afterwards.
    pub fn get_bytes(&mut self, n: usize) -> Vec<u8> {
        let mut out = vec![0u8; n];
        self.fill_keystream(&mut out);
        out
    }

    fn update(&mut self, provided: Option<&[u8; SEED_BYTES]>) {
        let mut temp = [0u8; SEED_BYTES];
        self.fill_keystream(&mut temp);

        if let Some(pd) = provided {
            for (t, p) in temp.iter_mut().zip(pd.iter()) {
                *t ^= p;
            }
        }

        self.key.copy_from_slice(&temp[..KEY_BYTES]);
        self.v.copy_from_slice(&temp[KEY_BYTES..]);
    }

    pub fn randombytes(&mut self, out: &mut [u8]) {
        self.fill_keystream(out);
        self.update(None);
    }

    pub fn random_bytes(&mut self, n: usize) -> Vec<u8> {
        let mut out = vec![0u8; n];
        self.randombytes(&mut out);
        out
    }

    pub fn key(&self) -> &[u8; KEY_BYTES] {
        &self.key
    }

    pub fn counter(&self) -> &[u8; BLOCK_BYTES] {
        &self.v
    }
}

impl RandomSource for NistDrbg {
    fn randombytes(&mut self, out: &mut [u8]) {
        NistDrbg::randombytes(self, out);
    }
}
