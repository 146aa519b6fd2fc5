// One KAT record: seed and message come from the session DRBG, keygen and
// signing randomness from a fresh DRBG seeded with that record's seed.

use core::fmt;

use tracing::warn;

use crate::error::Result;
use crate::nist_drbg::{NistDrbg, SEED_BYTES};
use crate::signer::KatSigner;

pub const MLEN_STEP: usize = 33;

pub const VERIFY_ERROR_MARKER: &str = "(verify error)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verification {
    Match,
    Mismatch,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KatRecord {
    pub count: usize,
    pub seed: [u8; SEED_BYTES],
    pub msg: Vec<u8>,
    pub pk: Vec<u8>,
    pub sk: Vec<u8>,
    pub sig: Vec<u8>,
    pub verification: Verification,
}

/// Message length of record `count`.
pub fn mlen(count: usize) -> usize {
    MLEN_STEP * (count + 1)
}

impl KatRecord {
    /// Draws from `drbg` exactly twice: the 48-byte seed, then the message.
    pub fn generate(count: usize, drbg: &mut NistDrbg, signer: &dyn KatSigner) -> Result<Self> {
        let mut seed = [0u8; SEED_BYTES];
        drbg.randombytes(&mut seed);
        let mut record_rng = NistDrbg::new(&seed)?;

        let msg = drbg.random_bytes(mlen(count));

        let (pk, sk) = signer.keygen(&mut record_rng)?;
        let sig = signer.sign(&msg, &sk, &mut record_rng)?;

        let mut record =
            Self { count, seed, msg, pk, sk, sig, verification: Verification::Match };

        let opened = signer.open(&record.signed_message(), &record.pk);
        if opened.as_deref() != Some(record.msg.as_slice()) {
            warn!(
                scheme = signer.name(),
                count,
                opened = opened.is_some(),
                "signed message did not verify"
            );
            record.verification = Verification::Mismatch;
        }

        Ok(record)
    }

    pub fn mlen(&self) -> usize {
        self.msg.len()
    }

    pub fn smlen(&self) -> usize {
        self.msg.len() + self.sig.len()
    }

    /// msg || sig
    pub fn signed_message(&self) -> Vec<u8> {
        let mut sm = self.msg.clone();
        sm.extend_from_slice(&self.sig);
        sm
    }

    pub fn is_mismatch(&self) -> bool {
        self.verification == Verification::Mismatch
    }
}

// .rsp layout, terminated by the blank separator line
impl fmt::Display for KatRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "count = {}", self.count)?;
        writeln!(f, "seed = {}", hex::encode_upper(self.seed))?;
        writeln!(f, "mlen = {}", self.mlen())?;
        writeln!(f, "msg = {}", hex::encode_upper(&self.msg))?;
        writeln!(f, "pk = {}", hex::encode_upper(&self.pk))?;
        writeln!(f, "sk = {}", hex::encode_upper(&self.sk))?;
        writeln!(f, "smlen = {}", self.smlen())?;
        writeln!(f, "sm = {}", hex::encode_upper(self.signed_message()))?;
        if self.is_mismatch() {
            writeln!(f, "{}", VERIFY_ERROR_MARKER)?;
        }
        writeln!(f)
    }
}
