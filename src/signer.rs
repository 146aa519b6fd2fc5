// Signature scheme under test, as seen by the KAT harness.
//
// The C harness installs randombytes() globally; here the per-record DRBG is
// lent to keygen and sign for the duration of the call instead.

use crate::error::Result;
use crate::nist_drbg::RandomSource;

pub trait KatSigner {
    /// Scheme identifier, printed in the report header and the summary line.
    fn name(&self) -> &str;

    /// Returns `(pk, sk)` in the scheme's encoded form.
    fn keygen(&self, rng: &mut dyn RandomSource) -> Result<(Vec<u8>, Vec<u8>)>;

    /// Detached signature over `msg`.
    fn sign(&self, msg: &[u8], sk: &[u8], rng: &mut dyn RandomSource) -> Result<Vec<u8>>;

    /// Verifies `sm = msg || sig` and returns `msg`, or `None` if verification fails.
    fn open(&self, sm: &[u8], pk: &[u8]) -> Option<Vec<u8>>;
}
