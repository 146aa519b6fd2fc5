// ML-DSA (FIPS 204) via the RustCrypto `ml-dsa` crate, wired to the KAT harness.
//
// Randomness is consumed the way the reference C code does it:
//   keygen: randombytes(seed, 32)
//   sign:   randombytes(rnd, 32)   (hedged signing)
// Signing is pure ML-DSA with an empty context, M' = 0 || 0 || M.

use core::marker::PhantomData;

use ml_dsa::{
    EncodedSignature, EncodedSigningKey, EncodedVerifyingKey, KeyGen, MlDsa44, MlDsa65,
    MlDsa87, MlDsaParams, Signature, SigningKey, VerifyingKey, B32,
};

use crate::error::{KatError, Result};
use crate::nist_drbg::RandomSource;
use crate::signer::KatSigner;

// domain separator for pure signing with a zero-length context
const PURE_EMPTY_CTX: [u8; 2] = [0, 0];

pub struct MlDsaSigner<P> {
    name: &'static str,
    _params: PhantomData<P>,
}

impl<P: MlDsaParams> MlDsaSigner<P> {
    pub fn new(name: &'static str) -> Self {
        Self { name, _params: PhantomData }
    }

    fn signature_len() -> usize {
        core::mem::size_of::<EncodedSignature<P>>()
    }
}

pub fn ml_dsa_44() -> MlDsaSigner<MlDsa44> {
    MlDsaSigner::new("ML-DSA-44")
}

pub fn ml_dsa_65() -> MlDsaSigner<MlDsa65> {
    MlDsaSigner::new("ML-DSA-65")
}

pub fn ml_dsa_87() -> MlDsaSigner<MlDsa87> {
    MlDsaSigner::new("ML-DSA-87")
}

impl<P: MlDsaParams> KatSigner for MlDsaSigner<P> {
    fn name(&self) -> &str {
        self.name
    }

    fn keygen(&self, rng: &mut dyn RandomSource) -> Result<(Vec<u8>, Vec<u8>)> {
        let mut xi = B32::default();
        rng.randombytes(&mut xi[..]);

        let kp = P::from_seed(&xi);

        let pk: EncodedVerifyingKey<P> = kp.verifying_key().encode();
        let sk: EncodedSigningKey<P> = kp.signing_key().encode();

        Ok((pk.as_slice().to_vec(), sk.as_slice().to_vec()))
    }

    fn sign(&self, msg: &[u8], sk_bytes: &[u8], rng: &mut dyn RandomSource) -> Result<Vec<u8>> {
        let enc_sk = EncodedSigningKey::<P>::try_from(sk_bytes)
            .map_err(|_| KatError::MalformedKey { scheme: self.name, what: "secret key" })?;
        let sk = SigningKey::<P>::decode(&enc_sk);

        let mut rnd = B32::default();
        rng.randombytes(&mut rnd[..]);

        let sig: Signature<P> = sk.sign_internal(&[&PURE_EMPTY_CTX[..], msg], &rnd);
        let enc_sig: EncodedSignature<P> = sig.encode();

        Ok(enc_sig.as_slice().to_vec())
    }

    fn open(&self, sm: &[u8], pk_bytes: &[u8]) -> Option<Vec<u8>> {
        let mlen = sm.len().checked_sub(Self::signature_len())?;
        let (msg, sig_bytes) = sm.split_at(mlen);

        let enc_pk = EncodedVerifyingKey::<P>::try_from(pk_bytes).ok()?;
        let vk = VerifyingKey::<P>::decode(&enc_pk);

        let enc_sig = EncodedSignature::<P>::try_from(sig_bytes).ok()?;
        let sig = Signature::<P>::decode(&enc_sig)?;

        vk.verify_with_context(msg, &[], &sig).then(|| msg.to_vec())
    }
}

/// Every scheme the harness knows, in report order.
pub fn all_signers() -> Vec<Box<dyn KatSigner>> {
    vec![Box::new(ml_dsa_44()), Box::new(ml_dsa_65()), Box::new(ml_dsa_87())]
}

pub fn signer_by_name(name: &str) -> Result<Box<dyn KatSigner>> {
    all_signers()
        .into_iter()
        .find(|s| s.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| KatError::UnknownScheme(name.to_string()))
}
