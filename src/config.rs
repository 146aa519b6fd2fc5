// Run configuration: how many records, which schemes, and the session entropy.

use crate::error::{KatError, Result};
use crate::mldsa_signer::{all_signers, signer_by_name};
use crate::nist_drbg::{NistDrbg, SEED_BYTES};
use crate::signer::KatSigner;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KatConfig {
    pub count: usize,
    pub entropy: [u8; SEED_BYTES],
    /// Empty selects every registered scheme.
    pub schemes: Vec<String>,
}

impl Default for KatConfig {
    fn default() -> Self {
        Self { count: 1, entropy: NistDrbg::kat_entropy(), schemes: Vec::new() }
    }
}

impl KatConfig {
    /// Replaces the session entropy with 96 hex digits.
    pub fn with_entropy_hex(mut self, seed_hex: &str) -> Result<Self> {
        let seed = hex::decode(seed_hex.trim())?;
        self.entropy = seed
            .as_slice()
            .try_into()
            .map_err(|_| KatError::InvalidSeedLength { len: seed.len() })?;
        Ok(self)
    }

    pub fn selected_signers(&self) -> Result<Vec<Box<dyn KatSigner>>> {
        if self.schemes.is_empty() {
            return Ok(all_signers());
        }
        self.schemes.iter().map(|name| signer_by_name(name)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn default_is_pqcgenkat_entropy() {
        let cfg = KatConfig::default();
        assert_eq!(cfg.count, 1);
        assert_eq!(
            cfg.entropy,
            hex!(
                "000102030405060708090A0B0C0D0E0F101112131415161718191A1B1C1D1E1F"
                "202122232425262728292A2B2C2D2E2F"
            )
        );
        assert_eq!(cfg.selected_signers().unwrap().len(), 3);
    }

    #[test]
    fn entropy_from_hex() {
        let hex_seed = "ff".repeat(SEED_BYTES);
        let cfg = KatConfig::default().with_entropy_hex(&hex_seed).unwrap();
        assert_eq!(cfg.entropy, [0xFF; SEED_BYTES]);
    }

    #[test]
    fn entropy_length_and_hex_are_checked() {
        let short = "00".repeat(32);
        assert!(matches!(
            KatConfig::default().with_entropy_hex(&short),
            Err(KatError::InvalidSeedLength { len: 32 })
        ));
        assert!(matches!(
            KatConfig::default().with_entropy_hex("zz"),
            Err(KatError::InvalidHex(_))
        ));
    }

    #[test]
    fn scheme_selection() {
        let cfg = KatConfig { schemes: vec!["ML-DSA-87".into()], ..Default::default() };
        let signers = cfg.selected_signers().unwrap();
        assert_eq!(signers.len(), 1);
        assert_eq!(signers[0].name(), "ML-DSA-87");

        let cfg = KatConfig { schemes: vec!["nope".into()], ..Default::default() };
        assert!(matches!(cfg.selected_signers(), Err(KatError::UnknownScheme(n)) if n == "nope"));
    }
}
