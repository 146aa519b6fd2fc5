// Fatal errors of the KAT harness. A verification mismatch is not one of them:
// it is recorded in the report and counted, see kat_record::Verification.

#[derive(Debug, thiserror::Error)]
pub enum KatError {
    #[error("DRBG seed must be 48 bytes, got {len}")]
    InvalidSeedLength { len: usize },

    #[error("{scheme}: malformed {what}")]
    MalformedKey { scheme: &'static str, what: &'static str },

    #[error("unknown scheme '{0}'")]
    UnknownScheme(String),

    #[error("invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

pub type Result<T> = core::result::Result<T, KatError>;
