pub mod error;
pub mod nist_drbg;

pub mod signer;
pub mod mldsa_signer;

pub mod kat_record;
pub mod kat_session;
pub mod reporter;
pub mod config;


pub use error::{KatError, Result};
pub use kat_session::{run, KatReport, KatSession};
pub use nist_drbg::{NistDrbg, RandomSource};
pub use signer::KatSigner;
