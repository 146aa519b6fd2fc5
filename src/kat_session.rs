// Runs `count` records for one scheme off a single session DRBG.
//
// Each record consumes the session DRBG state left by the previous one, so
// records are generated strictly in order.

use core::fmt;

use tracing::{debug, info, warn};

use crate::config::KatConfig;
use crate::error::Result;
use crate::kat_record::KatRecord;
use crate::nist_drbg::{NistDrbg, SEED_BYTES};
use crate::signer::KatSigner;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KatReport {
    scheme: String,
    records: Vec<KatRecord>,
}

impl KatReport {
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn records(&self) -> &[KatRecord] {
        &self.records
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn failures(&self) -> usize {
        self.records.iter().filter(|r| r.is_mismatch()).count()
    }

    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for KatReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.scheme)?;
        writeln!(f)?;
        for rec in &self.records {
            write!(f, "{}", rec)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct KatSession {
    entropy: [u8; SEED_BYTES],
    count: usize,
}

impl KatSession {
    pub fn new(count: usize) -> Self {
        Self { entropy: NistDrbg::kat_entropy(), count }
    }

    pub fn from_config(cfg: &KatConfig) -> Self {
        Self { entropy: cfg.entropy, count: cfg.count }
    }

    pub fn run(&self, signer: &dyn KatSigner) -> Result<KatReport> {
        let mut drbg = NistDrbg::new(&self.entropy)?;
        let mut records = Vec::with_capacity(self.count);

        for count in 0..self.count {
            debug!("# {}/{} {}", count, self.count, signer.name());
            records.push(KatRecord::generate(count, &mut drbg, signer)?);
        }

        let report = KatReport { scheme: signer.name().to_string(), records };
        let fail = report.failures();
        if fail > 0 {
            warn!(scheme = report.scheme(), fail, "verification failures");
        } else {
            info!(scheme = report.scheme(), count = report.count(), "all records verified");
        }
        Ok(report)
    }
}

/// Report text and failure tally for `count` records from the PQCgenKAT entropy.
pub fn run(signer: &dyn KatSigner, count: usize) -> Result<(String, usize)> {
    let report = KatSession::new(count).run(signer)?;
    Ok((report.text(), report.failures()))
}
