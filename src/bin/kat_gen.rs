// Generates NIST-style .rsp KAT reports for every selected scheme and prints
// one `<sha256> <scheme> (<count>)` line per scheme.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use katgen::config::KatConfig;
use katgen::kat_session::KatSession;
use katgen::reporter::{first_difference, KatSummary};

#[derive(Parser)]
#[command(name = "kat_gen")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of records per scheme.
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,
    /// Scheme to run (repeatable). Default: all.
    #[arg(short, long = "scheme")]
    schemes: Vec<String>,
    /// Session entropy as 96 hex digits. Default: 000102..2F.
    #[arg(long)]
    seed: Option<String>,
    /// Write <scheme>.rsp files into this directory.
    #[arg(long)]
    rsp_dir: Option<PathBuf>,
    /// Compare against <scheme>.rsp files in this directory; a missing or
    /// differing file counts as a failure.
    #[arg(long)]
    check_dir: Option<PathBuf>,
}

fn rsp_path(dir: &Path, scheme: &str) -> PathBuf {
    dir.join(format!("{}.rsp", scheme))
}

fn run(cli: Cli) -> Result<usize> {
    let mut cfg = KatConfig { count: cli.count, schemes: cli.schemes, ..Default::default() };
    if let Some(seed) = &cli.seed {
        cfg = cfg.with_entropy_hex(seed)?;
    }

    if let Some(dir) = &cli.rsp_dir {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }

    let session = KatSession::from_config(&cfg);
    let mut total_fail = 0usize;

    for signer in cfg.selected_signers()? {
        let report = session.run(signer.as_ref())?;
        let text = report.text();
        total_fail += report.failures();

        if let Some(dir) = &cli.rsp_dir {
            let path = rsp_path(dir, report.scheme());
            fs::write(&path, &text).with_context(|| format!("write {}", path.display()))?;
            info!("wrote {}", path.display());
        }

        println!("{}", KatSummary::new(&text, report.scheme(), report.count()));

        // a reference that is missing or differs counts as one failure; the run goes on
        if let Some(dir) = &cli.check_dir {
            let path = rsp_path(dir, report.scheme());
            match fs::read_to_string(&path) {
                Ok(expected) => match first_difference(&expected, &text) {
                    None => info!("{} matches", path.display()),
                    Some(line) => {
                        warn!("{} differs from generated report at line {}", path.display(), line);
                        total_fail += 1;
                    }
                },
                Err(e) => {
                    warn!("read {}: {}", path.display(), e);
                    total_fail += 1;
                }
            }
        }
    }

    Ok(total_fail)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(fail) => {
            error!("kat_gen: {} record(s) failed verification", fail);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(2)
        }
    }
}
