// Dumps successive randombytes() draws of the KAT DRBG, for lining up against
// another implementation's generator call by call.

use anyhow::Result;
use clap::Parser;

use katgen::config::KatConfig;
use katgen::nist_drbg::NistDrbg;

#[derive(Parser)]
#[command(name = "drbg_dump")]
#[command(version, about, long_about = None)]
struct Cli {
    /// 48-byte seed as 96 hex digits, e.g. a `seed = ...` line of an .rsp file.
    /// Default: 000102..2F.
    #[arg(long)]
    seed: Option<String>,
    /// Length of each successive draw.
    #[arg(short, long = "len", default_values_t = [32usize, 32, 32])]
    lens: Vec<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg = KatConfig::default();
    if let Some(seed) = &cli.seed {
        cfg = cfg.with_entropy_hex(seed)?;
    }
    let mut drbg = NistDrbg::new(&cfg.entropy)?;

    for (i, &len) in cli.lens.iter().enumerate() {
        let out = drbg.random_bytes(len);
        println!("[{}] ({}) = {}", i, len, hex::encode_upper(&out));
    }
    Ok(())
}
