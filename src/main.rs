//! huffpack CLI
//! Usage:
//!   huffpack [input] [encoded] [decoded]
//!
//! Builds the tree from `input`, encodes it to `encoded`, then decodes that
//! back into `decoded`. Defaults: data.txt, data.txt.huff, decodedOutput.txt.
//! Log level comes from HUFFPACK_LOG (default "info").

use std::path::PathBuf;
use std::{env, fs, process};

use tracing::info;
use tracing_subscriber::EnvFilter;

use huffpack::HuffmanCodec;

const DEFAULT_INPUT:   &str = "data.txt";
const DEFAULT_ENCODED: &str = "data.txt.huff";
const DEFAULT_DECODED: &str = "decodedOutput.txt";

struct Config {
    input:   PathBuf,
    encoded: PathBuf,
    decoded: PathBuf,
}

impl Config {
    fn from_args(args: &[String]) -> Option<Config> {
        if args.len() > 3 || args.iter().any(|a| a == "-h" || a == "--help") {
            return None;
        }
        let arg = |i: usize, default: &str| {
            PathBuf::from(args.get(i).map(String::as_str).unwrap_or(default))
        };
        Some(Config {
            input:   arg(0, DEFAULT_INPUT),
            encoded: arg(1, DEFAULT_ENCODED),
            decoded: arg(2, DEFAULT_DECODED),
        })
    }
}

fn run(config: &Config) -> huffpack::Result<()> {
    let codec = HuffmanCodec::from_file(&config.input)?;
    info!(
        "Tree built: {} symbols, {} distinct",
        codec.frequencies().total(),
        codec.frequencies().distinct()
    );

    let bits = codec.encode_file(&config.input, &config.encoded)?;
    info!("{} bits → {}", bits, config.encoded.display());
    println!("Encoding done");

    let symbols = codec.decode_file(&config.encoded, &config.decoded)?;
    info!("{} bytes → {}", symbols, config.decoded.display());
    println!("Decoding done");

    let packed = fs::metadata(&config.encoded)?.len();
    println!("Done. {} bytes → {} bytes", codec.frequencies().total(), packed);
    Ok(())
}

fn main() {
    let filter = EnvFilter::try_from_env("HUFFPACK_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = Config::from_args(&args).unwrap_or_else(|| {
        eprintln!("Usage:");
        eprintln!("  huffpack [input] [encoded] [decoded]");
        process::exit(1);
    });

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
