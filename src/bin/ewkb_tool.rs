//! CLI tool for inspecting and producing EWKB
//!
//! Usage:
//!   cargo run --bin ewkb_tool -- <command> <input> [options]
//!
//! Commands:
//!   decode <hex>        Print the geometry as EWKT
//!   encode <ewkt>       Print the geometry as hex EWKB
//!   size <ewkt>         Print the encoded size in bytes
//!
//! Set RUST_LOG=trace to see codec events.

use std::env;

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use ewkb_codec::codec::{self, Endianness};
use ewkb_codec::value::geometry_from_str;
use ewkb_codec::WriterConfig;

fn print_usage(program: &str) {
    eprintln!("Usage: {} <command> <input> [options]", program);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  decode <hex>             Print the geometry as EWKT");
    eprintln!("  encode <ewkt>            Print the geometry as hex EWKB");
    eprintln!("  size <ewkt>              Print the encoded size in bytes");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --json                   decode: print JSON instead of EWKT");
    eprintln!("  --xdr | --ndr            encode: big-endian or little-endian output");
    eprintln!("  --config <file.json>     encode: load writer settings");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} decode 0101000020E6100000000000000000244000000000000034C0", program);
    eprintln!("  {} encode \"SRID=4326;POINT (10 -20)\" --xdr", program);
    eprintln!("  {} size \"LINESTRING (0 0, 1 1)\"", program);
}

fn program_name(args: &[String]) -> &str {
    args.first().map_or("ewkb_tool", String::as_str)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = program_name(&args);
    if args.len() < 3 {
        print_usage(program);
        return Ok(());
    }

    let command = args[1].as_str();
    let input = &args[2];

    let mut json = false;
    let mut endian: Option<Endianness> = None;
    let mut config_path: Option<String> = None;

    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => json = true,
            "--xdr" => endian = Some(Endianness::Big),
            "--ndr" => endian = Some(Endianness::Little),
            "--config" => {
                i += 1;
                match args.get(i) {
                    Some(path) => config_path = Some(path.clone()),
                    None => bail!("--config needs a file path"),
                }
            }
            other => bail!("Unknown option: {}", other),
        }
        i += 1;
    }

    match command {
        "decode" => {
            let geom = codec::decode_hex(input).context("Failed to decode EWKB")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&geom)?);
            } else if geom.srid() > 0 {
                println!("SRID={};{}", geom.srid(), geom);
            } else {
                println!("{}", geom);
            }
        }
        "encode" => {
            let mut config = match &config_path {
                Some(path) => WriterConfig::from_json_file(path)?,
                None => WriterConfig::default(),
            };
            if let Some(endian) = endian {
                config.endian = endian;
            }

            let geom = geometry_from_str(input).context("Failed to parse EWKT")?;
            if config.hex {
                println!("{}", config.encode_hex(&geom)?);
            } else {
                let bytes = config.encode(&geom)?;
                println!("{:?}", bytes);
            }
        }
        "size" => {
            let geom = geometry_from_str(input).context("Failed to parse EWKT")?;
            println!("{}", codec::estimate_size(&geom));
        }
        other => {
            print_usage(program);
            bail!("Unknown command: {}", other);
        }
    }

    Ok(())
}
