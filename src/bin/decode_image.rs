//! Decode-image utility: parses a raw memory dump file and prints the
//! decoded channel table.
//!
//! Reference: examples/PeterGrace-chirp-rs/src/bin/parse_dump.rs's
//! filter-argument handling, generalized from one hardcoded driver to any
//! model in the descriptor catalog.

use anyhow::Context;
use radio_clone_engine::descriptors::registry;
use radio_clone_engine::RadioImage;
use std::env;
use std::fs;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!("Usage: {} <dump_file.bin> <vendor> <model> [channel_number]", args[0]);
        std::process::exit(1);
    }

    let dump_file = &args[1];
    let vendor = &args[2];
    let model_name = &args[3];
    let filter: Option<u32> = args.get(4).map(|s| s.parse()).transpose()?;

    let model =
        registry::find(vendor, model_name).with_context(|| format!("no catalog entry for {vendor} {model_name}"))?;

    let bytes = fs::read(dump_file).with_context(|| format!("reading {dump_file}"))?;
    println!("Loaded {} bytes from {dump_file}", bytes.len());

    let image = RadioImage::new(model, bytes)?;
    let channels = image.channels()?;

    match filter {
        Some(number) => match channels.get(number) {
            Some(channel) => println!("{channel}"),
            None => println!("#{number}: <empty>"),
        },
        None => {
            let non_empty: Vec<_> = channels.non_empty().collect();
            println!("{} non-empty channels\n", non_empty.len());
            for channel in non_empty {
                println!("{channel}");
            }
        }
    }

    Ok(())
}
