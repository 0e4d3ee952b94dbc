//! Clone dump utility: downloads a radio's memory image to a file, or
//! uploads a previously downloaded file back into a radio.
//!
//! Reference: examples/PeterGrace-chirp-rs/src/bin/radio_dump.rs's
//! argument parsing and tracing_subscriber/anyhow idiom, generalized from
//! one hardcoded driver to any model in the descriptor catalog.

use anyhow::{bail, Context};
use radio_clone_engine::descriptors::registry;
use radio_clone_engine::{clone_in, clone_out, ProgressEvent, SerialSettings, SerialTransport};
use std::env;
use std::fs;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info")).unwrap();
    let format_layer = tracing_subscriber::fmt::layer().with_target(true).with_span_events(FmtSpan::NONE);
    tracing_subscriber::registry().with(filter_layer).with(format_layer).init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 5 {
        eprintln!("Usage: {} <in|out> <port> <vendor> <model>", args[0]);
        eprintln!("Example: {} in /dev/ttyUSB0 Baofeng UV-5R", args[0]);
        eprintln!("Reads from/writes to dump.bin in the current directory.");
        list_models();
        std::process::exit(1);
    }

    let direction = &args[1];
    let port_name = &args[2];
    let vendor = &args[3];
    let model_name = &args[4];

    let model = registry::find(vendor, model_name)
        .with_context(|| format!("no catalog entry for {vendor} {model_name}"))?;

    tracing::info!(model = %model.full_name(), port = %port_name, "opening transport");
    let settings = SerialSettings { baud: model.protocol.baud, ..SerialSettings::default() };
    let mut transport = SerialTransport::open(port_name, settings)?;

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<ProgressEvent>();
    let cancel = Arc::new(AtomicBool::new(false));

    let watcher = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            let percent = if event.bytes_total == 0 { 0 } else { event.bytes_done * 100 / event.bytes_total };
            tracing::info!(phase = %event.phase, percent, "progress");
        }
    });

    match direction.as_str() {
        "in" => {
            let cloned = clone_in(&mut transport, model, Some(tx), cancel).await?;
            fs::write("dump.bin", &cloned.bytes).with_context(|| "writing dump.bin".to_string())?;
            tracing::info!(bytes = cloned.bytes.len(), header = ?cloned.header, "saved dump.bin");
        }
        "out" => {
            let image = fs::read("dump.bin").with_context(|| "reading dump.bin".to_string())?;
            clone_out(&mut transport, model, &image, Some(tx), cancel).await?;
            tracing::info!("upload complete");
        }
        other => bail!("unknown direction '{other}', expected 'in' or 'out'"),
    }

    let _ = watcher.await;
    Ok(())
}

fn list_models() {
    eprintln!("\nKnown models:");
    for (vendor, models) in registry::by_vendor() {
        for m in models {
            eprintln!("  {vendor} {}", m.model);
        }
    }
}
