//! # SBE Inspector
//!
//! Reads concatenated framed messages from a file (or stdin) and prints one
//! JSON object per message.
//!
//! ```text
//! sbe-inspect [FILE]
//! ```

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};

use anyhow::Context;
use tracing::{debug, info};

use sbe_codec::config::{AppConfig, LogConfig, LogFormat};
use sbe_codec::sbe::SbeError;
use sbe_codec::schema::Message;

fn init_tracing(log: &LogConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    match log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

/// Returns true once the stream holds no further bytes.
fn at_eof<R: io::BufRead>(reader: &mut R) -> io::Result<bool> {
    Ok(reader.fill_buf()?.is_empty())
}

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    config.validate()?;
    init_tracing(&config.log);

    let path = std::env::args().nth(1);
    info!(
        version = env!("CARGO_PKG_VERSION"),
        input = path.as_deref().unwrap_or("-"),
        "starting sbe-inspect"
    );

    let input: Box<dyn Read> = match &path {
        Some(path) if path != "-" => {
            Box::new(File::open(path).with_context(|| format!("opening {path}"))?)
        }
        _ => Box::new(io::stdin().lock()),
    };
    let mut reader = BufReader::new(input);
    let mut out = BufWriter::new(io::stdout().lock());

    let mut count = 0usize;
    while !at_eof(&mut reader)? {
        let message = match Message::decode_framed(&mut reader, &config.codec) {
            Ok(message) => message,
            Err(SbeError::ShortRead { needed, read }) => {
                anyhow::bail!("message {count} truncated: needed {needed} bytes, got {read}")
            }
            Err(e) => return Err(e).with_context(|| format!("decoding message {count}")),
        };
        debug!(template_id = message.template_id(), name = message.name(), "decoded");
        serde_json::to_writer(&mut out, &message)?;
        out.write_all(b"\n")?;
        count += 1;
    }
    out.flush()?;

    info!(messages = count, "done");
    Ok(())
}
