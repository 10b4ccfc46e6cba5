//! # highest-core
//!
//! Core library for the `highest` ranked record extractor.
//!
//! This crate provides:
//! - Line parsing and validation for `<score>:<json payload>` records
//! - Streaming input reading with score uniqueness enforcement
//! - Top-N ranking and JSON output
//!
//! [`run`] drives the whole pipeline for a validated [`RunConfig`]. Output is
//! written only after every line has been accepted.

pub mod config;
pub mod error;
pub mod number;
pub mod output;
pub mod parser;
pub mod ranking;
pub mod reader;
pub mod record;

use std::fs::File;
use std::io::{BufReader, Write};

use tracing::info;

pub use config::{RunConfig, parse_display_length};
pub use error::{Error, ErrorKind, Result};
pub use number::{IntPrefix, parse_int_prefix};
pub use output::{render, write_ranked};
pub use parser::parse_line;
pub use ranking::RecordSet;
pub use reader::read_records;
pub use record::{Record, extract_id, is_truthy, normalize_numbers};

/// Read the configured file, rank it and write the top records to `out`.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<()> {
    let file = File::open(config.path()).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::FileNotFound(config.path.clone()),
        _ => Error::Io(e),
    })?;

    let records = read_records(BufReader::new(file))?;
    let total = records.len();
    let ranked = records.top(config.display_length);

    info!("Ranked {} records, emitting {}", total, ranked.len());
    write_ranked(out, &ranked)
}
