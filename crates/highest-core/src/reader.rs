//! Streaming record reader.
//!
//! Reads the input one line at a time so memory follows the number of
//! accepted records rather than the file size. Lines end at `\n`, `\r\n`
//! or a lone `\r`; bytes that are not valid UTF-8 are replaced with U+FFFD
//! instead of failing the read.

use std::io::{self, BufRead};

use memchr::memchr2;
use tracing::debug;

use crate::error::Result;
use crate::parser::parse_line;
use crate::ranking::RecordSet;

/// Parse every line of `reader`, stopping at the first invalid one.
pub fn read_records<R: BufRead>(mut reader: R) -> Result<RecordSet> {
    let mut records = RecordSet::new();
    let mut buf = Vec::new();
    let mut line = 0;

    while next_line(&mut reader, &mut buf)? {
        line += 1;

        let text = String::from_utf8_lossy(&buf);
        match parse_line(&text, line)? {
            Some(record) => {
                debug!("line {}: score {}", line, record.score);
                records.insert(record, line)?;
            }
            None => debug!("line {}: blank, skipped", line),
        }
    }

    debug!("Read {} lines, {} records", line, records.len());
    Ok(records)
}

/// Fill `buf` with the next line, without its terminator. Returns `false`
/// once the input is exhausted.
fn next_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<bool> {
    buf.clear();
    let mut read_any = false;

    loop {
        let available = match reader.fill_buf() {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            return Ok(read_any);
        }
        read_any = true;

        match memchr2(b'\n', b'\r', available) {
            Some(end) => {
                let terminator = available[end];
                buf.extend_from_slice(&available[..end]);
                reader.consume(end + 1);
                if terminator == b'\r' {
                    skip_byte(reader, b'\n')?;
                }
                return Ok(true);
            }
            None => {
                let len = available.len();
                buf.extend_from_slice(available);
                reader.consume(len);
            }
        }
    }
}

/// Consume the next byte if it is `byte`.
fn skip_byte<R: BufRead>(reader: &mut R, byte: u8) -> io::Result<()> {
    loop {
        match reader.fill_buf() {
            Ok(bytes) => {
                if bytes.first() == Some(&byte) {
                    reader.consume(1);
                }
                return Ok(());
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}
