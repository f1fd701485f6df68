//! Trace file reader.
//!
//! A trace is a stream of whitespace-separated records, each a hexadecimal
//! virtual address followed by a signed decimal access size:
//!
//! ```text
//! 0x1a2c 4
//! 3000 -1   2ff0 32
//! ```
//!
//! Line breaks carry no meaning. Reading stops cleanly at end of input and
//! also at the first record that does not parse; records read before that
//! point are still delivered.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use crate::common::error::{Result, SimError};
use crate::core::types::AccessRequest;

/// Why a [`TraceReader`] stopped producing records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StopReason {
    EndOfInput,
    /// Record `record` (1-based) was incomplete or held a bad token.
    Malformed { record: u64, token: Option<String> },
    /// The underlying reader returned an error.
    ReadError { record: u64, message: String },
}

/// Lazily parses [`AccessRequest`]s from a buffered reader.
///
/// Input is tokenized as raw bytes, so a token that is not valid UTF-8 only
/// ends the stream at its own record.
pub struct TraceReader<R: BufRead> {
    reader: R,
    tokens: VecDeque<Vec<u8>>,
    records: u64,
    stopped: Option<StopReason>,
}

impl TraceReader<BufReader<File>> {
    /// Opens a trace file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SimError::TraceOpen {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("opened trace {}", path.display());
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TraceReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            tokens: VecDeque::new(),
            records: 0,
            stopped: None,
        }
    }

    /// Number of records delivered so far.
    pub fn records_read(&self) -> u64 {
        self.records
    }

    /// Set once the reader has stopped.
    pub fn stop_reason(&self) -> Option<&StopReason> {
        self.stopped.as_ref()
    }

    fn next_token(&mut self) -> std::result::Result<Option<Vec<u8>>, String> {
        let mut line = Vec::new();
        while self.tokens.is_empty() {
            line.clear();
            match self.reader.read_until(b'\n', &mut line) {
                Ok(0) => return Ok(None),
                Ok(_) => self.tokens.extend(
                    line.split(|b| b.is_ascii_whitespace())
                        .filter(|token| !token.is_empty())
                        .map(<[u8]>::to_vec),
                ),
                Err(e) => return Err(e.to_string()),
            }
        }
        Ok(self.tokens.pop_front())
    }

    /// Pulls the next token of `record`, or the reason the stream stops.
    fn take_token(
        &mut self,
        record: u64,
        at_start: bool,
    ) -> std::result::Result<String, StopReason> {
        match self.next_token() {
            Ok(Some(bytes)) => String::from_utf8(bytes).map_err(|e| StopReason::Malformed {
                record,
                token: Some(String::from_utf8_lossy(e.as_bytes()).into_owned()),
            }),
            Ok(None) if at_start => Err(StopReason::EndOfInput),
            Ok(None) => Err(StopReason::Malformed { record, token: None }),
            Err(message) => Err(StopReason::ReadError { record, message }),
        }
    }

    fn stop(&mut self, reason: StopReason) -> Option<AccessRequest> {
        match &reason {
            StopReason::EndOfInput => {
                debug!("trace: end of input after {} records", self.records)
            }
            StopReason::Malformed { record, token } => warn!(
                "trace: stopping at malformed record {} (token {:?})",
                record, token
            ),
            StopReason::ReadError { record, message } => {
                warn!("trace: read error at record {}: {}", record, message)
            }
        }
        self.stopped = Some(reason);
        None
    }

    fn read_record(&mut self) -> Option<AccessRequest> {
        let record = self.records + 1;

        let addr_token = match self.take_token(record, true) {
            Ok(token) => token,
            Err(reason) => return self.stop(reason),
        };
        let Some(vaddr) = parse_address(&addr_token) else {
            return self.stop(StopReason::Malformed {
                record,
                token: Some(addr_token),
            });
        };

        let size_token = match self.take_token(record, false) {
            Ok(token) => token,
            Err(reason) => return self.stop(reason),
        };
        let Some(size) = parse_size(&size_token) else {
            return self.stop(StopReason::Malformed {
                record,
                token: Some(size_token),
            });
        };

        self.records = record;
        Some(AccessRequest::new(vaddr, size))
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = AccessRequest;

    fn next(&mut self) -> Option<AccessRequest> {
        if self.stopped.is_some() {
            return None;
        }
        self.read_record()
    }
}

/// Parses a hexadecimal address: optional sign, optional `0x`/`0X` prefix.
///
/// Follows `strtoul` conventions: a leading `-` negates the value modulo
/// 2^64 and values wider than 64 bits saturate. The result is then reduced
/// modulo 2^16, so `-10` is `0xfff0`.
pub fn parse_address(token: &str) -> Option<u16> {
    let (negative, rest) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };
    let digits = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))
        .unwrap_or(rest);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = match u64::from_str_radix(digits, 16) {
        Ok(v) if negative => v.wrapping_neg(),
        Ok(v) => v,
        // Only overflow is left once the digits are checked.
        Err(_) => u64::MAX,
    };
    Some(value as u16)
}

/// Parses a signed decimal access size.
pub fn parse_size(token: &str) -> Option<i32> {
    token.parse().ok()
}
