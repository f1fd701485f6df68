//! Report sinks for the final counters.

use std::io::{self, Write};

use crate::stats::SimStats;

/// Receives the counters once a run has consumed its whole trace.
#[cfg_attr(test, mockall::automock)]
pub trait ReportSink {
    fn report(&mut self, stats: &SimStats) -> io::Result<()>;
}

/// Plain text, one counter per line.
pub struct TextReport<W: Write> {
    out: W,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for TextReport<W> {
    fn report(&mut self, stats: &SimStats) -> io::Result<()> {
        writeln!(self.out, "TLB Hits: {}", stats.tlb_hits)?;
        writeln!(self.out, "TLB Misses: {}", stats.tlb_misses)?;
        writeln!(self.out, "Segfaults: {}", stats.seg_faults)?;
        self.out.flush()
    }
}

/// Pretty-printed JSON object with the three counters.
pub struct JsonReport<W: Write> {
    out: W,
}

impl<W: Write> JsonReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for JsonReport<W> {
    fn report(&mut self, stats: &SimStats) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, stats)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
