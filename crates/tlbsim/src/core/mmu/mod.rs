//! Memory Management Unit.
//!
//! Translates trace accesses through the page table and the TLB. An access is
//! split into the pages it covers; pages beyond the page table are ignored.
//! If any remaining page is unmapped the whole access faults and the TLB is
//! left untouched, otherwise each page is looked up in the TLB independently.

use log::debug;

use crate::common::error::Result;
use crate::config::Config;
use crate::core::types::{AccessOutcome, AccessRequest};

use self::page_table::PageTable;
use self::tlb::Tlb;

pub mod page_table;
pub mod tlb;

pub struct Mmu {
    pub page_table: PageTable,
    pub tlb: Tlb,
}

impl Mmu {
    /// Creates an MMU over the standard page table.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_page_table(PageTable::new(), config)
    }

    /// Creates an MMU over a caller-supplied page table.
    pub fn with_page_table(page_table: PageTable, config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            page_table,
            tlb: Tlb::new(config.tlb.size)?,
        })
    }

    /// Translates one access.
    pub fn translate(&mut self, req: AccessRequest) -> AccessOutcome {
        let span = req.vaddr.page_span(req.size);
        let pages = span.clamped(self.page_table.len());

        if pages.is_empty() {
            debug!(
                "access {:#06x}+{}: no pages in table (span {}..={})",
                req.vaddr, req.size, span.start, span.end
            );
            return AccessOutcome::Empty;
        }

        // Validity pass
        if let Some(vpn) = pages.clone().find(|&vpn| !self.page_table.is_valid(vpn)) {
            debug!(
                "access {:#06x}+{} (offset {:#05x}): segfault on vpn {}",
                req.vaddr,
                req.size,
                req.vaddr.page_offset(),
                vpn
            );
            return AccessOutcome::SegFault { vpn };
        }

        // Translation pass
        let mut hits = 0;
        let mut misses = 0;
        for vpn in pages {
            match self.tlb.find(vpn) {
                Some(slot) => {
                    hits += 1;
                    self.tlb.touch(slot);
                }
                None => {
                    misses += 1;
                    let ppn = self.page_table.physical_page(vpn);
                    let slot = self.tlb.insert_and_evict(vpn, ppn);
                    debug!("tlb miss: vpn {} -> ppn {} into slot {}", vpn, ppn, slot);
                }
            }
        }

        AccessOutcome::Translated { hits, misses }
    }
}
