//! Single-level page table.
//!
//! The table has one entry per virtual page and is never modified once built.
//! The default layout maps every even page to the frame with the same number
//! and leaves odd pages unmapped.

use crate::common::constants::{MAX_PHYSICAL_PAGE, PAGE_TABLE_SIZE};

/// A page table entry: validity bit and 4-bit physical frame number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageTableEntry {
    valid: bool,
    physical_page: u8,
}

impl PageTableEntry {
    /// Creates an entry.
    ///
    /// # Panics
    ///
    /// Panics if `physical_page` does not fit in 4 bits.
    pub fn new(valid: bool, physical_page: u8) -> Self {
        assert!(
            physical_page <= MAX_PHYSICAL_PAGE,
            "physical page {} exceeds 4-bit frame range",
            physical_page
        );
        Self {
            valid,
            physical_page,
        }
    }

    pub fn valid(&self) -> bool {
        self.valid
    }

    pub fn physical_page(&self) -> u8 {
        self.physical_page
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageTable {
    entries: [PageTableEntry; PAGE_TABLE_SIZE],
}

impl PageTable {
    /// Builds the standard layout: even pages valid, identity-mapped.
    pub fn new() -> Self {
        let entries = std::array::from_fn(|vpn| PageTableEntry::new(vpn % 2 == 0, vpn as u8));
        Self { entries }
    }

    /// Builds a table from explicit entries, indexed by virtual page number.
    pub fn from_entries(entries: [PageTableEntry; PAGE_TABLE_SIZE]) -> Self {
        Self { entries }
    }

    /// Number of virtual pages covered by the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns whether `vpn` is mapped. `vpn` must be below [`len`](Self::len).
    #[inline]
    pub fn is_valid(&self, vpn: u16) -> bool {
        self.entries[vpn as usize].valid
    }

    /// Returns the frame `vpn` maps to. `vpn` must be below [`len`](Self::len).
    #[inline]
    pub fn physical_page(&self, vpn: u16) -> u8 {
        self.entries[vpn as usize].physical_page
    }

    pub fn entries(&self) -> &[PageTableEntry] {
        &self.entries
    }
}

impl Default for PageTable {
    fn default() -> Self {
        Self::new()
    }
}
