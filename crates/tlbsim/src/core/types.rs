use crate::common::addr::VirtAddr;

/// One access from a trace: a virtual address and the number of bytes read.
///
/// `size` is kept signed and unvalidated; see [`VirtAddr::page_span`] for how
/// zero and negative sizes map onto pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessRequest {
    pub vaddr: VirtAddr,
    pub size: i32,
}

impl AccessRequest {
    pub fn new(vaddr: u16, size: i32) -> Self {
        Self {
            vaddr: VirtAddr::new(vaddr),
            size,
        }
    }
}

/// Result of translating a single access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessOutcome {
    /// No page of the access lies inside the page table.
    Empty,
    /// At least one page is unmapped; `vpn` is the first one found.
    SegFault { vpn: u16 },
    /// Every page was translated. Each page counts as one TLB hit or miss.
    Translated { hits: u64, misses: u64 },
}
