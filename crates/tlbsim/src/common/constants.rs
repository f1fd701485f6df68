//! Memory layout constants.

/// Number of bits in the page offset (4 KiB pages).
pub const PAGE_SHIFT: u32 = 12;

/// Page size in bytes.
pub const PAGE_SIZE: u32 = 1 << PAGE_SHIFT;

/// Mask selecting the page offset of an address.
pub const PAGE_OFFSET_MASK: u16 = (PAGE_SIZE - 1) as u16;

/// Number of entries in the single-level page table.
pub const PAGE_TABLE_SIZE: usize = 16;

/// Largest physical frame number a page table entry can hold (4 bits).
pub const MAX_PHYSICAL_PAGE: u8 = 0xF;

/// TLB capacity used when none is configured.
pub const DEFAULT_TLB_SIZE: usize = 4;
