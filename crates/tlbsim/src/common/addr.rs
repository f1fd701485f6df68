//! Virtual address type and page arithmetic.
//!
//! Addresses are 16 bits wide: the upper 4 bits select one of the 16 pages and
//! the lower 12 bits are the offset within a 4 KiB page.

use std::ops::RangeInclusive;

use super::constants::{PAGE_OFFSET_MASK, PAGE_SHIFT};

/// A 16-bit virtual address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtAddr(pub u16);

impl VirtAddr {
    #[inline(always)]
    pub fn new(addr: u16) -> Self {
        Self(addr)
    }

    /// Virtual page number of this address.
    pub fn vpn(&self) -> u16 {
        self.0 >> PAGE_SHIFT
    }

    pub fn page_offset(&self) -> u16 {
        self.0 & PAGE_OFFSET_MASK
    }

    /// Computes the span of pages touched by an access of `size` bytes
    /// starting at this address.
    ///
    /// The last byte is located with signed 32-bit arithmetic (wrapping on
    /// overflow) and the resulting page number is truncated to 16 bits. A
    /// zero or negative size therefore yields either an empty span or, when
    /// the end lands below address zero, a span that reaches page `0xFFFF`.
    pub fn page_span(&self, size: i32) -> PageSpan {
        let last = i32::from(self.0).wrapping_add(size).wrapping_sub(1);
        PageSpan {
            start: self.vpn(),
            end: (last >> PAGE_SHIFT) as u16,
        }
    }
}

impl std::fmt::LowerHex for VirtAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::LowerHex::fmt(&self.0, f)
    }
}

/// Inclusive range of virtual page numbers covered by one access.
///
/// `end` may be smaller than `start`, in which case the span is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSpan {
    pub start: u16,
    pub end: u16,
}

impl PageSpan {
    /// Pages of the span that fall below `limit`, in ascending order.
    ///
    /// Pages at or above `limit` are dropped, not reported.
    pub fn clamped(&self, limit: usize) -> RangeInclusive<u16> {
        if limit == 0 {
            return 1..=0;
        }
        let last = (limit - 1).min(u16::MAX as usize) as u16;
        self.start..=self.end.min(last)
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}
