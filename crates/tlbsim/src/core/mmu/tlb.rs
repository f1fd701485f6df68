//! Translation Lookaside Buffer (TLB).
//!
//! A fully associative cache of VPN to physical page translations. Recency is
//! tracked with a per-slot rank: 0 is the most recently used entry and larger
//! ranks are older. Ranks are relative, not a permutation. When a slot is
//! touched only the valid slots that were younger than it (smaller rank) age
//! by one, so two slots can share a rank. Eviction picks the slot with the
//! largest rank, lowest index first.
//!
//! Slots start invalid with rank equal to their index, which makes the first
//! fills land in the highest slots.

use log::trace;

use crate::common::error::{Result, SimError};

/// A single slot in the TLB.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TlbEntry {
    /// Virtual Page Number (Tag).
    vpn: u8,
    /// Physical Page Number (Data).
    ppn: u8,
    /// Slot holds a translation.
    valid: bool,
    /// Recency rank, 0 = most recently used.
    rank: u32,
}

impl TlbEntry {
    pub fn vpn(&self) -> u8 {
        self.vpn
    }

    pub fn ppn(&self) -> u8 {
        self.ppn
    }

    pub fn valid(&self) -> bool {
        self.valid
    }

    pub fn rank(&self) -> u32 {
        self.rank
    }
}

pub struct Tlb {
    entries: Vec<TlbEntry>,
}

impl Tlb {
    /// Creates a TLB with `size` invalid slots.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidTlbSize`] if `size` is zero and
    /// [`SimError::Allocation`] if the slot storage cannot be reserved.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(SimError::InvalidTlbSize(0));
        }

        let mut entries = Vec::new();
        entries
            .try_reserve_exact(size)
            .map_err(|_| SimError::Allocation { entries: size })?;
        entries.extend((0..size).map(|i| TlbEntry {
            rank: i as u32,
            ..TlbEntry::default()
        }));

        Ok(Self { entries })
    }

    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    pub fn entry(&self, slot: usize) -> &TlbEntry {
        &self.entries[slot]
    }

    pub fn entries(&self) -> &[TlbEntry] {
        &self.entries
    }

    /// Returns the first valid slot holding `vpn`, scanning from slot 0.
    pub fn find(&self, vpn: u16) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.valid && u16::from(entry.vpn) == vpn)
    }

    /// Marks `slot` as most recently used.
    ///
    /// Every other valid slot whose rank is strictly below the touched slot's
    /// previous rank is aged by one. Older slots keep their rank.
    pub fn touch(&mut self, slot: usize) {
        let old_rank = self.entries[slot].rank;
        self.entries[slot].rank = 0;

        for (i, entry) in self.entries.iter_mut().enumerate() {
            if i != slot && entry.valid && entry.rank < old_rank {
                entry.rank += 1;
            }
        }
        trace!("tlb: touch slot {} (was rank {})", slot, old_rank);
    }

    /// Installs a translation in the slot with the largest rank and touches
    /// it. Ties go to the lowest slot index. Returns the slot used.
    pub fn insert_and_evict(&mut self, vpn: u16, ppn: u8) -> usize {
        let mut victim = 0;
        for i in 1..self.entries.len() {
            if self.entries[i].rank > self.entries[victim].rank {
                victim = i;
            }
        }

        let old = self.entries[victim];
        if old.valid {
            trace!(
                "tlb: evict vpn {} from slot {} (rank {})",
                old.vpn, victim, old.rank
            );
        }

        let entry = &mut self.entries[victim];
        entry.valid = true;
        entry.vpn = vpn as u8;
        entry.ppn = ppn;
        self.touch(victim);
        victim
    }
}
