use pretty_assertions::assert_eq;
use tlbsim::SimError;
use tlbsim::core::mmu::tlb::Tlb;

fn ranks(tlb: &Tlb) -> Vec<u32> {
    tlb.entries().iter().map(|e| e.rank()).collect()
}

#[test]
fn test_touching_rank_zero_ages_nobody() {
    let mut tlb = Tlb::new(2).unwrap();
    tlb.insert_and_evict(0, 0);
    tlb.insert_and_evict(2, 2);
    assert_eq!(ranks(&tlb), vec![0, 0]);

    // Touching a rank-0 slot ages nobody.
    tlb.touch(1);
    assert_eq!(ranks(&tlb), vec![0, 0]);
}

#[test]
fn test_touch_older_slot() {
    let mut tlb = Tlb::new(4).unwrap();
    tlb.insert_and_evict(0, 0); // slot 3
    tlb.insert_and_evict(2, 2); // slot 2
    assert_eq!(ranks(&tlb), vec![0, 1, 0, 1]);

    // Slot 3 had rank 1: slot 2 ages, invalid slots do not.
    tlb.touch(3);
    assert_eq!(ranks(&tlb), vec![0, 1, 1, 0]);
}

#[test]
fn test_insert_returns_slot_found_by_lookup() {
    let mut tlb = Tlb::new(3).unwrap();
    let slot = tlb.insert_and_evict(10, 10);
    assert_eq!(tlb.find(10), Some(slot));
    assert!(tlb.entry(slot).valid());
    assert_eq!(tlb.entry(slot).vpn(), 10);
    assert_eq!(tlb.entry(slot).ppn(), 10);
    assert_eq!(tlb.entry(slot).rank(), 0);
}

#[test]
fn test_vpn_outside_table_never_matches() {
    let mut tlb = Tlb::new(1).unwrap();
    tlb.insert_and_evict(4, 4);
    assert_eq!(tlb.find(4 + 256), None);
}

#[test]
fn test_large_capacity_allocates() {
    let tlb = Tlb::new(1024).unwrap();
    assert_eq!(tlb.capacity(), 1024);
}

#[test]
fn test_impossible_capacity_is_allocation_error() {
    let err = Tlb::new(usize::MAX).err().unwrap();
    assert!(matches!(err, SimError::Allocation { .. }));
}
