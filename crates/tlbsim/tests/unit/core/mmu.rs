use tlbsim::core::mmu::page_table::{PageTable, PageTableEntry};
use tlbsim::{AccessOutcome, AccessRequest, Config, Mmu};

#[test]
fn test_whole_page_access_hits_resident_page() {
    let mut mmu = Mmu::new(&Config::default()).unwrap();
    mmu.translate(AccessRequest::new(0x2000, 1));

    // 0x2000..=0x2FFF stays inside page 2.
    let outcome = mmu.translate(AccessRequest::new(0x2000, 0x1000));
    assert_eq!(outcome, AccessOutcome::Translated { hits: 1, misses: 0 });
}

#[test]
fn test_custom_table_multi_page() {
    let entries = std::array::from_fn(|vpn| PageTableEntry::new(true, vpn as u8));
    let mut mmu = Mmu::with_page_table(PageTable::from_entries(entries), &Config::default())
        .unwrap();
    mmu.translate(AccessRequest::new(0x3000, 1));

    let outcome = mmu.translate(AccessRequest::new(0x2800, 0x1000));
    assert_eq!(outcome, AccessOutcome::Translated { hits: 1, misses: 1 });
}

#[test]
fn test_translation_installs_frame_from_page_table() {
    let entries = std::array::from_fn(|vpn| PageTableEntry::new(true, (vpn as u8) ^ 0xF));
    let mut mmu = Mmu::with_page_table(PageTable::from_entries(entries), &Config::default())
        .unwrap();
    mmu.translate(AccessRequest::new(0x5000, 1));

    let slot = mmu.tlb.find(5).unwrap();
    assert_eq!(mmu.tlb.entry(slot).ppn(), 10);
}
