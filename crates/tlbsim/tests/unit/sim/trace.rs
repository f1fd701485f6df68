use std::io::Cursor;

use tlbsim::sim::trace::{StopReason, TraceReader, parse_address};
use tlbsim::{AccessRequest, Config, SimStats, Simulator};

#[test]
fn test_reader_is_lazy() {
    // The malformed second record is only reached after the first is taken.
    let mut reader = TraceReader::new(Cursor::new("4000 8\n!! 1\n"));
    assert_eq!(reader.next(), Some(AccessRequest::new(0x4000, 8)));
    assert_eq!(reader.stop_reason(), None);
    assert_eq!(reader.next(), None);
    assert!(matches!(
        reader.stop_reason(),
        Some(StopReason::Malformed { record: 2, .. })
    ));
}

#[test]
fn test_tabs_and_crlf() {
    let reader = TraceReader::new(Cursor::new("0x1000\t4\r\n0x2000\t-2\r\n"));
    let records: Vec<_> = reader.collect();
    assert_eq!(
        records,
        vec![AccessRequest::new(0x1000, 4), AccessRequest::new(0x2000, -2)]
    );
}

#[test]
fn test_size_must_be_decimal() {
    let records: Vec<_> = TraceReader::new(Cursor::new("1000 1f\n")).collect();
    assert!(records.is_empty());
}

#[test]
fn test_address_wider_than_sixteen_bits_wraps() {
    assert_eq!(parse_address("0x1F000"), Some(0xF000));
}

#[test]
fn test_non_utf8_byte_after_good_records_keeps_counts() {
    let mut reader = TraceReader::new(Cursor::new(b"0000 1 2000 1 \xff\n".to_vec()));
    let mut sim = Simulator::new(&Config::default()).unwrap();

    let stats = sim.run(reader.by_ref());
    assert_eq!(
        stats,
        SimStats {
            tlb_hits: 0,
            tlb_misses: 2,
            seg_faults: 0,
        }
    );
    assert!(matches!(
        reader.stop_reason(),
        Some(StopReason::Malformed { record: 3, .. })
    ));
}

#[test]
fn test_non_utf8_size_token_is_malformed() {
    let mut reader = TraceReader::new(Cursor::new(b"4000 8 4000 \xc3(\n".to_vec()));
    assert_eq!(reader.next(), Some(AccessRequest::new(0x4000, 8)));
    assert_eq!(reader.next(), None);
    assert!(matches!(
        reader.stop_reason(),
        Some(StopReason::Malformed { record: 2, .. })
    ));
}

#[test]
fn test_signed_address_tokens() {
    let records: Vec<_> = TraceReader::new(Cursor::new("-10 1 +2000 4\n")).collect();
    assert_eq!(
        records,
        vec![AccessRequest::new(0xfff0, 1), AccessRequest::new(0x2000, 4)]
    );
}
