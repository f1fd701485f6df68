use std::io::Write;

use tempfile::NamedTempFile;
use tlbsim::config::{Config, parse_tlb_size};
use tlbsim::SimError;

#[test]
fn test_config_round_trips_through_json() {
    let config = Config::with_tlb_size(6);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(serde_json::from_str::<Config>(&json).unwrap(), config);
}

#[test]
fn test_missing_config_file() {
    let err = Config::from_json_file("/nonexistent/tlbsim.json").unwrap_err();
    assert!(matches!(err, SimError::ConfigRead { .. }));
}

#[test]
fn test_unknown_fields_ignored() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "tlb": {{ "size": 3 }}, "comment": "small" }}"#).unwrap();
    assert_eq!(Config::from_json_file(file.path()).unwrap().tlb.size, 3);
}

#[test]
fn test_size_argument_overflow_rejected() {
    assert!(parse_tlb_size("99999999999999999999999").is_err());
}
