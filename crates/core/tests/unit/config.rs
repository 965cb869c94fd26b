//! # Configuration Tests
//!
//! Tests for configuration structures, deserialization, defaults, algorithm
//! name parsing, and validation.

use std::str::FromStr;

use pagesim_core::common::SimError;
use pagesim_core::config::{PolicyKind, SimConfig};

#[test]
fn default_for_fills_in_defaults() {
    let config = SimConfig::default_for(PolicyKind::Lru, 4);
    assert_eq!(config.num_frames, 4);
    assert_eq!(config.page_size, 10);
    assert_eq!(config.policy, PolicyKind::Lru);
    assert_eq!(config.seed, None);
    assert!(config.validate().is_ok());
}

#[test]
fn deserializes_from_json() {
    let json = r#"{
        "num_frames": 8,
        "page_size": 4096,
        "policy": "LRU",
        "seed": 42
    }"#;
    let config: SimConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.num_frames, 8);
    assert_eq!(config.page_size, 4096);
    assert_eq!(config.policy, PolicyKind::Lru);
    assert_eq!(config.seed, Some(42));
}

#[test]
fn missing_fields_use_serde_defaults() {
    let config: SimConfig = serde_json::from_str(r#"{"num_frames": 2}"#).unwrap();
    assert_eq!(config.page_size, 10);
    assert_eq!(config.policy, PolicyKind::Fifo);
    assert_eq!(config.seed, None);
}

#[test]
fn policy_aliases_deserialize() {
    for (name, kind) in [
        (r#""FIFO""#, PolicyKind::Fifo),
        (r#""Fifo""#, PolicyKind::Fifo),
        (r#""LRU""#, PolicyKind::Lru),
        (r#""RANDOM""#, PolicyKind::Random),
        (r#""Random""#, PolicyKind::Random),
        (r#""OPTIMAL""#, PolicyKind::Optimal),
        (r#""OPT""#, PolicyKind::Optimal),
    ] {
        let parsed: PolicyKind = serde_json::from_str(name).unwrap();
        assert_eq!(parsed, kind, "alias {name} should deserialize");
    }
}

#[test]
fn from_str_accepts_cli_spellings() {
    assert_eq!(PolicyKind::from_str("FIFO").unwrap(), PolicyKind::Fifo);
    assert_eq!(PolicyKind::from_str("lru").unwrap(), PolicyKind::Lru);
    assert_eq!(PolicyKind::from_str("Random").unwrap(), PolicyKind::Random);
    assert_eq!(PolicyKind::from_str("OPT").unwrap(), PolicyKind::Optimal);
    assert_eq!(PolicyKind::from_str("optimal").unwrap(), PolicyKind::Optimal);
}

#[test]
fn unknown_algorithm_is_unsupported() {
    let err = PolicyKind::from_str("CLOCK").unwrap_err();
    assert!(matches!(err, SimError::UnsupportedPolicy(ref name) if name == "CLOCK"));
    assert!(err.to_string().contains("CLOCK"));
}

#[test]
fn display_uses_canonical_names() {
    assert_eq!(PolicyKind::Fifo.to_string(), "FIFO");
    assert_eq!(PolicyKind::Lru.to_string(), "LRU");
    assert_eq!(PolicyKind::Random.to_string(), "Random");
    assert_eq!(PolicyKind::Optimal.to_string(), "OPT");
}

#[test]
fn validate_rejects_zero_frames() {
    let config = SimConfig::default_for(PolicyKind::Fifo, 0);
    assert!(matches!(config.validate(), Err(SimError::InvalidFrameCount)));
}

#[test]
fn validate_rejects_zero_page_size() {
    let mut config = SimConfig::default_for(PolicyKind::Fifo, 4);
    config.page_size = 0;
    assert!(matches!(config.validate(), Err(SimError::InvalidPageSize)));
}
