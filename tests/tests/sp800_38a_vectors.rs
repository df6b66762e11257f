//! NIST SP 800-38A appendix F known-answer tests

use symkit_symmetric::Mode;
use symkit_tests::vectors::{load, SP800_38A};

#[test]
fn all_vectors_pass() {
    let mut failures = Vec::new();
    for vector in SP800_38A.iter() {
        if let Err(e) = vector.check() {
            failures.push(e.to_string());
        }
    }
    assert!(failures.is_empty(), "failing vectors:\n{}", failures.join("\n"));
}

#[test]
fn every_mode_and_key_size_is_covered() {
    for mode in Mode::ALL {
        let key_lengths: Vec<usize> = SP800_38A
            .iter()
            .filter(|v| v.mode().ok() == Some(mode))
            .map(|v| v.key.len() / 2)
            .collect();
        assert!(!key_lengths.is_empty(), "no vectors for {}", mode);
        assert!(key_lengths.contains(&16), "no AES-128 vector for {}", mode);
    }
}

#[test]
fn missing_file_reports_path() {
    let err = load("does_not_exist.json").unwrap_err();
    assert!(err.to_string().contains("does_not_exist.json"));
}
