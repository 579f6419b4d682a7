//! Fixture files on disk: load, save, and verify.

use super::common::handwritten_fixtures;
use nestcheck::{
    generate, verify_fixtures, Error, Fixture, FixtureFile, GeneratorConfig, Provenance,
    Validator, Verdict,
};

#[test]
fn test_handwritten_fixtures_all_pass() {
    let file = FixtureFile::load(&handwritten_fixtures()).unwrap();
    assert!(!file.is_empty());

    let report = verify_fixtures(&Validator::default(), &file.fixtures());
    assert!(report.is_success(), "failures: {:?}", report.failures);
    assert_eq!(report.total, file.len());
    assert!(report.by_provenance.contains_key("pdf-example"));
}

#[test]
fn test_save_and_load_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixtures.json");

    let original = generate(&GeneratorConfig::default()).unwrap();
    original.save(&path).unwrap();
    let loaded = FixtureFile::load(&path).unwrap();

    assert_eq!(loaded, original);
}

#[test]
fn test_load_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = FixtureFile::load(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, Error::Read { .. }), "got {:?}", err);
}

#[test]
fn test_load_malformed_file_is_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "not json").unwrap();
    let err = FixtureFile::load(&path).unwrap_err();
    assert!(matches!(err, Error::Json(_)), "got {:?}", err);
}

#[test]
fn test_generated_file_covers_every_provenance() {
    let config = GeneratorConfig {
        big_length: Some(2_000),
        ..GeneratorConfig::default()
    };
    let fixtures = generate(&config).unwrap().fixtures();
    for provenance in [
        Provenance::Basic,
        Provenance::Mismatched,
        Provenance::Truncated,
        Provenance::Reflected,
        Provenance::Sorted,
        Provenance::Substituted,
        Provenance::PdfExample,
        Provenance::Big,
    ] {
        assert!(
            fixtures.iter().any(|f| f.provenance == Some(provenance)),
            "no {} fixture generated",
            provenance
        );
    }
}

#[test]
fn test_big_fixtures_verify() {
    let config = GeneratorConfig {
        big_length: Some(400_000),
        max_length: 0,
        ..GeneratorConfig::default()
    };
    let fixtures = generate(&config).unwrap().fixtures();
    let big: Vec<Fixture> = fixtures
        .into_iter()
        .filter(|f| f.provenance == Some(Provenance::Big))
        .collect();
    assert_eq!(big.len(), 2);
    assert!(big.iter().any(|f| f.expected == Verdict::Valid));
    assert!(big.iter().any(|f| f.expected == Verdict::Invalid));

    let report = verify_fixtures(&Validator::default(), &big);
    assert!(report.is_success());
}

#[test]
fn test_from_fixtures_groups_by_verdict() {
    let file = FixtureFile::from_fixtures(vec![
        Fixture::invalid("(]", Provenance::Mismatched),
        Fixture::valid("()", Provenance::Basic),
        Fixture::invalid(")(", Provenance::Basic),
    ]);
    assert_eq!(file.valid.len(), 1);
    assert_eq!(file.invalid.len(), 2);
    assert_eq!(file.invalid[0].0, "(]");

    let fixtures = file.fixtures();
    assert_eq!(fixtures[0].expected, Verdict::Valid);
    assert_eq!(fixtures[1].input, "(]");
}
