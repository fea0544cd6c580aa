//! Checks stored documents against the PE snapshot

use oc_ifgen::commands::{check, show};
use oc_ifgen::{CheckOutcome, DifferenceKind};
use oc_interfaces::{pe_interfaces, OutputFormat};
use pretty_assertions::assert_eq;
use std::fs;

#[test]
fn test_rendered_snapshot_checks_clean() {
    let dir = tempfile::tempdir().unwrap();

    for (file, format) in [("pe.json", OutputFormat::Json), ("pe.yaml", OutputFormat::Yaml)] {
        let path = dir.path().join(file);
        show(&pe_interfaces(), format, true, Some(&path)).unwrap();
        assert_eq!(
            check(&pe_interfaces(), &path, None).unwrap(),
            CheckOutcome::Match
        );
    }
}

#[test]
fn test_edited_description_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pe.json");
    show(&pe_interfaces(), OutputFormat::Json, true, Some(&path)).unwrap();

    let edited = fs::read_to_string(&path)
        .unwrap()
        .replace("blue VLAN instance in L2VSI", "blue VLAN instance in L3VPN");
    fs::write(&path, edited).unwrap();

    match check(&pe_interfaces(), &path, None).unwrap() {
        CheckOutcome::Differs(differences) => {
            assert_eq!(differences.len(), 1);
            assert_eq!(differences[0].path, "g0/0/0.1400");
            assert_eq!(differences[0].kind, DifferenceKind::Changed);
        }
        CheckOutcome::Match => panic!("Expected a difference"),
    }
}

#[test]
fn test_invalid_document_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pe.json");
    show(&pe_interfaces(), OutputFormat::Json, false, Some(&path)).unwrap();

    let broken = fs::read_to_string(&path)
        .unwrap()
        .replace("\"vlan-id\":1500", "\"vlan-id\":4095");
    fs::write(&path, broken).unwrap();

    let err = check(&pe_interfaces(), &path, None).unwrap_err();
    assert!(format!("{:#}", err).contains("Invalid interfaces document"));
}

#[test]
fn test_unknown_member_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pe.json");
    show(&pe_interfaces(), OutputFormat::Json, false, Some(&path)).unwrap();

    let extended = fs::read_to_string(&path).unwrap().replace(
        "\"config\":{\"name\":\"g0/0/0\",",
        "\"config\":{\"name\":\"g0/0/0\",\"mtu-typo\":9000,",
    );
    fs::write(&path, extended).unwrap();

    let err = check(&pe_interfaces(), &path, None).unwrap_err();
    assert!(format!("{:#}", err).contains("unknown field `mtu-typo`"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(check(&pe_interfaces(), &dir.path().join("absent.json"), None).is_err());
}
