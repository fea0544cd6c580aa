//! Exit status of whole invocations

use clap::Parser;
use oc_ifgen::{cli, Args, OcifgenConfig, OutputConfig, Status};
use oc_interfaces::{pe_interfaces, render, OutputFormat};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

fn args(argv: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("ocifgen").chain(argv.iter().copied())).unwrap()
}

fn invoke(argv: &[&str]) -> Status {
    cli::execute(&args(argv), &OcifgenConfig::default())
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_show_then_check_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pe.json");

    assert_eq!(invoke(&["show", "-o", path_arg(&path)]), Status::Success);
    assert_eq!(invoke(&["check", path_arg(&path)]), Status::Success);
}

#[test]
fn test_check_reports_difference() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pe.yaml");
    assert_eq!(invoke(&["show", "-f", "yaml", "-o", path_arg(&path)]), Status::Success);

    let edited = fs::read_to_string(&path)
        .unwrap()
        .replace("cyan VLAN instance in L2P2P", "cyan VLAN instance in L2VSI");
    fs::write(&path, edited).unwrap();

    assert_eq!(invoke(&["check", path_arg(&path)]), Status::Differs);
    assert_eq!(Status::Differs.code(), 1);
}

#[test]
fn test_check_failures() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("absent.json");
    assert_eq!(invoke(&["check", path_arg(&missing)]), Status::Failure);

    let unknown_extension = dir.path().join("pe.doc");
    fs::write(&unknown_extension, "{}").unwrap();
    assert_eq!(invoke(&["check", path_arg(&unknown_extension)]), Status::Failure);

    let malformed = dir.path().join("pe.json");
    fs::write(&malformed, "{\"openconfig-interfaces:interfaces\":").unwrap();
    assert_eq!(invoke(&["check", path_arg(&malformed)]), Status::Failure);
    assert_eq!(Status::Failure.code(), 2);
}

#[test]
fn test_show_uses_config_format_unless_flagged() {
    let dir = tempfile::tempdir().unwrap();
    let config = OcifgenConfig {
        output: OutputConfig {
            format: OutputFormat::Yaml,
            pretty: true,
        },
        ..OcifgenConfig::default()
    };

    let from_config = dir.path().join("from-config.out");
    let status = cli::execute(&args(&["show", "-o", path_arg(&from_config)]), &config);
    assert_eq!(status, Status::Success);
    let content = fs::read_to_string(&from_config).unwrap();
    assert_eq!(render::from_yaml(&content).unwrap(), pe_interfaces());
    assert!(render::from_json(&content).is_err());

    let from_flag = dir.path().join("from-flag.out");
    let argv = ["show", "-f", "json", "--compact", "-o", path_arg(&from_flag)];
    assert_eq!(cli::execute(&args(&argv), &config), Status::Success);
    let content = fs::read_to_string(&from_flag).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert_eq!(render::from_json(&content).unwrap(), pe_interfaces());
}

#[test]
fn test_explicit_config_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("ocifgen.toml");
    assert!(args(&["-c", path_arg(&missing), "show"]).load_config().is_err());

    fs::write(&missing, "[logging]\nlevel = \"debug\"\n").unwrap();
    let config = args(&["-c", path_arg(&missing), "show"]).load_config().unwrap();
    assert_eq!(config.logging.level, "debug");
}
