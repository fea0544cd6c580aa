//! `show` and `check` command implementations.

use anyhow::{Context, Result};
use oc_interfaces::{render, Interface, Interfaces, OutputFormat};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

/// How a stored document differs from the built snapshot at one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifferenceKind {
    /// Present in the snapshot, absent from the document.
    Missing,
    /// Present in the document, absent from the snapshot.
    Unexpected,
    /// Present in both with different contents.
    Changed,
}

/// A single difference, addressed as `interface` or `interface.index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difference {
    pub path: String,
    pub kind: DifferenceKind,
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            DifferenceKind::Missing => "missing",
            DifferenceKind::Unexpected => "unexpected",
            DifferenceKind::Changed => "changed",
        };
        write!(f, "{}: {}", self.path, kind)
    }
}

/// Result of checking a document against the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Document equals the snapshot.
    Match,
    /// Document differs; differences are in path order.
    Differs(Vec<Difference>),
}

impl CheckOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, CheckOutcome::Match)
    }
}

/// Renders `interfaces` to `output`, or to stdout when `output` is `None`.
pub fn show(
    interfaces: &Interfaces,
    format: OutputFormat,
    pretty: bool,
    output: Option<&Path>,
) -> Result<()> {
    let mut rendered = render::render(interfaces, format, pretty)
        .with_context(|| format!("Failed to render interfaces as {}", format))?;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    match output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} document to {}", format, path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }
    Ok(())
}

/// Decodes the document at `path` and compares it with `expected`.
///
/// The format is taken from `format`, else inferred from the file extension.
pub fn check(
    expected: &Interfaces,
    path: &Path,
    format: Option<OutputFormat>,
) -> Result<CheckOutcome> {
    let format = format
        .or_else(|| OutputFormat::from_path(path))
        .with_context(|| {
            format!(
                "Cannot infer document format from {}, pass --format",
                path.display()
            )
        })?;
    debug!("Checking {} as {}", path.display(), format);

    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let actual = render::parse(&content, format)
        .with_context(|| format!("Invalid interfaces document {}", path.display()))?;

    let outcome = compare(expected, &actual);
    match &outcome {
        CheckOutcome::Match => info!("{} matches the PE snapshot", path.display()),
        CheckOutcome::Differs(differences) => {
            for difference in differences {
                warn!("{}", difference);
            }
        }
    }
    Ok(outcome)
}

/// Compares two trees at interface and subinterface granularity.
pub fn compare(expected: &Interfaces, actual: &Interfaces) -> CheckOutcome {
    let mut differences = Vec::new();

    for interface in expected.iter() {
        match actual.get(interface.name()) {
            None => differences.push(Difference {
                path: interface.name().to_string(),
                kind: DifferenceKind::Missing,
            }),
            Some(other) if other != interface => {
                compare_interface(interface, other, &mut differences);
            }
            Some(_) => {}
        }
    }

    for name in actual.names() {
        if expected.get(name).is_none() {
            differences.push(Difference {
                path: name.to_string(),
                kind: DifferenceKind::Unexpected,
            });
        }
    }

    if differences.is_empty() {
        CheckOutcome::Match
    } else {
        differences.sort_by(|a, b| a.path.cmp(&b.path));
        CheckOutcome::Differs(differences)
    }
}

fn compare_interface(expected: &Interface, actual: &Interface, differences: &mut Vec<Difference>) {
    let name = expected.name();

    if expected.config() != actual.config() {
        differences.push(Difference {
            path: name.to_string(),
            kind: DifferenceKind::Changed,
        });
    }

    for sub in expected.subinterfaces().iter() {
        let kind = match actual.subinterface(sub.index()) {
            None => DifferenceKind::Missing,
            Some(other) if other != sub => DifferenceKind::Changed,
            Some(_) => continue,
        };
        differences.push(Difference {
            path: format!("{}.{}", name, sub.index()),
            kind,
        });
    }

    for index in actual.subinterfaces().indices() {
        if expected.subinterface(index).is_none() {
            differences.push(Difference {
                path: format!("{}.{}", name, index),
                kind: DifferenceKind::Unexpected,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oc_interfaces::{
        pe_interfaces, InterfaceBuilder, InterfaceType, SubinterfaceBuilder, VlanId,
        PE_INTERFACE_NAME,
    };
    use pretty_assertions::assert_eq;

    fn pe_with(subinterfaces: &[(u32, u16)]) -> Interfaces {
        let builder = subinterfaces.iter().fold(
            InterfaceBuilder::new(PE_INTERFACE_NAME, InterfaceType::Ethernet)
                .description("PE Interface 1"),
            |builder, &(index, vlan)| {
                builder.subinterface(
                    SubinterfaceBuilder::new(index)
                        .vlan(VlanId::new(vlan).unwrap())
                        .build(),
                )
            },
        );
        std::iter::once(builder.build()).collect()
    }

    #[test]
    fn test_compare_identical() {
        assert_eq!(compare(&pe_interfaces(), &pe_interfaces()), CheckOutcome::Match);
    }

    #[test]
    fn test_compare_subinterface_changes() {
        let expected = pe_with(&[(1, 10), (2, 20)]);
        let actual = pe_with(&[(2, 21), (3, 30)]);

        assert_eq!(
            compare(&expected, &actual),
            CheckOutcome::Differs(vec![
                Difference {
                    path: "g0/0/0.1".to_string(),
                    kind: DifferenceKind::Missing
                },
                Difference {
                    path: "g0/0/0.2".to_string(),
                    kind: DifferenceKind::Changed
                },
                Difference {
                    path: "g0/0/0.3".to_string(),
                    kind: DifferenceKind::Unexpected
                },
            ])
        );
    }

    #[test]
    fn test_compare_interface_sets() {
        let loopback = InterfaceBuilder::new("lo0", InterfaceType::Loopback).build();
        let actual: Interfaces = std::iter::once(loopback).collect();

        match compare(&pe_interfaces(), &actual) {
            CheckOutcome::Differs(differences) => {
                let rendered: Vec<String> = differences.iter().map(ToString::to_string).collect();
                assert_eq!(rendered, vec!["g0/0/0: missing", "lo0: unexpected"]);
            }
            CheckOutcome::Match => panic!("Expected differences"),
        }
    }

    #[test]
    fn test_compare_config_change() {
        let actual: Interfaces = std::iter::once(
            InterfaceBuilder::new(PE_INTERFACE_NAME, InterfaceType::Ethernet)
                .description("renamed")
                .build(),
        )
        .collect();
        let expected: Interfaces = std::iter::once(
            InterfaceBuilder::new(PE_INTERFACE_NAME, InterfaceType::Ethernet)
                .description("PE Interface 1")
                .build(),
        )
        .collect();

        assert_eq!(
            compare(&expected, &actual),
            CheckOutcome::Differs(vec![Difference {
                path: "g0/0/0".to_string(),
                kind: DifferenceKind::Changed
            }])
        );
    }

    #[test]
    fn test_show_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pe.yaml");

        show(&pe_interfaces(), OutputFormat::Yaml, true, Some(&path)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.ends_with('\n'));
        assert_eq!(render::from_yaml(&content).unwrap(), pe_interfaces());
    }

    #[test]
    fn test_check_infers_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pe.json");
        show(&pe_interfaces(), OutputFormat::Json, false, Some(&path)).unwrap();

        let outcome = check(&pe_interfaces(), &path, None).unwrap();
        assert!(outcome.is_match());
    }

    #[test]
    fn test_check_unknown_extension_needs_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pe.doc");
        show(&pe_interfaces(), OutputFormat::Yaml, true, Some(&path)).unwrap();

        assert!(check(&pe_interfaces(), &path, None).is_err());
        assert!(check(&pe_interfaces(), &path, Some(OutputFormat::Yaml))
            .unwrap()
            .is_match());
    }
}
