#![allow(non_snake_case)]

use super::*;

#[test]
fn AnnotateError___missing_directory___displays_path() {
    let err = AnnotateError::MissingDirectory {
        path: PathBuf::from("/src/org/example"),
    };

    let display = err.to_string();

    assert_eq!(display, "directory /src/org/example does not exist");
}

#[test]
fn AnnotateError___malformed_entry___displays_offending_value() {
    let err = AnnotateError::MalformedSubInterfaceEntry("DocumentClinic".into());

    let display = err.to_string();

    assert!(display.contains("'DocumentClinic'"));
}

#[test]
fn AnnotateError___count_mismatch___displays_both_counts() {
    let err = AnnotateError::DirectoryCountMismatch {
        interfaces: 2,
        impls: 1,
    };

    let display = err.to_string();

    assert!(display.contains("2 interface directories"));
    assert!(display.contains("1 implementation directories"));
}

#[test]
fn AnnotateError___io___keeps_source() {
    let err = AnnotateError::io(
        "Foo.java",
        std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    );

    let source = std::error::Error::source(&err);

    assert!(source.is_some());
    assert!(err.to_string().starts_with("I/O error on Foo.java"));
}

#[test]
fn AnnotateError___from_toml_error___converts_to_invalid_config() {
    let toml_err = toml::from_str::<toml::Table>("not = [valid").unwrap_err();

    let err: AnnotateError = toml_err.into();

    assert!(matches!(err, AnnotateError::InvalidConfig(_)));
}
