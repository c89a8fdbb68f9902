//! Integration tests for joining and resolving paths.
//!
//! These use the host platform's separator throughout, so they hold on every
//! platform the crate builds for.

mod common;

use common::{native, TreeFixture};
use pathwise::PathOps;
use std::path::MAIN_SEPARATOR_STR as SEP;

#[test]
fn test_slash_joins_at_separator_boundaries() {
    let ops = PathOps::new();
    let prepend = format!("star{SEP}trek{SEP}");
    let append = format!("{SEP}enterprise");

    assert_eq!(
        ops.slash([prepend.as_str(), append.as_str()]),
        Some(native(&["star", "trek", "enterprise"]))
    );
}

#[test]
fn test_slash_with_vector_of_segments() {
    let ops = PathOps::new();
    let segments = vec!["usr".to_string(), "local".to_string(), "bin".to_string()];

    assert_eq!(ops.slash(&segments), Some(native(&["usr", "local", "bin"])));
}

#[test]
fn test_resolve_relative() {
    let ops = PathOps::new();
    let path = native(&["star", "wars", "..", "trek"]);

    assert_eq!(ops.resolve(&path, false), native(&["star", "trek"]));
}

#[test]
fn test_resolve_absolute() {
    let ops = PathOps::new();
    let path = format!("{SEP}{}", native(&["star", "wars", "..", "trek"]));
    let expected = format!("{SEP}{}", native(&["star", "trek"]));

    assert_eq!(ops.resolve(&path, true), expected);
    assert_eq!(ops.resolve(&path, false), expected);
}

#[test]
fn test_resolve_real_with_working_dir() {
    let fixture = TreeFixture::new();
    let ops = PathOps::new();
    let path = native(&["files", "star", "wars", "..", "trek"]);

    assert_eq!(
        ops.resolve_real(&path, Some(fixture.root_str())),
        Some(fixture.canonical("files/star/trek"))
    );
}

#[test]
fn test_resolve_real_full_path() {
    let fixture = TreeFixture::new();
    let ops = PathOps::new();
    let path = format!(
        "{}{SEP}{}",
        fixture.root_str(),
        native(&["files", "star", "wars", "..", "trek"])
    );

    assert_eq!(
        ops.resolve_real(&path, None),
        Some(fixture.canonical("files/star/trek"))
    );
}

#[test]
fn test_resolve_real_missing_is_none() {
    let fixture = TreeFixture::new();
    let ops = PathOps::new();

    assert_eq!(
        ops.resolve_real(&native(&["files", "star", "gate"]), Some(fixture.root_str())),
        None
    );
}

#[test]
fn test_try_resolve_real_reports_missing_path() {
    let fixture = TreeFixture::new();
    let ops = PathOps::new();

    let err = ops
        .try_resolve_real("files/star/gate", Some(fixture.root_str()))
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_resolve_real_is_absolute() {
    let fixture = TreeFixture::new();
    let ops = PathOps::new();

    let real = ops
        .resolve_real("files/star/wars/falcon.txt", Some(fixture.root_str()))
        .unwrap();
    assert!(std::path::Path::new(&real).is_absolute());
}
