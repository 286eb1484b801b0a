use crate::brick::error::BrickError;
use crate::brick::host_path::parse_host_and_brick_path;
use crate::brick::path_length::{
    clean_path, resolve_brick_path, validate_brick_path_length, validate_brick_subdir_length,
    PATH_MAX, POSIX_PATH_MAX,
};
use std::path::{Path, PathBuf};

#[test]
fn test_clean_path() {
    assert_eq!(clean_path(Path::new("/mnt//disk1/./brick1/")), PathBuf::from("/mnt/disk1/brick1"));
    assert_eq!(clean_path(Path::new("/mnt/disk1/../disk2")), PathBuf::from("/mnt/disk2"));
    assert_eq!(clean_path(Path::new("/../../mnt")), PathBuf::from("/mnt"));
    assert_eq!(clean_path(Path::new("a/..")), PathBuf::from("."));
    assert_eq!(clean_path(Path::new("../a")), PathBuf::from("../a"));
    assert_eq!(clean_path(Path::new("")), PathBuf::from("."));
}

#[test]
fn test_resolve_relative_brick_path() {
    let resolved = resolve_brick_path(Path::new("bricks/./b1")).unwrap();
    assert!(resolved.is_absolute());
    assert!(resolved.ends_with("bricks/b1"));
}

#[test]
fn test_path_length_limit() {
    // 1000 segments of "abcd" -> 5000 bytes once cleaned.
    let long = format!("/{}", "abcd/".repeat(1000));
    let err = validate_brick_path_length(Path::new(&long)).unwrap_err();
    assert!(matches!(err, BrickError::BrickPathTooLong { len: 5000, .. }), "got {err:?}");
    // Segments are all short, so only the aggregate check fires.
    assert!(validate_brick_subdir_length(Path::new(&long)).is_ok());

    let exact = format!("/{}", "a".repeat(PATH_MAX - 1));
    assert!(validate_brick_path_length(Path::new(&exact)).is_err());
    let under = format!("/{}", "a".repeat(PATH_MAX - 2));
    assert!(validate_brick_path_length(Path::new(&under)).is_ok());
}

#[test]
fn test_length_is_measured_after_cleaning() {
    let padded = format!("/mnt{}disk1", "/".repeat(PATH_MAX));
    assert!(validate_brick_path_length(Path::new(&padded)).is_ok());
}

#[test]
fn test_subdir_length_limit() {
    let seg = "x".repeat(POSIX_PATH_MAX);
    let err = validate_brick_subdir_length(Path::new(&format!("/mnt/{seg}/brick"))).unwrap_err();
    assert!(matches!(err, BrickError::SubDirPathTooLong { len, .. } if len == POSIX_PATH_MAX));

    let ok = "x".repeat(POSIX_PATH_MAX - 1);
    assert!(validate_brick_subdir_length(Path::new(&format!("/mnt/{ok}/brick"))).is_ok());
}

#[test]
fn test_parse_host_and_brick_path() {
    assert_eq!(parse_host_and_brick_path("node1:/mnt/disk1/b1").unwrap(), ("node1", "/mnt/disk1/b1"));
    // IPv6 style hosts keep everything before the last colon.
    assert_eq!(parse_host_and_brick_path("[::1]:/b").unwrap(), ("[::1]", "/b"));

    for bad in ["/mnt/disk1/b1", ":/mnt/b1", "node1:"] {
        let err = parse_host_and_brick_path(bad).unwrap_err();
        assert_eq!(err.code(), "invalid_brick_path", "input {bad}");
    }
}
