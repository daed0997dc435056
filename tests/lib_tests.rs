use bytefreq::engine::{glob_match, is_excluded, resolve_root, should_include_in_walk};
use bytefreq::{Histogram, ScanStats};
use std::path::PathBuf;

// --- glob_match / should_include_in_walk ---

#[test]
fn test_glob_match_literal() {
    assert!(glob_match(".git", ".git"));
    assert!(!glob_match(".git", ".gitignore"));
}

#[test]
fn test_glob_match_star() {
    assert!(glob_match("*.log", "foo.log"));
    assert!(glob_match("*.log", ".log"));
    assert!(!glob_match("*.log", "foo.log.txt"));
    assert!(glob_match("target*", "target"));
    assert!(glob_match("a*b*c", "axxbyyc"));
    assert!(!glob_match("a*b*c", "axxbyy"));
}

#[test]
fn test_glob_match_question_mark() {
    assert!(glob_match("file?.bin", "file1.bin"));
    assert!(!glob_match("file?.bin", "file.bin"));
    assert!(!glob_match("file?.bin", "file12.bin"));
}

#[test]
fn test_should_include_root_excluded() {
    let root = PathBuf::from("/foo");
    assert!(!should_include_in_walk(&root, &root, &[]));
}

#[test]
fn test_should_include_plain_file() {
    let root = PathBuf::from("/foo");
    assert!(should_include_in_walk(
        &PathBuf::from("/foo/bar/.hidden"),
        &root,
        &[]
    ));
}

#[test]
fn test_should_include_exclude_pattern_name() {
    let root = PathBuf::from("/foo");
    let path = PathBuf::from("/foo/.git");
    assert!(!should_include_in_walk(&path, &root, &[".git".to_string()]));
}

#[test]
fn test_should_include_exclude_pattern_glob() {
    let root = PathBuf::from("/foo");
    let path = PathBuf::from("/foo/bar/baz.log");
    assert!(!should_include_in_walk(&path, &root, &["*.log".to_string()]));
    assert!(should_include_in_walk(
        &PathBuf::from("/foo/bar/baz.txt"),
        &root,
        &["*.log".to_string()]
    ));
}

#[test]
fn test_is_excluded_full_path_pattern() {
    let path = PathBuf::from("/foo/cache/blob");
    assert!(is_excluded(&path, &["*/cache/*".to_string()]));
    assert!(!is_excluded(&path, &[]));
}

// --- resolve_root ---

#[test]
fn test_resolve_root_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = resolve_root(&dir.path().join("nope")).unwrap_err();
    assert!(format!("{err:#}").contains("not found"));
}

#[test]
fn test_resolve_root_is_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("f");
    std::fs::write(&file, b"x").unwrap();
    assert!(resolve_root(&file).is_err());
}

#[test]
fn test_resolve_root_canonicalizes() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();
    let resolved = resolve_root(&dir.path().join("sub/../sub")).unwrap();
    assert_eq!(resolved, dir.path().join("sub").canonicalize().unwrap());
}

// --- Histogram / ScanStats ---

#[test]
fn test_histogram_collect_from_partials() {
    let parts: Vec<Histogram> = (0..4u8)
        .map(|i| {
            let mut h = Histogram::new();
            h.add_bytes(&vec![i; i as usize + 1]);
            h
        })
        .collect();
    let total: Histogram = parts.into_iter().collect();
    assert_eq!(total.total(), 1 + 2 + 3 + 4);
    assert_eq!(total[3], 4);
}

#[test]
fn test_scan_stats_add_assign() {
    let mut a = ScanStats {
        files_read: 1,
        files_skipped: 2,
        read_errors: 0,
    };
    a += ScanStats {
        files_read: 3,
        files_skipped: 0,
        read_errors: 1,
    };
    assert_eq!(
        a,
        ScanStats {
            files_read: 4,
            files_skipped: 2,
            read_errors: 1,
        }
    );
}
