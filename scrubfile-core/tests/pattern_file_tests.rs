// scrubfile-core/tests/pattern_file_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use scrubfile_core::{headless_sanitize_string, merge_patterns, PatternFile};

fn yaml_file(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[test]
fn test_load_patterns_from_file() -> Result<()> {
    let file = yaml_file(
        r#"
patterns:
  - '[0-9]{16}'
  - '[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}'
"#,
    )?;
    let loaded = PatternFile::load_from_file(file.path())?;
    assert_eq!(loaded.patterns.len(), 2);
    assert_eq!(loaded.patterns[0], "[0-9]{16}");
    assert_eq!(loaded.patterns[1], r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}");
    Ok(())
}

#[test]
fn test_empty_pattern_list_is_pass_through() -> Result<()> {
    let file = yaml_file("patterns: []\n")?;
    let loaded = PatternFile::load_from_file(file.path())?;
    assert!(loaded.patterns.is_empty());

    let patterns = merge_patterns(Some(loaded), Vec::new());
    let out = headless_sanitize_string("keep me", &patterns, true)?;
    assert_eq!(out, "keep me");
    Ok(())
}

#[test]
fn test_unknown_keys_are_rejected() -> Result<()> {
    let file = yaml_file("patterns: ['a']\nreplacement: 'X'\n")?;
    let err = PatternFile::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse patterns file"));
    Ok(())
}

#[test]
fn test_missing_pattern_file_reports_path() {
    let err = PatternFile::load_from_file("/definitely/not/here.yaml").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.yaml"));
}

#[test]
fn test_file_patterns_run_before_cli_patterns() -> Result<()> {
    let file = yaml_file("patterns: ['secret']\n")?;
    let loaded = PatternFile::load_from_file(file.path())?;
    let patterns = merge_patterns(Some(loaded), vec!["REDACTED".to_string()]);

    let out = headless_sanitize_string("a secret", &patterns, true)?;
    assert_eq!(out, "a [[REDACTED]]");
    Ok(())
}
