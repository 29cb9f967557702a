//! Integration tests for loading cleaner configs from disk.

use std::fs;

use scour::config::CleanerConfig;
use scour::error::{Result, ScourError};
use tempfile::TempDir;

#[test]
fn test_config_file_with_relative_stopwords_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("stopwords.txt"),
        "# phrases to drop\ngood and bad\nthe\n",
    )?;
    fs::write(
        temp_dir.path().join("cleaner.json"),
        r#"{
            "stopwords": ["a"],
            "stopwords_file": "stopwords.txt",
            "before_filters": [
                {"type": "encode"},
                {"type": "numeric"},
                {"type": "multiple_space"}
            ],
            "after_filters": [{"type": "trim"}],
            "store_before": true
        }"#,
    )?;

    let config = CleanerConfig::from_file(temp_dir.path().join("cleaner.json"))?;
    assert_eq!(
        config.stopwords_file.as_deref(),
        Some(temp_dir.path().join("stopwords.txt").as_path())
    );
    assert_eq!(
        config.resolve_stopwords()?,
        vec!["a".to_string(), "good and bad".to_string(), "the".to_string()]
    );

    let cleaner = config.build()?;
    assert_eq!(cleaner.index().lengths(), vec![1, 3]);
    assert_eq!(cleaner.clean("The 42 good and BAD café ideas")?, "caf ideas");

    let trace = cleaner.clean_with_trace("a 1  b")?;
    assert_eq!(trace.before.len(), 3);
    assert!(trace.after.is_empty());
    assert_eq!(trace.output, "b");
    Ok(())
}

#[test]
fn test_malformed_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "{ \"stopwords\": [").unwrap();

    assert!(matches!(
        CleanerConfig::from_file(&path).unwrap_err(),
        ScourError::Json(_)
    ));
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    assert!(matches!(
        CleanerConfig::from_file(temp_dir.path().join("absent.json")).unwrap_err(),
        ScourError::Io(_)
    ));
}

#[test]
fn test_config_roundtrips_through_json() -> Result<()> {
    let config: CleanerConfig = serde_json::from_str(
        r#"{"stopwords": ["x y"], "tokenizer": {"type": "whitespace"}, "match_mode": {"mode": "fuzzy"}}"#,
    )?;
    let json = serde_json::to_string(&config)?;
    let reloaded: CleanerConfig = serde_json::from_str(&json)?;

    assert_eq!(config, reloaded);
    Ok(())
}
