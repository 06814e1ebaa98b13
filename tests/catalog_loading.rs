// Integration tests for catalog construction and lookup

use foldstep::catalog::{CatalogError, Difficulty, PatternCatalog, DEFAULT_PATTERN_ID};
use std::fs;

const SMALL_CATALOG: &str = r#"
{
    "default": "pleat",
    "patterns": [
        {
            "id": "square-twist",
            "name": "Square Twist",
            "description": "A single square twist.",
            "difficulty": "Intermediate",
            "steps": ["Crease a grid.", "Pleat four sides.", "Twist flat."],
            "tips": ["Go slowly"]
        },
        {
            "id": "pleat",
            "name": "Simple Pleat",
            "summary": "Parallel mountain and valley folds",
            "description": "Alternating parallel folds.",
            "difficulty": "Beginner",
            "steps": ["Fold in half.", "Fold each half back."],
            "materials": "Any paper"
        }
    ]
}
"#;

#[test]
fn test_every_builtin_pattern_has_steps() {
    let catalog = PatternCatalog::builtin().expect("builtin catalog should be valid");
    assert_eq!(catalog.len(), 6);
    for record in catalog.iter() {
        assert!(record.step_count() >= 1, "{} has no steps", record.id());
    }
}

#[test]
fn test_unknown_id_resolves_to_default() {
    let catalog = PatternCatalog::builtin().unwrap();
    let record = catalog.lookup("unknown-id");
    assert_eq!(record.id(), DEFAULT_PATTERN_ID);
    assert_eq!(record.step_count(), 8);
    assert!(catalog.get("unknown-id").is_none());
}

#[test]
fn test_builtin_difficulties() {
    let catalog = PatternCatalog::builtin().unwrap();
    assert_eq!(catalog.lookup("triangle-grid").difficulty(), Difficulty::Beginner);
    assert_eq!(catalog.lookup("waterbomb").difficulty(), Difficulty::Intermediate);
    assert_eq!(catalog.lookup("hexagonal").difficulty(), Difficulty::Advanced);
}

#[test]
fn test_json_catalog_with_explicit_default() {
    let catalog = PatternCatalog::from_json_str(SMALL_CATALOG).expect("valid catalog");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.default_record().id(), "pleat");
    assert_eq!(catalog.lookup("nope").name(), "Simple Pleat");

    let twist = catalog.lookup("square-twist");
    assert_eq!(twist.step_count(), 3);
    assert_eq!(twist.summary(), "");
    assert_eq!(twist.materials(), "");
    assert_eq!(twist.tips(), ["Go slowly".to_string()]);
}

#[test]
fn test_json_catalog_rejects_empty_steps() {
    let json = r#"{ "patterns": [
        { "id": "bad", "name": "Bad", "description": "", "difficulty": "Beginner", "steps": [] }
    ] }"#;
    let err = PatternCatalog::from_json_str(json).unwrap_err();
    assert!(matches!(err, CatalogError::EmptySteps { ref id } if id == "bad"));
}

#[test]
fn test_json_catalog_rejects_unknown_difficulty() {
    let json = r#"{ "patterns": [
        { "id": "x", "name": "X", "description": "", "difficulty": "Expert", "steps": ["a"] }
    ] }"#;
    let err = PatternCatalog::from_json_str(json).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn test_load_from_path() {
    let dir = std::env::temp_dir().join(format!("foldstep-test-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("catalog.json");
    fs::write(&path, SMALL_CATALOG).unwrap();

    let catalog = PatternCatalog::from_path(&path).expect("catalog file should load");
    assert!(catalog.contains("square-twist"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_missing_file_reports_path() {
    let path = std::env::temp_dir().join("foldstep-does-not-exist.json");
    let err = PatternCatalog::from_path(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().contains("foldstep-does-not-exist.json"));
}
