//! Integration tests for end-to-end generation.
//!
//! These tests verify that the complete pipeline works correctly from word
//! lists through state assembly, validation and emission to a file.

use assert_matches::assert_matches;
use nu_lexgen::{
    emitter::emitter::{write_to_path, Format},
    errors::errors::ErrorImpl,
    generate,
    lexer::{
        lexer::LexerConfig,
        rules::Rule,
        states::{BASIC, INTERPOLATION},
        tokens::{WordLists, NU_WORDS},
    },
};
use std::fs;

#[test]
fn test_generate_and_write_xml() {
    let definition = generate(LexerConfig::default(), &NU_WORDS).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexers/embedded/nu.xml");

    write_to_path(&definition, Format::Xml, &path).unwrap();

    let xml = fs::read_to_string(&path).unwrap();
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(xml.contains("<name>Nu</name>"));
    assert!(xml.contains(r#"<state name="root">"#));
    assert!(xml.contains(r"let-env|"));
    assert!(xml.ends_with("</lexer>"));
}

#[test]
fn test_generate_and_write_json() {
    let definition = generate(LexerConfig::default(), &NU_WORDS).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nu.json");

    write_to_path(&definition, Format::Json, &path).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["states"].as_array().unwrap().len(), 5);
    assert_eq!(value["states"][4]["name"], INTERPOLATION);
}

#[test]
fn test_custom_metadata_and_words() {
    let config = LexerConfig {
        name: String::from("Mini"),
        alias: String::from("mini"),
        filename: String::from("*.mini"),
        mime_type: String::from("text/x-mini"),
    };
    let words = WordLists {
        keywords: vec![String::from("let"), String::from("let-env")],
        builtins: vec![],
        constants: vec![String::from("true")],
    };

    let definition = generate(config, &words).unwrap();

    assert_eq!(definition.config.mime_type, "text/x-mini");
    let basic = &definition.state(BASIC).unwrap().rules;
    assert_matches!(&basic[2], Rule::MatchGroups { pattern, .. } if pattern == r"\b(let-env|let)\b(\s*)");
    assert_matches!(&basic[3], Rule::MatchGroups { pattern, .. } if pattern == r"\b(true)\b(\s*)");
}

#[test]
fn test_write_failure_is_reported() {
    let definition = generate(LexerConfig::default(), &NU_WORDS).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    fs::write(&blocker, "not a directory").unwrap();

    let error = write_to_path(&definition, Format::Xml, &blocker.join("nu.xml")).unwrap_err();

    assert_matches!(error.get_internal(), ErrorImpl::WriteFailed { .. });
}
