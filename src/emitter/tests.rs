//! Unit tests for the emitter module.

use crate::lexer::{
    lexer::{generate_lexer, LexerConfig, LexerDefinition},
    rules::{create_by_groups_rule, create_include, create_rule},
    states::State,
    tokens::{TokenType, NU_WORDS},
};

use super::{
    emitter::{encode, Format},
    xml::escape_value,
};

fn small_lexer() -> LexerDefinition {
    LexerDefinition::new(
        LexerConfig::default(),
        vec![
            State::new(
                "root",
                vec![
                    create_include("strings"),
                    create_by_groups_rule(r"(\^)(\w+)", &[TokenType::Operator, TokenType::NameFunction]),
                ],
            ),
            State::new(
                "strings",
                vec![
                    create_rule(r#"\$""#, TokenType::LiteralStringDouble, Some("strings")),
                    create_rule(r#"""#, TokenType::LiteralStringDouble, Some("")),
                ],
            ),
        ],
    )
}

fn xml_of(definition: &LexerDefinition) -> String {
    String::from_utf8(encode(definition, Format::Xml).unwrap()).unwrap()
}

#[test]
fn test_escape_value() {
    assert_eq!(escape_value(r#"r'[^']*'"#), "r&#39;[^&#39;]*&#39;");
    assert_eq!(escape_value(r#""([^"\\]|\\.)*""#), r#"&#34;([^&#34;\\]|\\.)*&#34;"#);
    assert_eq!(escape_value("&&|<=|>"), "&&|<=|>");
    assert_eq!(escape_value("a\tb\n"), "a&#x9;b&#xA;");
}

#[test]
fn test_xml_document() {
    let expected = r##"<?xml version="1.0" encoding="UTF-8"?>
<lexer>
  <config>
    <name>Nu</name>
    <alias>nu</alias>
    <filename>*.nu</filename>
    <mime_type>text/plain</mime_type>
  </config>
  <rules>
    <state name="root">
      <rule include="strings"></rule>
      <rule pattern="(\^)(\w+)">
        <bygroups>
          <token type="Operator"></token>
          <token type="NameFunction"></token>
        </bygroups>
      </rule>
    </state>
    <state name="strings">
      <rule pattern="\$&#34;" push="strings">
        <token type="LiteralStringDouble"></token>
      </rule>
      <rule pattern="&#34;" pop="1">
        <token type="LiteralStringDouble"></token>
      </rule>
    </state>
  </rules>
</lexer>"##;

    assert_eq!(xml_of(&small_lexer()), expected);
}

#[test]
fn test_nu_xml_contents() {
    let xml = xml_of(&generate_lexer(LexerConfig::default(), &NU_WORDS));

    assert!(xml.contains(r#"<state name="interpolated_string">"#));
    assert!(xml.contains(r#"<rule pattern="\(" push="interpolation">"#));
    assert!(xml.contains(r#"<rule include="root"></rule>"#));
    assert!(xml.contains(r#"<rule pattern="&&|\|\|">"#));
    assert!(xml.contains(r#"<rule pattern="\s+">"#));
    assert_eq!(xml.matches("<state ").count(), 5);
}

#[test]
fn test_json_document() {
    let json = encode(&small_lexer(), Format::Json).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&json).unwrap();

    assert_eq!(value["config"]["alias"], "nu");
    assert_eq!(value["states"][0]["name"], "root");
    assert_eq!(value["states"][0]["rules"][0]["kind"], "include");
    assert_eq!(value["states"][0]["rules"][0]["state"], "strings");
    assert_eq!(value["states"][0]["rules"][1]["kind"], "match_groups");
    assert_eq!(value["states"][0]["rules"][1]["tokens"][1], "NameFunction");
    assert_eq!(value["states"][1]["rules"][0]["transition"]["push"], "strings");
    assert_eq!(value["states"][1]["rules"][1]["transition"]["pop"], 1);
}
