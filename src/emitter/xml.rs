use std::io::{self, Write};

use crate::lexer::{lexer::LexerDefinition, rules::Rule, states::State, tokens::TokenType};

const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Escapes a value for an attribute or text node.
///
/// Quotes and control whitespace become character references; `<`, `>` and
/// `&` are written literally, which is how the engine's embedded lexers
/// spell regex patterns.
pub fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            '\t' => escaped.push_str("&#x9;"),
            '\n' => escaped.push_str("&#xA;"),
            '\r' => escaped.push_str("&#xD;"),
            _ => escaped.push(ch),
        }
    }

    escaped
}

struct XmlWriter<W: Write> {
    out: W,
    indent: usize,
}

impl<W: Write> XmlWriter<W> {
    fn new(out: W) -> Self {
        XmlWriter { out, indent: 0 }
    }

    fn pad(&mut self) -> io::Result<()> {
        write!(self.out, "\n{}", "  ".repeat(self.indent))
    }

    fn start_tag(&mut self, tag: &str, attributes: &[(&str, String)]) -> io::Result<()> {
        self.pad()?;
        write!(self.out, "<{}", tag)?;
        for (name, value) in attributes {
            write!(self.out, " {}=\"{}\"", name, escape_value(value))?;
        }
        write!(self.out, ">")
    }

    fn open(&mut self, tag: &str, attributes: &[(&str, String)]) -> io::Result<()> {
        self.start_tag(tag, attributes)?;
        self.indent += 1;
        Ok(())
    }

    fn close(&mut self, tag: &str) -> io::Result<()> {
        self.indent -= 1;
        self.pad()?;
        write!(self.out, "</{}>", tag)
    }

    fn empty(&mut self, tag: &str, attributes: &[(&str, String)]) -> io::Result<()> {
        self.start_tag(tag, attributes)?;
        write!(self.out, "</{}>", tag)
    }

    fn text(&mut self, tag: &str, value: &str) -> io::Result<()> {
        self.pad()?;
        write!(self.out, "<{}>{}</{}>", tag, escape_value(value), tag)
    }
}

/// Writes `definition` as an XML lexer document, two spaces per level.
pub fn write_xml<W: Write>(definition: &LexerDefinition, out: W) -> io::Result<()> {
    let mut xml = XmlWriter::new(out);
    write!(xml.out, "{}", HEADER)?;

    xml.open("lexer", &[])?;

    xml.open("config", &[])?;
    xml.text("name", &definition.config.name)?;
    xml.text("alias", &definition.config.alias)?;
    xml.text("filename", &definition.config.filename)?;
    xml.text("mime_type", &definition.config.mime_type)?;
    xml.close("config")?;

    xml.open("rules", &[])?;
    for state in &definition.states {
        write_state(&mut xml, state)?;
    }
    xml.close("rules")?;

    xml.close("lexer")?;
    xml.out.flush()
}

fn write_state<W: Write>(xml: &mut XmlWriter<W>, state: &State) -> io::Result<()> {
    xml.open("state", &[("name", state.name.clone())])?;
    for rule in &state.rules {
        write_rule(xml, rule)?;
    }
    xml.close("state")
}

fn write_rule<W: Write>(xml: &mut XmlWriter<W>, rule: &Rule) -> io::Result<()> {
    let mut attributes = vec![];
    if let Some(pattern) = rule.pattern() {
        attributes.push(("pattern", pattern.to_string()));
    }
    if let Some(state) = rule.include_target() {
        attributes.push(("include", state.to_string()));
    }
    if let Some(transition) = rule.transition() {
        if let Some(state) = transition.push_target() {
            attributes.push(("push", state.to_string()));
        }
        if transition.pop_count() > 0 {
            attributes.push(("pop", transition.pop_count().to_string()));
        }
    }

    match rule {
        Rule::Include { .. } => xml.empty("rule", &attributes),
        Rule::Match { token, .. } => {
            xml.open("rule", &attributes)?;
            write_token(xml, *token)?;
            xml.close("rule")
        }
        Rule::MatchGroups { tokens, .. } => {
            xml.open("rule", &attributes)?;
            xml.open("bygroups", &[])?;
            for token in tokens {
                write_token(xml, *token)?;
            }
            xml.close("bygroups")?;
            xml.close("rule")
        }
    }
}

fn write_token<W: Write>(xml: &mut XmlWriter<W>, token: TokenType) -> io::Result<()> {
    xml.empty("token", &[("type", token.to_string())])
}
