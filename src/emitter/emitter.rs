use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use clap::ValueEnum;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::LexerDefinition,
    Location,
};

use super::xml::write_xml;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Xml,
    Json,
}

pub fn write_to<W: Write>(definition: &LexerDefinition, format: Format, mut out: W) -> io::Result<()> {
    match format {
        Format::Xml => write_xml(definition, out),
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, definition)?;
            writeln!(out)?;
            out.flush()
        }
    }
}

pub fn encode(definition: &LexerDefinition, format: Format) -> io::Result<Vec<u8>> {
    let mut bytes = vec![];
    write_to(definition, format, &mut bytes)?;
    Ok(bytes)
}

/// Encodes `definition` and writes it to `path` in one go, creating missing
/// parent directories.
pub fn write_to_path(definition: &LexerDefinition, format: Format, path: &Path) -> Result<(), Error> {
    let write_failed = |err: io::Error| {
        Error::new(
            ErrorImpl::WriteFailed {
                path: path.display().to_string(),
                message: err.to_string(),
            },
            Location::null(),
        )
    };

    let bytes = encode(definition, format).map_err(write_failed)?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_failed)?;
    }
    fs::write(path, bytes).map_err(write_failed)?;

    log::debug!("Wrote {} to {}", definition.config.name, path.display());
    Ok(())
}
