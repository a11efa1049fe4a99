use std::{io, path::PathBuf, process::exit, time::Instant};

use clap::Parser;
use nu_lexgen::{
    display_error,
    emitter::emitter::{write_to, write_to_path, Format},
    errors::errors::{Error, ErrorImpl},
    generate,
    lexer::{lexer::LexerConfig, tokens::NU_WORDS},
    Location,
};

/// Generates the Nushell lexer definition for the syntax-highlighting engine.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Output file; the definition goes to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Xml)]
    format: Format,

    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    alias: Option<String>,

    /// Filename glob, e.g. `*.nu`
    #[arg(long)]
    filename: Option<String>,

    #[arg(long)]
    mime_type: Option<String>,

    /// Validate and summarise without writing anything
    #[arg(long)]
    check: bool,
}

impl Cli {
    fn config(&self) -> LexerConfig {
        let defaults = LexerConfig::default();

        LexerConfig {
            name: self.name.clone().unwrap_or(defaults.name),
            alias: self.alias.clone().unwrap_or(defaults.alias),
            filename: self.filename.clone().unwrap_or(defaults.filename),
            mime_type: self.mime_type.clone().unwrap_or(defaults.mime_type),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        display_error(&error);
        exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let start = Instant::now();
    let definition = generate(cli.config(), &NU_WORDS)?;

    log::debug!("Generated in {:?}", start.elapsed());

    if cli.check {
        return Ok(());
    }

    match &cli.output {
        Some(path) => {
            write_to_path(&definition, cli.format, path)?;
            log::info!("Generated new {} lexer at: {}", definition.config.alias, path.display());
            log::info!("The lexer includes support for:");
            for feature in [
                "Keywords and built-in commands",
                "Variables and assignments",
                "String interpolation",
                "Numbers, dates, durations, and filesizes",
                "Comments and operators",
                "Flags and punctuation",
            ] {
                log::info!("- {}", feature);
            }
        }
        None => write_to(&definition, cli.format, io::stdout().lock()).map_err(|err| {
            Error::new(
                ErrorImpl::WriteFailed {
                    path: String::from("<stdout>"),
                    message: err.to_string(),
                },
                Location::null(),
            )
        })?,
    }

    Ok(())
}
