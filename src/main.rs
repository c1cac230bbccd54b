//! Syntax analyser driver.
//!
//! Checks each source file against the statement grammar and prints its
//! parse tree, or the first syntax error with the offending line.

use std::{fs, path::PathBuf, process::ExitCode, rc::Rc, time::Instant};

use clap::Parser as ClapParser;
use syntax_analyser::{
    display_error,
    errors::errors::{Error, ErrorImpl},
    lexer::source::TokenStream,
    parser::{
        parser::{parse, ParserOptions, RepetitionShape},
        sink::TraceSink,
    },
    tree::tree::TreeBuilder,
    Position,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser, Debug)]
#[command(name = "syntax_analyser")]
#[command(about = "Check programs against the statement grammar and print their parse trees")]
struct Cli {
    /// Source files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print the raw event trace instead of the parse tree
    #[arg(long)]
    trace: bool,

    /// Re-enter a rule after each separator, nesting its repetitions
    #[arg(long)]
    nested: bool,

    /// Let a rule recognize nothing when no alternative matches, deferring
    /// the error to the next expected terminal
    #[arg(long)]
    lenient: bool,

    /// Only report success or failure per file
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn options(&self) -> ParserOptions {
        ParserOptions {
            repetition: if self.nested {
                RepetitionShape::Nested
            } else {
                RepetitionShape::Flat
            },
            strict_alternatives: !self.lenient,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = cli.options();
    let mut failures = 0;

    for file in &cli.files {
        let start = Instant::now();
        let source = match fs::read_to_string(file) {
            Ok(source) => source,
            Err(error) => {
                let error = Error::new(
                    ErrorImpl::Io {
                        reason: error.to_string(),
                    },
                    Position(0, Rc::new(file.to_string_lossy().to_string())),
                );
                display_error(&error, file, "");
                failures += 1;
                continue;
            }
        };

        match check(&cli, options, file, source.clone()) {
            Ok(output) => {
                if !cli.quiet {
                    print!("{}", output);
                }
                println!("{}: compiled successfully", file.display());
            }
            Err(error) => {
                display_error(&error, file, &source);
                failures += 1;
            }
        }

        debug!(file = %file.display(), elapsed = ?start.elapsed(), "checked");
    }

    info!(files = cli.files.len(), failures, "done");

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn check(
    cli: &Cli,
    options: ParserOptions,
    file: &std::path::Path,
    source: String,
) -> Result<String, Error> {
    let mut tokens = TokenStream::from_source(source, &file.to_string_lossy())?;

    if cli.trace {
        let mut sink = TraceSink::new();
        parse(&mut tokens, &mut sink, options)?;
        return Ok(sink.render());
    }

    let mut sink = TreeBuilder::new();
    parse(&mut tokens, &mut sink, options)?;
    Ok(sink
        .finish()
        .map(|tree| tree.to_string())
        .unwrap_or_default())
}
