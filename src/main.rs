use std::{
    fs::read_to_string,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use timelex::{
    init_tracing,
    lexer::{lexer::Lexer, options::LexerOptions},
    render_error,
};

/// Tokenize SMIL/SVG animation time expressions.
#[derive(Parser, Debug)]
#[command(name = "timelex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize animation time expressions", long_about = None)]
struct Cli {
    /// File to read (default: stdin)
    input: Option<PathBuf>,

    /// Tokenize this expression instead of reading a file
    #[arg(short, long, conflicts_with = "input")]
    expression: Option<String>,

    /// Columns per tab stop when reporting positions
    #[arg(long, default_value_t = 1, env = "TIMELEX_TAB_WIDTH")]
    tab_width: u32,

    /// Report every error and keep going instead of stopping at the first
    #[arg(short, long)]
    recover: bool,

    /// Enable debug logging
    #[arg(short, long, env = "TIMELEX_VERBOSE")]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (source, file_name) = read_source(&cli)?;
    let options = LexerOptions::new().tab_width(cli.tab_width).file(file_name);

    let start = Instant::now();
    let mut lexer = Lexer::with_options(source.clone(), options);
    let mut failed = false;

    loop {
        match lexer.next_token() {
            Ok(token) => {
                println!("{}", token.describe());
                if token.is_eof() {
                    break;
                }
            }
            Err(error) => {
                failed = true;
                eprint!("{}", render_error(&error, &source));
                eprintln!("{}", error.message());

                if !cli.recover {
                    break;
                }
                lexer.skip_char();
            }
        }
    }

    tracing::debug!(elapsed = ?start.elapsed(), "tokenized");

    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

fn read_source(cli: &Cli) -> Result<(String, String)> {
    if let Some(expression) = &cli.expression {
        return Ok((expression.clone(), String::from("<expression>")));
    }

    match &cli.input {
        Some(path) => {
            let source = read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            Ok((source, file_name))
        }
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            Ok((source, String::from("<stdin>")))
        }
    }
}
