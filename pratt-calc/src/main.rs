//! Command-line interface (CLI) for pratt-calc.
//!
//! Reads arithmetic expressions, one per line, and prints the value of each.
//! Without a subcommand it starts an interactive prompt. A failing line is
//! reported on stderr and the next line is read.

use anyhow::{Context, Result, bail};
use clap::{Parser as ClapParser, Subcommand};
use pratt::Span;
use pratt_calc::{CalcError, LexerConfig, evaluate_with};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Decimal separator used in numbers
    #[arg(
        long,
        global = true,
        env = "PRATT_CALC_DECIMAL_SEPARATOR",
        default_value_t = '.'
    )]
    decimal_separator: char,

    /// Command
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reads expressions interactively
    Repl {
        /// Prompt printed before each line
        #[arg(short, long, default_value = ">> ")]
        prompt: String,
    },
    /// Evaluates expressions given as arguments
    Eval {
        /// Expressions to evaluate
        #[arg(required = true)]
        exprs: Vec<String>,
    },
    /// Evaluates every line of a file
    Run {
        /// Input file with one expression per line
        #[arg(short, long)]
        input: PathBuf,
    },
}

/// Builds the line of carets under `span`. Whitespace before the span is
/// copied from `line` so tabs keep the carets aligned.
fn caret_line(line: &str, span: Span) -> String {
    let pad = line
        .chars()
        .chain(std::iter::repeat(' '))
        .take(span.start)
        .map(|c| if c.is_whitespace() { c } else { ' ' });
    pad.chain(std::iter::repeat_n('^', span.len().max(1)))
        .collect()
}

/// Prints `err` with a caret line under the offending part of `line`.
fn report(line: &str, err: &CalcError) {
    eprintln!("error: {err}");
    if let Some(span) = err.span() {
        eprintln!("  {line}");
        eprintln!("  {}", caret_line(line, span));
    }
}

/// Evaluates each line and prints its value. Blank lines are skipped.
///
/// Returns the number of lines that failed.
fn run_lines<I>(lines: I, config: &LexerConfig) -> Result<usize>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut failures = 0;
    for (line_no, line) in lines.into_iter().enumerate() {
        let line = line.context("can't read input line")?;
        if line.trim().is_empty() {
            continue;
        }
        match evaluate_with(&line, config) {
            Ok(value) => println!("{value}"),
            Err(err) => {
                log::warn!("line {}: {}", line_no + 1, err);
                report(&line, &err);
                failures += 1;
            }
        }
    }
    Ok(failures)
}

fn repl(prompt: &str, config: &LexerConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        write!(stdout, "{prompt}")?;
        stdout.flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            return Ok(());
        }
        let input = line.trim_end_matches(['\r', '\n']);
        match evaluate_with(input, config) {
            Ok(value) => writeln!(stdout, "{value}")?,
            Err(err) => report(input, &err),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = LexerConfig::with_decimal_separator(args.decimal_separator)?;

    match args.command.unwrap_or(Commands::Repl {
        prompt: String::from(">> "),
    }) {
        Commands::Repl { prompt } => repl(&prompt, &config)?,
        Commands::Eval { exprs } => {
            let failures = run_lines(exprs.into_iter().map(Ok), &config)?;
            if failures > 0 {
                bail!("{failures} expression(s) failed");
            }
        }
        Commands::Run { input: path } => {
            let file = std::fs::File::open(&path)
                .with_context(|| format!("can't open {:?}", path))?;
            let failures = run_lines(io::BufReader::new(file).lines(), &config)?;
            log::info!("{}: {} failed line(s)", path.display(), failures);
            if failures > 0 {
                bail!("{failures} line(s) of {:?} failed", path);
            }
        }
    }

    Ok(())
}
