use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use proppath::config::Config;
use proppath::file::loader::{load_document, load_document_from_stdin};
use proppath::navigator::{NavigateError, Navigator};
use proppath::resolver::{Flavor, Resolver, Segment};

/// proppath - resolve and navigate property-path expressions
#[derive(Parser)]
#[command(name = "proppath")]
#[command(version)]
#[command(about = "Resolve and navigate property-path expressions", long_about = None)]
struct Cli {
    /// Config file (default: ~/.config/proppath/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Use the strict resolver flavor regardless of config
    #[arg(short, long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print each segment of an expression with its classification
    Inspect {
        expression: String,
    },
    /// Check that an expression is well formed
    Check {
        expression: String,
    },
    /// Print the value an expression refers to in a YAML or JSON document
    Get {
        expression: String,
        /// Document to read (omit to read from stdin)
        file: Option<PathBuf>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let mut resolver = config.resolver();
    if cli.strict {
        let mut options = resolver.options();
        options.flavor = Flavor::Strict;
        resolver = Resolver::with_options(options);
    }
    log::debug!("using resolver {:?}", resolver.options());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Inspect { expression } => inspect(&mut out, &resolver, &expression),
        Command::Check { expression } => check(&mut out, &resolver, &expression),
        Command::Get { expression, file } => get(&mut out, resolver, &expression, file),
    }
}

fn inspect<W: Write>(out: &mut W, resolver: &Resolver, expression: &str) -> Result<ExitCode> {
    if expression.is_empty() {
        eprintln!("{}", NavigateError::EmptyExpression);
        return Ok(ExitCode::FAILURE);
    }

    let mut status = ExitCode::SUCCESS;
    for (position, raw) in resolver.segments(expression).enumerate() {
        match resolver.parse_segment(raw) {
            Ok(segment) => writeln!(out, "{}: {:<24} {}", position, raw, describe(&segment))?,
            Err(err) => {
                writeln!(out, "{}: {:<24} error: {}", position, raw, err)?;
                status = ExitCode::FAILURE;
            }
        }
    }
    Ok(status)
}

fn describe(segment: &Segment<'_>) -> String {
    match segment {
        Segment::Simple { name } => format!("simple name={}", name),
        Segment::Indexed { name, index } => format!("indexed name={} index={}", name, index),
        Segment::Keyed { name, key } => format!("keyed name={} key={}", name, key),
    }
}

fn check<W: Write>(out: &mut W, resolver: &Resolver, expression: &str) -> Result<ExitCode> {
    match resolver.validate(expression) {
        Ok(()) => {
            writeln!(out, "ok")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}", err);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn get<W: Write>(
    out: &mut W,
    resolver: Resolver,
    expression: &str,
    file: Option<PathBuf>,
) -> Result<ExitCode> {
    let document = match file {
        Some(path) => load_document(&path)?,
        None => load_document_from_stdin()?,
    };

    let navigator = Navigator::new(resolver);
    let value = navigator
        .get(&document, expression)
        .with_context(|| format!("Failed to resolve '{}'", expression))?;
    let rendered = serde_yaml::to_string(value).context("Failed to render value")?;
    write!(out, "{}", rendered)?;
    Ok(ExitCode::SUCCESS)
}
