use clap::Parser;
use sexp_eval::{Calculator, EvalConfig, Error, Value};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Expressions to evaluate, e.g. "(+ 1 (max 2 3))". Read line by line from stdin when omitted
    expressions: Vec<String>,

    /// Path to config file
    #[arg(short, long, default_value = "sexp-eval.json")]
    config: PathBuf,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug mode
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(cli: &Cli) -> Result<EvalConfig, Error> {
    if cli.config.exists() {
        EvalConfig::from_file(&cli.config)
    } else {
        Ok(EvalConfig::default())
    }
}

fn print_value(out: &mut impl Write, value: &Value, json: bool) -> Result<(), Error> {
    let written = if json {
        let text = serde_json::to_string(value)
            .map_err(|e| Error::internal(format!("Failed to serialize result: {}", e)))?;
        writeln!(out, "{}", text)
    } else {
        writeln!(out, "{}", value)
    };
    written.map_err(|e| Error::internal(format!("Failed to write result: {}", e)))
}

/// An error together with the expression that produced it, if any.
struct Failure {
    error: Error,
    expression: Option<String>,
}

impl From<Error> for Failure {
    fn from(error: Error) -> Self {
        Failure {
            error,
            expression: None,
        }
    }
}

fn evaluate_line(
    calculator: &Calculator,
    out: &mut impl Write,
    expression: &str,
    json: bool,
) -> Result<(), Failure> {
    let value = calculator.evaluate(expression).map_err(|error| Failure {
        error,
        expression: Some(expression.to_string()),
    })?;
    Ok(print_value(out, &value, json)?)
}

/// Points at the offending character of a parse error, e.g.
///
/// ```text
///   (+ 1 (* 2 3))
///         ^
/// ```
fn caret_lines(expression: &str, error: &Error) -> Option<String> {
    let position = match error {
        Error::Parse(parse_error) => parse_error.get_position()?,
        _ => return None,
    };
    // Positions are byte offsets; the caret column counts characters.
    let column = expression.get(..position)?.chars().count();
    Some(format!("  {}\n  {}^", expression, " ".repeat(column)))
}

fn run(cli: &Cli) -> Result<(), Failure> {
    let config = load_config(cli)?;
    info!("config loaded.");
    debug!("config: {:?}", config);

    let calculator = Calculator::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.expressions.is_empty() {
        for expression in &cli.expressions {
            evaluate_line(&calculator, &mut out, expression, cli.json)?;
        }
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.map_err(|e| Error::internal(format!("Failed to read stdin: {}", e)))?;
        if line.trim().is_empty() {
            continue;
        }
        evaluate_line(&calculator, &mut out, &line, cli.json)?;
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "off" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(failure) = run(&cli) {
        eprintln!("Error: {}", failure.error);
        if let Some(caret) = failure
            .expression
            .as_deref()
            .and_then(|expression| caret_lines(expression, &failure.error))
        {
            eprintln!("{}", caret);
        }
        std::process::exit(1);
    }
}
