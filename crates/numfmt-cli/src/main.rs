//! numfmt - CLI
//!
//! Host program for the formatter. With no arguments, runs every demo
//! program; `format` renders a single value.

mod demo;

use std::process;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use numfmt_core::{Base, FormatOptions, FormattedValue, NumberFormatter, Value};
use numfmt_sink::{emit, OutputSink, StreamSink};

use demo::DemoProgram;

#[derive(Parser)]
#[command(name = "numfmt")]
#[command(about = "Numeral-base-aware value formatting")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the fixed-output demo programs
    Demo {
        /// Program to run (default: all)
        #[arg(value_enum)]
        program: Option<DemoProgram>,
    },

    /// Format a single value
    Format(FormatArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    Int,
    Long,
    Char,
    Bool,
    Double,
}

#[derive(Args)]
struct FormatArgs {
    /// Value to format; integers accept 0x, 0o and 0b prefixes
    #[arg(allow_hyphen_values = true)]
    value: String,

    /// Numeral base: dec, oct, hex, bin (or 10, 8, 16, 2)
    #[arg(short, long, env = "NUMFMT_BASE", default_value = "dec")]
    base: String,

    /// Declared type of the value
    #[arg(short, long, value_enum, default_value_t = Kind::Int)]
    kind: Kind,

    /// Show the base prefix (0x, 0, 0b)
    #[arg(long)]
    prefix: bool,

    /// Upper-case hex digits
    #[arg(long)]
    upper: bool,

    /// Show + before non-negative decimal values
    #[arg(long)]
    plus: bool,

    /// Separator between binary nibbles
    #[arg(long)]
    separator: Option<char>,

    /// Render the value as a character
    #[arg(long = "char")]
    as_char: bool,

    /// Render booleans as true/false
    #[arg(long)]
    bool_word: bool,

    /// Print the character followed by its code point (not for --kind bool)
    #[arg(long)]
    code_point: bool,

    /// Emit JSON instead of plain text
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut sink = StreamSink::stdout();
    if let Err(e) = run(cli.command, &mut sink) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(command: Option<Commands>, sink: &mut dyn OutputSink) -> Result<()> {
    match command {
        None | Some(Commands::Demo { program: None }) => {
            for program in DemoProgram::ALL {
                program.run(sink)?;
            }
        }
        Some(Commands::Demo { program: Some(program) }) => program.run(sink)?,
        Some(Commands::Format(args)) => format_value(&args, sink)?,
    }
    sink.flush()?;
    Ok(())
}

fn format_value(args: &FormatArgs, sink: &mut dyn OutputSink) -> Result<()> {
    if args.code_point && args.kind == Kind::Bool {
        bail!("--code-point needs a character or integer value, not --kind bool");
    }
    let base: Base = args.base.parse()?;
    let options = FormatOptions::with_base(base)
        .base_prefix(args.prefix)
        .uppercase(args.upper)
        .positive_sign(args.plus)
        .nibble_separator(args.separator)
        .as_character(args.as_char)
        .boolean_as_word(args.bool_word);
    let value = parse_value(&args.value, args.kind)?;
    tracing::debug!(?value, ?options, "formatting");

    let outputs: Vec<FormattedValue> = if args.code_point {
        let (character, code_point) = NumberFormatter::format_with_code_point(value, &options)?;
        vec![character, code_point]
    } else {
        vec![NumberFormatter::format(value, &options)?]
    };

    if args.json {
        let json = match outputs.as_slice() {
            [single] => serde_json::to_string(single)?,
            many => serde_json::to_string(many)?,
        };
        sink.write_line(&json)?;
    } else {
        for out in &outputs {
            emit(sink, out)?;
        }
    }
    Ok(())
}

fn parse_value(raw: &str, kind: Kind) -> Result<Value> {
    let raw = raw.trim();
    let value = match kind {
        Kind::Int => {
            let n = parse_integer(raw)?;
            Value::Int(i32::try_from(n).with_context(|| format!("{} does not fit in a 32-bit int", raw))?)
        }
        Kind::Long => Value::Long(parse_integer(raw)?),
        Kind::Char => match raw.as_bytes() {
            [single] if !single.is_ascii_digit() => Value::Char(*single),
            _ => {
                let n = parse_integer(raw)?;
                Value::Char(u8::try_from(n).with_context(|| format!("{} does not fit in a char", raw))?)
            }
        },
        Kind::Bool => match raw {
            "true" | "1" => Value::Bool(true),
            "false" | "0" => Value::Bool(false),
            other => bail!("invalid boolean: {}", other),
        },
        Kind::Double => Value::Double(
            raw.parse::<f64>()
                .with_context(|| format!("invalid number: {}", raw))?,
        ),
    };
    Ok(value)
}

/// Parse an integer literal with an optional sign and 0x/0o/0b prefix
fn parse_integer(raw: &str) -> Result<i64> {
    let (negative, body) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let lower = body.to_ascii_lowercase();
    let (radix, digits) = if let Some(d) = lower.strip_prefix("0x") {
        (16, d)
    } else if let Some(d) = lower.strip_prefix("0o") {
        (8, d)
    } else if let Some(d) = lower.strip_prefix("0b") {
        (2, d)
    } else {
        (10, lower.as_str())
    };
    let digits = digits.replace('_', "");
    if digits.is_empty() {
        return Err(anyhow!("invalid integer: {}", raw));
    }

    let magnitude = u64::from_str_radix(&digits, radix)
        .with_context(|| format!("invalid integer: {}", raw))?;
    if negative {
        0i64.checked_sub_unsigned(magnitude)
            .ok_or_else(|| anyhow!("{} is out of range", raw))
    } else {
        i64::try_from(magnitude).with_context(|| format!("{} is out of range", raw))
    }
}
