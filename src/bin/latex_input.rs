//! latex-input CLI - convert LaTeX-like markup to Unicode from the command line

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use latex_input::{
    convert_with_report, latex_to_unicode, parse, symbols, BuildError, ConversionOutput,
    FontContext, Tables,
};
#[cfg(feature = "cli")]
use serde::Serialize;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, BufRead, BufReader};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "latex-input")]
#[command(version)]
#[command(about = "Convert LaTeX-like markup into precomposed Unicode text", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Expressions to convert (reads one per line from stdin if none given)
    expressions: Vec<String>,

    /// Math mode: letters default to italic
    #[arg(short, long)]
    math: bool,

    /// Build tables from this UnicodeData.txt instead of the bundled snapshot
    #[arg(long)]
    unicode_data: Option<String>,

    /// Print conversion errors instead of the failure sentinel and exit with status 1
    #[arg(long)]
    strict: bool,

    /// Write a JSON report of outputs, errors and fallback warnings to this path
    #[arg(long)]
    report: Option<String>,

    /// Log diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// List the named symbols
    Symbols {
        /// Only list names starting with this prefix
        prefix: Option<String>,
    },

    /// Print the syntax tree of an expression
    Parse {
        /// Expression to parse
        expression: String,
    },

    /// Show table statistics
    Info,
}

/// One converted expression in a `--report` file
#[cfg(feature = "cli")]
#[derive(Serialize)]
struct ReportEntry<'a> {
    input: &'a str,
    context: FontContext,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<ConversionOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Minimal stderr logger for `--verbose`
#[cfg(feature = "cli")]
struct StderrLogger;

#[cfg(feature = "cli")]
impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!("[{}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

#[cfg(feature = "cli")]
static LOGGER: StderrLogger = StderrLogger;

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if cli.verbose && log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let owned_tables;
    let tables = match cli.unicode_data {
        Some(ref path) => {
            owned_tables = load_tables(path).unwrap_or_else(|err| {
                eprintln!("Error: {}", err);
                std::process::exit(1);
            });
            &owned_tables
        }
        None => Tables::builtin(),
    };

    if let Some(cmd) = cli.command {
        handle_subcommand(cmd, tables);
        return Ok(());
    }

    let expressions = if cli.expressions.is_empty() {
        let mut lines = Vec::new();
        for line in io::stdin().lock().lines() {
            lines.push(line?);
        }
        lines
    } else {
        cli.expressions.clone()
    };

    let context = if cli.math {
        FontContext::math_mode()
    } else {
        FontContext::new()
    };

    let mut entries = Vec::with_capacity(expressions.len());
    let mut failed = false;
    for expression in &expressions {
        let entry = match convert_with_report(expression, context, tables) {
            Ok(output) => {
                println!("{}", output.content);
                ReportEntry {
                    input: expression,
                    context,
                    output: Some(output),
                    error: None,
                }
            }
            Err(err) => {
                failed = true;
                if cli.strict {
                    let stage = if err.is_parse_error() { "Parse" } else { "Render" };
                    eprintln!("{} error in {:?}: {}", stage, expression, err);
                } else {
                    println!("{}", latex_to_unicode(expression, context, tables));
                }
                ReportEntry {
                    input: expression,
                    context,
                    output: None,
                    error: Some(err.to_string()),
                }
            }
        };
        entries.push(entry);
    }

    if let Some(ref path) = cli.report {
        write_report(path, &entries)?;
        eprintln!("✓ Report written to: {}", path);
    }

    if failed && cli.strict {
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn write_report(path: &str, entries: &[ReportEntry<'_>]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(entries).map_err(io::Error::other)?;
    fs::write(path, json)
}

#[cfg(feature = "cli")]
fn load_tables(path: &str) -> Result<Tables, BuildError> {
    let file = fs::File::open(path)?;
    latex_input::build_tables(BufReader::new(file))
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: Commands, tables: &Tables) {
    match cmd {
        Commands::Symbols { prefix } => {
            for (name, glyph) in symbols::entries() {
                if prefix.as_deref().map_or(true, |p| name.starts_with(p)) {
                    println!("\\{:<12} {}  U+{:04X}", name, glyph, glyph as u32);
                }
            }
        }

        Commands::Parse { expression } => match parse(&expression) {
            Ok(formula) => println!("{:#?}", formula),
            Err(err) => {
                eprintln!("Error: {}", err);
                std::process::exit(1);
            }
        },

        Commands::Info => {
            let stats = tables.stats();
            println!("latex-input v{}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Tables:");
            println!("  superscripts:  {}", stats.superscripts);
            println!("  subscripts:    {}", stats.subscripts);
            println!(
                "  font variants: {} ({} base characters)",
                stats.variants, stats.variant_bases
            );
            println!("  symbols:       {}", stats.symbols);
        }
    }
}


#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install latex-input --features cli");
    eprintln!("  latex-input [OPTIONS] [EXPRESSIONS]...");
}
