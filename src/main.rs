use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use fruity_lookup::commands::{self, Report};
use fruity_lookup::{FruitApi, OutputFormat, colors};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fruity")]
#[command(author, version, about = "Look up fruit nutrition and taxonomy from FruityVice", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Fruit names to look up
    fruits: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = OutputFormat::User, global = true)]
    format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show all fruits belonging to a family
    Family {
        /// Family name, e.g. Rosaceae
        name: String,
    },

    /// Show every fruit in the FruityVice database
    All,

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,fruity=debug,fruity_lookup=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Destination for rendered records; relative paths resolve against the working directory.
fn open_output(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

fn print_diagnostics(report: &Report) {
    for (name, err) in &report.unavailable {
        eprintln!("{} Skipped {}: {}", "⚠".yellow(), name.bold(), err);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    colors::init_colors();

    if cli.command.is_none() && cli.fruits.is_empty() {
        eprintln!(
            "{} Give one or more fruit names, e.g. {}",
            "🍎".bold(),
            "fruity apple banana".cyan()
        );
        eprintln!("\nRun {} to see available commands.", "fruity --help".cyan());
        return Ok(());
    }

    let mut out = open_output(cli.output.as_deref())?;
    let api = FruitApi::new()?;

    match cli.command {
        Some(Commands::Family { name }) => {
            let report = commands::family(&api, &name, cli.format, &mut out).await?;
            if report.written == 0 {
                eprintln!("{} No fruits found in family {}", "⚠".yellow(), name.bold());
            }
        }
        Some(Commands::All) => {
            let report = commands::all(&api, cli.format, &mut out).await?;
            if report.written == 0 {
                eprintln!("{} FruityVice returned no fruits", "⚠".yellow());
            }
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "fruity", &mut out);
        }
        None => {
            let report = commands::lookup(&api, &cli.fruits, cli.format, &mut out).await?;
            print_diagnostics(&report);
        }
    }

    out.flush().context("Failed to write output")?;
    Ok(())
}
