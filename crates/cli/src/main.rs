// anjviz CLI - headless chart resolution over the ANJ market statistics table

mod exit_codes;
mod fetch;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use anjviz_chart::{build_context, resolve};
use anjviz_core::table::DataTable;
use anjviz_core::taxonomy;
use anjviz_io::source::DEFAULT_SOURCE_URL;
use anjviz_io::{read_table_file, SourceConfig};

use exit_codes::{
    EXIT_FETCH_HTTP, EXIT_FETCH_TRANSPORT, EXIT_IO, EXIT_PARSE, EXIT_SUCCESS, EXIT_USAGE,
};

#[derive(Parser)]
#[command(name = "anjviz")]
#[command(about = "ANJ online-gambling market statistics, resolved into chart specs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the source CSV from data.gouv.fr
    #[command(after_help = "\
Examples:
  anjviz fetch -o anj.csv
  anjviz fetch --url https://example.org/mirror.csv -o anj.csv -q")]
    Fetch {
        /// Source locator (defaults to the published ANJ dataset)
        #[arg(long, default_value = DEFAULT_SOURCE_URL)]
        url: String,

        /// Output file
        #[arg(long, short = 'o', default_value = "anj.csv")]
        output: PathBuf,

        /// Suppress stderr notes
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// List the selectable metric keys and their labels
    Keys,

    /// List the canonical categories and periods of a fetched table
    #[command(after_help = "\
Examples:
  anjviz categories --input anj.csv
  anjviz categories --input anj.csv --config mirror.json")]
    Categories {
        /// Previously fetched source CSV
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Source config override (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Resolve a selection into a chart spec (JSON on stdout)
    #[command(after_help = "\
Examples:
  anjviz resolve --input anj.csv --select Mises
  anjviz resolve --input anj.csv --select Mises --select PBJ
  anjviz resolve --input anj.csv --select agréments --context")]
    Resolve {
        /// Previously fetched source CSV
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Metric key to plot (repeatable; more than two is rejected)
        #[arg(long, short = 's', value_name = "KEY")]
        select: Vec<String>,

        /// Also print the context markdown after the JSON
        #[arg(long)]
        context: bool,

        /// Source config override (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the context markdown for a selection
    #[command(after_help = "\
Examples:
  anjviz context --select agréments --select PBJ")]
    Context {
        /// Metric key (repeatable)
        #[arg(long, short = 's', value_name = "KEY")]
        select: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Fetch { url, output, quiet } => fetch::fetch_to_file(&url, &output, quiet),
        Commands::Keys => cmd_keys(),
        Commands::Categories { input, config } => cmd_categories(&input, config.as_deref()),
        Commands::Resolve { input, select, context, config } => {
            cmd_resolve(&input, &select, context, config.as_deref())
        }
        Commands::Context { select } => cmd_context(&select),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_IO, message: msg.into(), hint: None }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self { code: EXIT_PARSE, message: msg.into(), hint: None }
    }

    pub fn fetch_transport(msg: impl Into<String>) -> Self {
        Self { code: EXIT_FETCH_TRANSPORT, message: msg.into(), hint: None }
    }

    pub fn fetch_http(msg: impl Into<String>) -> Self {
        Self { code: EXIT_FETCH_HTTP, message: msg.into(), hint: None }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Load the source config, then the table. Import failure is fatal by
/// design: a partially valid table must never be served.
fn load_table(input: &std::path::Path, config: Option<&std::path::Path>) -> Result<DataTable, CliError> {
    let config = match config {
        Some(path) => SourceConfig::load(path)
            .map_err(|e| CliError::io(format!("failed to load {}: {}", path.display(), e)))?,
        None => SourceConfig::default(),
    };
    read_table_file(input, &config).map_err(|e| CliError::parse(e.to_string()))
}

fn cmd_keys() -> Result<(), CliError> {
    for (key, label) in taxonomy::TAXONOMY {
        println!("{}\t{}", key, label);
    }
    Ok(())
}

fn cmd_categories(input: &std::path::Path, config: Option<&std::path::Path>) -> Result<(), CliError> {
    let table = load_table(input, config)?;

    println!("periods: {}", table.periods().join(", "));
    for row in table.rows() {
        println!("{}", row.category);
    }
    Ok(())
}

fn cmd_resolve(
    input: &std::path::Path,
    selection: &[String],
    with_context: bool,
    config: Option<&std::path::Path>,
) -> Result<(), CliError> {
    let table = load_table(input, config)?;

    let spec = resolve(selection, &table)
        .map_err(|e| CliError::args(e.to_string()).with_hint("run `anjviz keys` for valid keys"))?;

    if spec.is_rejected() {
        // Recoverable by contract: the notice is shown, the previous
        // chart stays, and the exit code remains success.
        eprintln!("Le graphe ne peut afficher plus de 2 types à la fois.");
    }

    let json = serde_json::to_string_pretty(&spec)
        .map_err(|e| CliError::io(format!("failed to serialize chart spec: {}", e)))?;
    println!("{}", json);

    // Context text is independent of the resolution outcome; the
    // reference UI updates it even when the chart is left untouched.
    if with_context {
        let context = build_context(selection);
        if !context.is_empty() {
            println!("{}", context);
        }
    }

    Ok(())
}

fn cmd_context(selection: &[String]) -> Result<(), CliError> {
    let context = build_context(selection);
    if !context.is_empty() {
        println!("{}", context);
    }
    Ok(())
}
