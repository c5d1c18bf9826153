//! table-view-state: inspect and manipulate table view state stored in query strings.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use table_view_state::{
    cli::{self, ApplyOp},
    config::{self, AppConfig, ConfigPreset},
    CodecKind,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "table-view-state")]
#[command(version)]
#[command(about = "Inspect and manipulate table view state stored in URL query strings")]
#[command(long_about = None)]
#[command(after_help = "EXAMPLES:
    # Decode the view state of a query string
    table-view-state decode 'page=2&sort=[{\"column\":\"name\",\"direction\":\"asc\"}]'

    # Apply operations and print the new query string
    table-view-state apply '?foo=bar' page=3 toggle-sort=name select=a,b

    # Range selection needs the visible row order
    table-view-state apply '' click=b shift-click=d --rows a,b,c,d

    # Build the list request sent to the backend
    table-view-state request 'selected=[\"1\"]&showSelectedOnly=true' --filter '{\"status\":\"open\"}'")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Configuration preset (default, compact, legacy), applied over the config file
    #[arg(long, global = true)]
    preset: Option<ConfigPreset>,

    /// Wire codec for the selected and sort parameters (overrides the config file)
    #[arg(long, global = true, value_enum)]
    codec: Option<CodecKind>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the decoded view state as JSON
    Decode {
        /// Query string, with or without a leading '?'
        query: String,
    },

    /// Apply table operations in order and print the resulting query string
    ///
    /// Operations: page=N, page-size=N, select=IDS, toggle=ID, select-all=IDS,
    /// deselect-all, toggle-select-all=IDS, remove=IDS, toggle-sort=COL,
    /// add-sort=COL[:asc|desc], remove-sort=COL, show-selected-only[=BOOL],
    /// click=ID, shift-click=ID, reset, reset-page, reset-page-size,
    /// reset-sort, reset-selection
    Apply {
        /// Query string to start from
        query: String,

        /// Operations to apply
        #[arg(value_name = "OP")]
        ops: Vec<ApplyOp>,

        /// Visible row ids in display order, used by click and shift-click
        #[arg(long, value_delimiter = ',')]
        rows: Vec<String>,
    },

    /// Like `apply`, but read and persist the query string in a file
    ApplyFile {
        /// File holding the query string (created if missing)
        path: PathBuf,

        /// Operations to apply
        #[arg(value_name = "OP")]
        ops: Vec<ApplyOp>,

        /// Visible row ids in display order, used by click and shift-click
        #[arg(long, value_delimiter = ',')]
        rows: Vec<String>,
    },

    /// Print the compiled orderBy for the query string's sort
    CompileSort {
        query: String,
    },

    /// Print the list request derived from the query string
    Request {
        query: String,

        /// Base filter as JSON, replaced by an id filter in show-selected-only mode
        #[arg(long)]
        filter: Option<String>,

        /// Field used for the id-membership filter
        #[arg(long)]
        id_field: Option<String>,
    },

    /// Generate JSON Schema for the config file format
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the effective configuration (defaults merged with the config file)
    ShowConfig,

    /// Write an example .table-view-state.yaml to the current directory
    InitConfig,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let (mut config, loaded_from) = config::load_effective(cli.config.as_deref())?;
    if let Some(path) = &loaded_from {
        tracing::debug!("Loaded config from {}", path.display());
    }
    if let Some(preset) = cli.preset {
        tracing::debug!(preset = preset.name(), "Applying preset");
        config = config.with_preset(preset);
    }
    if let Some(codec) = cli.codec {
        config.table.codec = codec;
    }
    Ok(config.validated()?)
}

/// Filter used when `RUST_LOG` is unset.
const fn default_log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = default_log_level(cli.verbose);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    match &cli.command {
        Commands::Decode { query } => {
            let config = load_config(&cli)?;
            println!("{}", cli::run_decode(query, &config)?);
        }

        Commands::Apply { query, ops, rows } => {
            let config = load_config(&cli)?;
            println!("{}", cli::run_apply(query, ops, rows, &config)?);
        }

        Commands::ApplyFile { path, ops, rows } => {
            let config = load_config(&cli)?;
            println!("{}", cli::run_apply_file(path, ops, rows, &config)?);
        }

        Commands::CompileSort { query } => {
            let config = load_config(&cli)?;
            println!("{}", cli::run_compile_sort(query, &config)?);
        }

        Commands::Request {
            query,
            filter,
            id_field,
        } => {
            let config = load_config(&cli)?;
            println!(
                "{}",
                cli::run_request(query, filter.as_deref(), id_field.as_deref(), &config)?
            );
        }

        Commands::Schema { output } => {
            let schema = config::generate_json_schema().context("failed to serialize schema")?;
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
        }

        Commands::ShowConfig => {
            let config = load_config(&cli)?;
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
        }

        Commands::InitConfig => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".table-view-state.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            std::fs::write(&target, config::generate_example_config())
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Wrote {}", target.display());
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "table-view-state", &mut io::stdout());
        }
    }

    Ok(())
}
