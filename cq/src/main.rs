//! cq: Country Query - browse and search country data from the terminal.

use std::fs::File;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use simplelog::{ColorChoice, Config as LogConfig, LevelFilter, TermLogger, TerminalMode, WriteLogger};

mod browse;
mod commands;

use commands::{Source, SourceOptions};

#[derive(Parser)]
#[command(name = "cq")]
#[command(about = "Country Query - search and browse countries from a GraphQL API")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct GlobalArgs {
    /// GraphQL endpoint (overrides config and GLOBE_ENDPOINT)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Read countries from a JSON file instead of the network
    #[arg(long = "from-file", global = true, value_name = "PATH")]
    from_file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long = "timeout", global = true, value_name = "SECS")]
    timeout: Option<u64>,

    /// Log debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    /// Log file (the browser logs to GLOBE_ROOT/cq.log by default)
    #[arg(long = "log-file", global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive browser (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Initial query text
        #[arg(default_value = "")]
        query: String,
    },

    /// Print the rows a query shows, marking the auto-selected one
    #[command(visible_alias = "l")]
    List {
        /// Query (e.g., fra, "search:land size:5")
        #[arg(default_value = "")]
        query: String,

        /// Output format: table, json, names
        #[arg(short = 'f', long = "format", default_value = "table")]
        format: String,
    },

    /// Print a single browser frame for a query
    Snapshot {
        /// Query text
        #[arg(default_value = "")]
        query: String,
    },

    /// Show details of one country
    #[command(visible_alias = "s")]
    Show {
        /// Country code (case-insensitive)
        code: String,

        /// Output format: table, json
        #[arg(short = 'f', long = "format", default_value = "table")]
        format: String,
    },

    /// Explain how a query is interpreted
    #[command(visible_alias = "p")]
    Parse {
        /// Query text
        query: String,

        /// Output format: table, json
        #[arg(short = 'f', long = "format", default_value = "table")]
        format: String,
    },

    /// Quick reference for commands and query syntax
    #[command(name = "quick-help", visible_alias = "?")]
    QuickHelp,
}

/// Browser logs go to a file so they don't draw over the screen.
fn init_logging(global: &GlobalArgs, interactive: bool) {
    let level = if global.verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    let log_path = global.log_file.clone().or_else(|| {
        interactive
            .then(|| atlas::Config::load().ok().map(|c| c.log_path()))
            .flatten()
    });

    if let Some(path) = log_path {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(file) = File::create(&path) {
            let file_level = if global.verbose { LevelFilter::Debug } else { LevelFilter::Info };
            let _ = WriteLogger::init(file_level, LogConfig::default(), file);
            return;
        }
    }

    if !interactive {
        let _ = TermLogger::init(level, LogConfig::default(), TerminalMode::Stderr, ColorChoice::Auto);
    }
}

async fn run(cli: Cli) -> atlas::Result<()> {
    let opts = SourceOptions {
        endpoint: cli.global.endpoint.clone(),
        from_file: cli.global.from_file.clone(),
        timeout_secs: cli.global.timeout,
    };

    let command = cli.command.unwrap_or(Commands::Browse { query: String::new() });

    match command {
        Commands::Browse { query } => browse::browse(&query, Source::resolve(&opts)?).await,
        Commands::List { query, format } => commands::list(&query, &format, &Source::resolve(&opts)?).await,
        Commands::Snapshot { query } => commands::snapshot(&query, &Source::resolve(&opts)?).await,
        Commands::Show { code, format } => commands::show(&code, &format, &Source::resolve(&opts)?).await,
        Commands::Parse { query, format } => commands::parse(&query, &format),
        Commands::QuickHelp => commands::quick_help(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let interactive = matches!(cli.command, None | Some(Commands::Browse { .. }));
    init_logging(&cli.global, interactive);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
