use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use qdoc_kit::cmd;
use std::process;

/// Documentation site toolkit for quantum computing docs
///
/// qdoc formats measurement results, estimates job cost, and keeps a docs
/// tree and its built site tidy.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable colored output (useful for CI/CD or piping)
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank measurement counts and show outcome probabilities
    Results {
        /// JSON file of counts (omit or '-' to read stdin)
        #[arg(value_name = "FILE")]
        file: Option<String>,

        /// Counts given inline as a JSON object
        #[arg(short, long, value_name = "JSON")]
        inline: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Estimate the cost of running a job
    Cost {
        /// Number of shots
        #[arg(short, long, allow_negative_numbers = true)]
        shots: i64,

        /// Number of qubits
        #[arg(short, long, allow_negative_numbers = true)]
        qubits: i64,

        /// Backend name; simulator runs are free
        #[arg(short, long, default_value = "simulator")]
        backend: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a kubectl command for a docs snippet
    Kubectl {
        /// Operation, e.g. get, describe, delete
        operation: String,

        /// Resource type, e.g. qiskitjob
        resource: String,

        /// Resource name
        name: String,

        /// Namespace to target
        #[arg(short, long)]
        namespace: Option<String>,
    },

    /// Open external links in built HTML in a new tab
    Links {
        /// HTML file or site directory
        #[arg(value_name = "PATH")]
        path: String,

        /// Host of the docs site; links to it stay internal
        #[arg(long)]
        site_host: Option<String>,

        /// Show what would be changed without modifying files
        #[arg(long)]
        dry_run: bool,
    },

    /// Read or set the preferred color scheme
    Theme {
        /// Directory holding the preferences file
        #[arg(long, default_value = ".", global = true)]
        dir: String,

        #[command(subcommand)]
        action: ThemeAction,
    },

    /// Validate markdown documentation
    Validate {
        /// Docs directory (defaults to docs-dir from .qdoc.toml)
        #[arg(value_name = "DIR")]
        dir: Option<String>,

        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the stored color scheme
    Get,

    /// Store a color scheme
    Set {
        /// Scheme name, e.g. default or slate
        scheme: String,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let result = match &cli.command {
        Some(Commands::Results { file, inline, json }) => {
            cmd::cmd_results(file.as_deref(), inline.as_deref(), *json)
        }
        Some(Commands::Cost {
            shots,
            qubits,
            backend,
            json,
        }) => cmd::cmd_cost(*shots, *qubits, backend, *json),
        Some(Commands::Kubectl {
            operation,
            resource,
            name,
            namespace,
        }) => {
            cmd::cmd_kubectl(operation, resource, name, namespace.as_deref());
            Ok(())
        }
        Some(Commands::Links {
            path,
            site_host,
            dry_run,
        }) => cmd::cmd_links(path, site_host.as_deref(), *dry_run),
        Some(Commands::Theme { dir, action }) => match action {
            ThemeAction::Get => cmd::cmd_theme_get(dir),
            ThemeAction::Set { scheme } => cmd::cmd_theme_set(dir, scheme),
        },
        Some(Commands::Validate { dir, strict, json }) => {
            cmd::cmd_validate(dir.as_deref(), *strict, *json)
        }
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(*shell, &mut Cli::command());
            Ok(())
        }
        None => {
            // No subcommand provided, show help
            println!("qdoc v{}", env!("CARGO_PKG_VERSION"));
            println!("Documentation site toolkit\n");
            println!("Usage: qdoc <COMMAND>\n");
            println!("Commands:");
            println!("  results      Rank measurement counts");
            println!("  cost         Estimate job cost");
            println!("  kubectl      Print a kubectl command");
            println!("  links        Annotate external links in built HTML");
            println!("  theme        Read or set the preferred color scheme");
            println!("  validate     Validate markdown documentation");
            println!("  completions  Generate shell completions");
            println!("\nRun 'qdoc <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use qdoc_kit::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
