//! lintrc CLI
//!
//! Command-line interface for loading lint configuration documents and
//! resolving rule settings

mod commands;
mod output;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use colored::Colorize;
use lintrc_core::{Result, init_tracing};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lintrc")]
#[command(about = "lintrc: load lint configuration documents and resolve rule settings")]
#[command(version = lintrc_core::VERSION)]
#[command(
    long_about = "lintrc loads ESLint-style configuration documents, resolves `extends`\n\
against built-in presets and other config files, and reports the effective\n\
severity and options of each rule.\n\
\n\
Examples:\n  \
lintrc resolve eqeqeq indent     # Effective settings for two rules\n  \
lintrc rules --all               # Every rule the config mentions\n  \
lintrc env                       # Enabled environments\n  \
lintrc config validate           # Check the discovered config file"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(
        short,
        long,
        global = true,
        help = "Path to configuration file (default: search upward for .eslintrc.*)"
    )]
    config: Option<PathBuf>,

    /// Verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Generate shell completion script
    #[arg(
        long,
        value_enum,
        help = "Generate completion script for specified shell"
    )]
    generate_completion: Option<Shell>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the effective severity and options of rules
    Resolve {
        /// Rule names to resolve
        #[arg(required = true, help = "Rule names to resolve")]
        rules: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "human", help = "Output format")]
        format: OutputFormat,
    },

    /// List the rules the configuration sets
    Rules {
        /// Include rules that resolve to `off`
        #[arg(long, help = "Include disabled rules")]
        all: bool,

        /// Output format
        #[arg(short, long, default_value = "human", help = "Output format")]
        format: OutputFormat,
    },

    /// List environment flags
    Env {
        /// Output format
        #[arg(short, long, default_value = "human", help = "Output format")]
        format: OutputFormat,
    },

    /// Configuration file management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version information
    #[command(alias = "ver")]
    Version {
        /// Show detailed version information
        #[arg(long, help = "Show detailed version and build information")]
        detailed: bool,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Validate configuration file
    Validate {
        /// Path to configuration file to validate
        #[arg(help = "Path to configuration file (default: search for .eslintrc.*)")]
        path: Option<PathBuf>,
    },

    /// Show current configuration
    Show {
        /// Show resolved configuration (after extends and merging)
        #[arg(long, help = "Show resolved configuration after extends")]
        resolved: bool,
    },

    /// Print the JSON schema of the configuration format
    Schema,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    /// Human-readable output with colors
    Human,
    /// JSON format for programmatic consumption
    Json,
}

fn main() {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.generate_completion {
        generate_completion_script(shell);
        return;
    }

    if cli.no_color || std::env::var("NO_COLOR").is_ok() {
        colored::control::set_override(false);
    }

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "lintrc=error",
        1 => "lintrc=warn",
        2 => "lintrc=info",
        3 => "lintrc=debug",
        _ => "lintrc=trace",
    };
    unsafe {
        std::env::set_var("RUST_LOG", log_level);
    }
    init_tracing();

    if let Err(e) = run_command(cli) {
        tracing::debug!("Command failed ({:?})", e.kind());
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn generate_completion_script(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Resolve { rules, format }) => {
            commands::resolve_command(&rules, format, cli.config)
        }

        Some(Commands::Rules { all, format }) => commands::rules_command(all, format, cli.config),

        Some(Commands::Env { format }) => commands::env_command(format, cli.config),

        Some(Commands::Config { action }) => match action {
            ConfigAction::Validate { path } => {
                commands::config::validate_command(path.or(cli.config))
            }
            ConfigAction::Show { resolved } => commands::config::show_command(resolved, cli.config),
            ConfigAction::Schema => commands::config::schema_command(),
        },

        Some(Commands::Version { detailed }) => {
            if detailed {
                println!("lintrc {}", lintrc_core::VERSION);
                println!("Build information:");
                println!("  Target: {}", std::env::consts::ARCH);
                println!("  OS: {}", std::env::consts::OS);
                println!("  Core crate: {}", lintrc_core::NAME);
            } else {
                println!("{}", lintrc_core::VERSION);
            }
            Ok(())
        }

        None => {
            let mut cmd = Cli::command();
            cmd.print_help().map_err(|e| lintrc_core::LintrcError::io_error("<stdout>", e))?;
            Ok(())
        }
    }
}
