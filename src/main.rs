//! dpp - configuration CLI for dpp.vim.
//!
//! Migrates configurations from other plugin managers to dpp.vim and
//! manages dpp-cli profiles.

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dpp_cli::{
    DppPaths, GlobalConfig, MigrateError, MigrateOptions, MigrationOutcome, Migrator, PathEnv,
};

/// Configuration CLI for dpp.vim
#[derive(Parser)]
#[command(name = "dpp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Migrate from other plugin managers to dpp.vim
    Migrate {
        /// Plugin manager to migrate from (dein, vim-plug, packer)
        #[arg(long)]
        from: String,

        /// Path to the source configuration file
        #[arg(short, long)]
        config: Option<String>,

        /// Show conversion result without creating files
        #[arg(long)]
        dry_run: bool,

        /// Output format for dpp.vim config (ts, toml, lua, vim)
        #[arg(short, long, default_value = "ts")]
        format: String,
    },

    /// Show the dpp-cli profile configuration
    Config {
        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::new("warn") };

    tracing_subscriber::registry().with(fmt::layer().with_target(false)).with(filter).init();

    match cli.command {
        Commands::Migrate { from, config, dry_run, format } => {
            cmd_migrate(&from, config.as_deref(), dry_run, &format);
        }
        Commands::Config { path } => {
            cmd_config(path)?;
        }
        Commands::Completions { shell } => {
            cmd_completions(shell);
        }
    }

    Ok(())
}

/// Run a migration and report the outcome.
fn cmd_migrate(from: &str, config: Option<&str>, dry_run: bool, format: &str) {
    let opts = match MigrateOptions::from_args(from, config, dry_run, format) {
        Ok(opts) => opts,
        Err(e) => fail(&e),
    };

    println!("🔄 Migrating from {} to dpp.vim...\n", opts.manager);

    let paths = DppPaths::resolve(&PathEnv::from_env());
    let migrator = Migrator::new(paths);

    match migrator.run(&opts) {
        Ok(MigrationOutcome::NoPlugins { source }) => {
            println!("📄 Source: {}", source.display());
            println!("\n⚠️  No plugins found in configuration");
        }
        Ok(MigrationOutcome::DryRun { source, count, output }) => {
            println!("📄 Source: {}", source.display());
            println!("   Found {count} plugins");
            println!("\n✨ Converting to dpp.vim ({} format)...\n", opts.format);
            println!("{}", "=".repeat(50));
            println!("DRY RUN - Generated configuration:");
            println!("{}", "=".repeat(50));
            println!("{output}");
            println!("{}", "=".repeat(50));
            println!("\nRun without --dry-run to create the configuration file");
        }
        Ok(MigrationOutcome::Written { source, count, path }) => {
            println!("📄 Source: {}", source.display());
            println!("   Found {count} plugins");
            println!("\n✅ Migration complete!");
            println!("   Created: {}", path.display());
            println!("\n📝 Next steps:");
            println!("   1. Review the generated configuration");
            println!("   2. Update your {} to load dpp.vim", init_file_hint(&opts));
        }
        Err(e) => fail(&e),
    }
}

/// Which editor entry point the user should wire up next.
fn init_file_hint(opts: &MigrateOptions) -> &'static str {
    if opts.format == dpp_cli::OutputFormat::Vim {
        "vimrc"
    } else {
        "init.vim/init.lua"
    }
}

/// Report a migration error with its remediation hint and exit non-zero.
fn fail(err: &MigrateError) -> ! {
    eprintln!("❌ {err}");
    if let Some(hint) = err.hint() {
        eprintln!("   {hint}");
    }
    std::process::exit(1);
}

/// Show the profile configuration.
fn cmd_config(path_only: bool) -> Result<()> {
    let config_path = GlobalConfig::config_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    if path_only {
        println!("{}", config_path.display());
        return Ok(());
    }

    let config = GlobalConfig::load()?;

    println!("Config file: {}", config_path.display());
    if config.profiles.is_empty() {
        println!("No profiles configured");
        return Ok(());
    }

    println!("Active profile: {}", config.active_profile);
    for profile in &config.profiles {
        println!(
            "  {} ({}, {})",
            profile.name,
            profile.editor.name(),
            profile.config_dir.display()
        );
    }

    Ok(())
}

/// Generate shell completions to stdout.
fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "dpp", &mut io::stdout());
}
