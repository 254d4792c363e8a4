use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::Colorize;
use std::io;
use std::path::PathBuf;

mod commands;
mod config;
mod document;
mod patch;

/// ASCII art banner for the application
const BANNER: &str = r#"
                _             _       _
  _ __ ___   __| |_ __   __ _| |_ ___| |__
 | '_ ` _ \ / _` | '_ \ / _` | __/ __| '_ \
 | | | | | | (_| | |_) | (_| | || (__| | | |
 |_| |_| |_|\__,_| .__/ \__,_|\__\___|_| |_|
                 |_|
"#;

/// Print the application banner
fn print_banner() {
    println!("{}", BANNER.cyan().bold());
}

/// Print a styled status line
fn print_status(label: &str, value: &str, icon: &str) {
    println!(
        "  {} {} {}",
        icon,
        format!("{}:", label).dimmed(),
        value.cyan()
    );
}

#[derive(Parser)]
#[command(name = "mdpatch")]
#[command(about = "Remove an orphaned legacy fragment from a markdown blueprint")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the patch and write the file back
    Apply {
        /// File to patch (defaults to the configured target)
        path: Option<PathBuf>,
        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,
    },
    /// Check whether the fragment is present, without writing
    Check {
        /// File to inspect (defaults to the configured target)
        path: Option<PathBuf>,
    },
    /// Configure settings (target path, pattern, replacement)
    Config,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Apply { path, dry_run }) => {
            commands::apply::run(path, dry_run)?;
        }
        Some(Commands::Check { path }) => {
            commands::check::run(path)?;
        }
        Some(Commands::Config) => {
            commands::config::run()?;
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
        }
        None => {
            // No subcommand - show interactive menu
            run_interactive()?;
        }
    }

    Ok(())
}

fn run_interactive() -> Result<()> {
    use inquire::Select;

    print_banner();

    println!(
        "  {} {}",
        "Version:".dimmed(),
        env!("CARGO_PKG_VERSION").cyan()
    );
    println!();

    println!("{}", "─".repeat(50).dimmed());

    let config = config::Config::load()?;
    let target = config.target_path();

    let pattern_source = if config.pattern.is_some() {
        "custom"
    } else {
        "built-in"
    };
    let target_status = if target.exists() {
        target.display().to_string()
    } else {
        format!("{} (not found here)", target.display())
    };

    print_status("Target", &target_status, "📄");
    print_status("Pattern", pattern_source, "🧩");

    println!("{}\n", "─".repeat(50).dimmed());

    let options = vec![
        "🩹  Apply patch",
        "🔍  Preview match (dry run)",
        "⚙️   Configure settings",
        "🚪  Exit",
    ];

    let selection = Select::new("What would you like to do?", options)
        .with_help_message("Use arrow keys to navigate, Enter to select")
        .prompt()?;

    println!(); // Add spacing

    match selection {
        s if s.contains("Apply patch") => commands::apply::run(None, false)?,
        s if s.contains("Preview match") => commands::check::run(None)?,
        s if s.contains("Configure") => commands::config::run()?,
        s if s.contains("Exit") => {
            println!("{}", "👋 Nothing patched. Bye!".cyan());
        }
        _ => unreachable!(),
    }

    Ok(())
}
