use anyhow::Result;
use colored::Colorize;
use inquire::{Select, Text};
use std::path::PathBuf;

use crate::config::Config;
use crate::patch::PatchSpec;

pub fn run() -> Result<()> {
    println!();
    println!(
        "    {}",
        "╭──────────────────────────────────────────────────────╮".bright_black()
    );
    println!(
        "    {}            {}            {}",
        "│".bright_black(),
        "⚙️  SETTINGS ⚙️".bold().white(),
        "│".bright_black()
    );
    println!(
        "    {}          {}          {}",
        "│".bright_black(),
        "Configure the patch mdpatch applies".dimmed(),
        "│".bright_black()
    );
    println!(
        "    {}",
        "╰──────────────────────────────────────────────────────╯".bright_black()
    );
    println!();

    let mut config = Config::load()?;

    let options = vec![
        "🎯  Set target path    │ File patched by default",
        "🧩  Set pattern        │ Fragment to remove",
        "✂️   Set replacement    │ Text inserted in its place",
        "📋  View settings      │ See current configuration",
        "←   Back",
    ];

    loop {
        let selection =
            Select::new("What would you like to configure?", options.clone()).prompt();

        let selection = match selection {
            Ok(s) => s,
            Err(inquire::InquireError::OperationCanceled)
            | Err(inquire::InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        match selection {
            s if s.contains("Set target path") => {
                if let Err(e) = set_target(&mut config) {
                    eprintln!("{} {}", "Error:".red(), e);
                }
            }
            s if s.contains("Set pattern") => {
                if let Err(e) = set_pattern(&mut config) {
                    eprintln!("{} {}", "Error:".red(), e);
                }
            }
            s if s.contains("Set replacement") => {
                if let Err(e) = set_replacement(&mut config) {
                    eprintln!("{} {}", "Error:".red(), e);
                }
            }
            s if s.contains("View settings") => {
                view_config(&config);
            }
            s if s.contains("Back") => break,
            _ => {}
        }

        println!();
    }

    Ok(())
}

fn set_target(config: &mut Config) -> Result<()> {
    let current = config.target_path();

    let path = Text::new("Target file path:")
        .with_help_message("Resolved relative to the working directory at run time")
        .with_default(&current.display().to_string())
        .prompt()?;

    if path.trim().is_empty() {
        println!("{}", "Cancelled.".dimmed());
        return Ok(());
    }

    config.target = Some(PathBuf::from(path.trim()));
    config.save()?;

    println!("{} Target path saved!", "✓".green());
    Ok(())
}

fn set_pattern(config: &mut Config) -> Result<()> {
    println!(
        "\n{} The wildcard span matches across newlines and is non-greedy.",
        "Tip:".yellow()
    );

    let pattern = Text::new("Fragment pattern (regex):")
        .with_default(&config.patch_spec().pattern)
        .prompt()?;

    if pattern.trim().is_empty() {
        println!("{}", "Cancelled.".dimmed());
        return Ok(());
    }

    // Reject patterns that will not compile before persisting them.
    let candidate = PatchSpec {
        pattern: pattern.clone(),
        replacement: config.patch_spec().replacement,
    };
    if let Err(e) = candidate.compile() {
        println!("{} {}", "✗".red(), e);
        return Ok(());
    }

    config.pattern = Some(pattern);
    config.save()?;

    println!("{} Pattern saved!", "✓".green());
    Ok(())
}

fn set_replacement(config: &mut Config) -> Result<()> {
    let replacement = Text::new("Replacement text:")
        .with_help_message("Inserted where the fragment was removed")
        .with_default(&config.patch_spec().replacement)
        .prompt()?;

    config.replacement = Some(replacement);
    config.save()?;

    println!("{} Replacement saved!", "✓".green());
    Ok(())
}

fn view_config(config: &Config) {
    let default_marker = |is_default: bool| {
        if is_default {
            " (built-in)".dimmed().to_string()
        } else {
            String::new()
        }
    };

    println!("\n{}", "Current Settings".bold());
    println!("{}", "─".repeat(40).dimmed());

    println!(
        "{} {}{}",
        "Target:".bold(),
        config.target_path().display().to_string().cyan(),
        default_marker(config.target.is_none())
    );
    println!(
        "{} {}{}",
        "Pattern:".bold(),
        config.patch_spec().pattern.cyan(),
        default_marker(config.pattern.is_none())
    );
    println!(
        "{} {}{}",
        "Replacement:".bold(),
        config.patch_spec().replacement.cyan(),
        default_marker(config.replacement.is_none())
    );

    if let Ok(path) = Config::config_path() {
        println!("{} {}", "Config file:".bold(), path.display().to_string().dimmed());
    }
}
