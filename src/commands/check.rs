use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::config::Config;
use crate::document;
use crate::patch;

/// Read-only probe: report whether the pattern matches, without writing.
pub fn run(path: Option<PathBuf>) -> Result<()> {
    let config = Config::load()?;
    let target = path.unwrap_or_else(|| config.target_path());
    let spec = config.patch_spec();

    let text = document::load(&target)?;
    let outcome = spec.apply(&text)?;

    match &outcome.span {
        Some(span) => {
            println!(
                "{} Match at line {} of {} ({} bytes)",
                "✓".green(),
                patch::line_of(&text, span.start),
                target.display().to_string().cyan(),
                span.len()
            );
            println!("  {}", patch::excerpt(&text[span.clone()], 120).dimmed());
        }
        None => {
            println!(
                "{} No match in {}",
                "⊘".yellow(),
                target.display().to_string().cyan()
            );
        }
    }

    Ok(())
}
