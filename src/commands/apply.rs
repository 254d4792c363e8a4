use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::document;
use crate::patch::{self, PatchOutcome};

/// Load, patch, and write back the target document.
pub fn run(path: Option<PathBuf>, dry_run: bool) -> Result<()> {
    let config = Config::load()?;
    let target = path.unwrap_or_else(|| config.target_path());
    let spec = config.patch_spec();

    let text = document::load(&target)?;
    let outcome = spec.apply(&text)?;

    if dry_run {
        report(&target, &text, &outcome);
        return Ok(());
    }

    // A no-match run still rewrites the (identical) content and succeeds.
    document::persist(&target, &outcome.text)?;
    println!("Done");

    Ok(())
}

fn report(target: &Path, text: &str, outcome: &PatchOutcome) {
    match &outcome.span {
        Some(span) => {
            println!(
                "{} Would remove {} bytes at line {} of {}",
                "✓".green(),
                span.len(),
                patch::line_of(text, span.start),
                target.display().to_string().cyan()
            );
            println!("  {}", patch::excerpt(&text[span.clone()], 120).dimmed());
        }
        None => {
            println!(
                "{} Pattern not found; {} would be rewritten unchanged",
                "⊘".yellow(),
                target.display().to_string().cyan()
            );
        }
    }
}
