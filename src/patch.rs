use regex::{Regex, RegexBuilder};
use std::ops::Range;
use thiserror::Error;

/// Path patched when neither the CLI nor the config file names one.
pub const DEFAULT_TARGET: &str = "APP_BLUEPRINT.md";

/// Orphaned legacy fragment: from the quoted "Settle now" label (curly or
/// straight quotes) through the trailing "at ₹0.". The wildcard span is
/// non-greedy and may cross newlines.
pub const DEFAULT_PATTERN: &str = r#" [“"]Settle now[”"].*?at ₹0\."#;

/// The removed span collapses to a single period.
pub const DEFAULT_REPLACEMENT: &str = ".";

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("invalid patch pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A single bounded substitution: one pattern, one replacement, applied to
/// at most one occurrence per document.
#[derive(Debug, Clone)]
pub struct PatchSpec {
    pub pattern: String,
    pub replacement: String,
}

impl Default for PatchSpec {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            replacement: DEFAULT_REPLACEMENT.to_string(),
        }
    }
}

/// Result of running a patch over a document.
#[derive(Debug)]
pub struct PatchOutcome {
    /// The rewritten text (identical to the input when nothing matched).
    pub text: String,
    /// Byte range of the removed span in the original text, if any.
    pub span: Option<Range<usize>>,
}

impl PatchOutcome {
    pub fn replaced(&self) -> bool {
        self.span.is_some()
    }
}

impl PatchSpec {
    /// Compile the pattern with dot-matches-newline so the wildcard span can
    /// cross line breaks.
    pub fn compile(&self) -> Result<Regex, PatchError> {
        RegexBuilder::new(&self.pattern)
            .dot_matches_new_line(true)
            .build()
            .map_err(|source| PatchError::InvalidPattern {
                pattern: self.pattern.clone(),
                source,
            })
    }

    /// Replace the leftmost match, if any. Absence of a match is a no-op,
    /// not an error.
    pub fn apply(&self, text: &str) -> Result<PatchOutcome, PatchError> {
        let re = self.compile()?;

        match re.find(text) {
            Some(m) => {
                let mut out =
                    String::with_capacity(text.len() - m.len() + self.replacement.len());
                out.push_str(&text[..m.start()]);
                out.push_str(&self.replacement);
                out.push_str(&text[m.end()..]);

                Ok(PatchOutcome {
                    text: out,
                    span: Some(m.range()),
                })
            }
            None => Ok(PatchOutcome {
                text: text.to_string(),
                span: None,
            }),
        }
    }
}

/// 1-based line number of a byte offset, for human-readable match reports.
pub fn line_of(text: &str, offset: usize) -> usize {
    text[..offset.min(text.len())].matches('\n').count() + 1
}

/// Single-line excerpt of a matched fragment, truncated for display.
pub fn excerpt(fragment: &str, max_chars: usize) -> String {
    let flat = fragment.replace('\n', "⏎");

    if flat.chars().count() <= max_chars {
        return flat;
    }

    let truncated: String = flat.chars().take(max_chars).collect();
    format!("{}…", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_spec() -> PatchSpec {
        PatchSpec::default()
    }

    #[test]
    fn test_targeted_removal() {
        let input = "Some text. “Settle now” and other words\nspanning lines at ₹0. More text follows.";
        let outcome = default_spec().apply(input).unwrap();
        assert!(outcome.replaced());
        assert_eq!(outcome.text, "Some text.. More text follows.");
    }

    #[test]
    fn test_straight_quotes_also_match() {
        let input = "Balance due \"Settle now\" right away at ₹0. Rest.";
        let outcome = default_spec().apply(input).unwrap();
        assert!(outcome.replaced());
        assert_eq!(outcome.text, "Balance due. Rest.");
    }

    #[test]
    fn test_no_op_on_absence() {
        let input = "Nothing to remove here. Just ordinary prose with ₹500 amounts.";
        let outcome = default_spec().apply(input).unwrap();
        assert!(!outcome.replaced());
        assert_eq!(outcome.text, input);
    }

    #[test]
    fn test_at_most_one_replacement() {
        let input = "A “Settle now” first at ₹0. B “Settle now” second at ₹0. C";
        let outcome = default_spec().apply(input).unwrap();
        assert_eq!(outcome.text, "A. B “Settle now” second at ₹0. C");
    }

    #[test]
    fn test_non_greedy_span() {
        // Two valid end anchors after one start: the shorter span wins.
        let input = "X “Settle now” early at ₹0. middle at ₹0. Y";
        let outcome = default_spec().apply(input).unwrap();
        assert_eq!(outcome.text, "X. middle at ₹0. Y");
    }

    #[test]
    fn test_idempotent() {
        let input = "Intro “Settle now” legacy text at ₹0. Outro";
        let once = default_spec().apply(input).unwrap();
        let twice = default_spec().apply(&once.text).unwrap();
        assert!(!twice.replaced());
        assert_eq!(once.text, twice.text);
    }

    #[test]
    fn test_unicode_preserved_outside_match() {
        let input = "Fees are ₹250 — “quoted” text. Then “Settle now” at ₹0. End ₹0 stays.";
        let outcome = default_spec().apply(input).unwrap();
        assert_eq!(outcome.text, "Fees are ₹250 — “quoted” text. Then. End ₹0 stays.");
    }

    #[test]
    fn test_custom_replacement() {
        let spec = PatchSpec {
            pattern: "b+".to_string(),
            replacement: "B".to_string(),
        };
        let outcome = spec.apply("abbbc bb").unwrap();
        assert_eq!(outcome.text, "aBc bb");
        assert_eq!(outcome.span, Some(1..4));
    }

    #[test]
    fn test_invalid_pattern_errors() {
        let spec = PatchSpec {
            pattern: "(unclosed".to_string(),
            replacement: ".".to_string(),
        };
        assert!(matches!(
            spec.apply("anything"),
            Err(PatchError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_excerpt_flattens_and_truncates() {
        assert_eq!(excerpt("short\nbit", 120), "short⏎bit");
        assert_eq!(excerpt("abcdef", 4), "abcd…");
    }

    #[test]
    fn test_line_of() {
        let text = "one\ntwo\nthree";
        assert_eq!(line_of(text, 0), 1);
        assert_eq!(line_of(text, 5), 2);
        assert_eq!(line_of(text, text.len()), 3);
    }
}
