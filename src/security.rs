//! Pattern-based danger classification for generated commands.
//!
//! A fixed, ordered blocklist of case-insensitive regexes covering known
//! catastrophic operations. First match wins. Anything not enumerated here
//! passes silently: this is a speed/auditability tradeoff, not a semantic
//! analyzer.

use lazy_static::lazy_static;
use regex::Regex;

/// Patterns in evaluation order. The raw text travels with the verdict so
/// the user sees which rule fired.
const DANGER_PATTERNS: [&str; 13] = [
    r"\brm\s+-rf\s+/(?:\s|$)",                   // rm -rf / (root, not /path)
    r"\brm\s+-rf\s+/\*",                         // rm -rf /*
    r"\bmkfs(\.|_|-)",                           // mkfs.* filesystem formats
    r"\bdd\s+if=.*\s+of=/dev/sd[a-z]",           // dd writing to a disk device
    r"\bshutdown\b",
    r"\breboot\b",
    r"\bhalt\b",
    r":\s*\(\)\s*\{\s*:\s*\|\s*:\s*&\s*\};\s*:", // fork bomb
    r"\bformat\b",
    r"\bdiskpart\b",
    r"\bdel\s+/s\s+/q\s+c:\\",                   // windows recursive delete of C:\
    r"\brd\s+/s\s+/q\s+c:\\",
    r"\bremove-item\s+-recurse\s+-force\s+c:\\",
];

lazy_static! {
    static ref COMPILED: Vec<(Regex, &'static str)> = DANGER_PATTERNS
        .iter()
        .map(|p| {
            let re = Regex::new(&format!("(?i){}", p)).expect("danger pattern must compile");
            (re, *p)
        })
        .collect();
}

#[derive(Debug, Clone, Copy)]
pub struct SafetyVerdict {
    pub dangerous: bool,
    /// The pattern that fired, for the user-facing explanation.
    pub matched: Option<&'static str>,
}

pub struct CommandClassifier;

impl CommandClassifier {
    pub fn classify(command: &str) -> SafetyVerdict {
        let text = command.trim();
        for (re, pattern) in COMPILED.iter() {
            if re.is_match(text) {
                return SafetyVerdict {
                    dangerous: true,
                    matched: Some(pattern),
                };
            }
        }
        SafetyVerdict {
            dangerous: false,
            matched: None,
        }
    }
}
