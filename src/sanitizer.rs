//! Normalizes raw LLM output into a single candidate command line.
//!
//! Models wrap commands in markdown fences or quotes even when the prompt
//! forbids it. Strip those, then keep the first non-empty line.

/// Clean a raw completion down to one command line. Never panics; malformed
/// input degrades to best-effort single-line extraction.
pub fn sanitize_completion(raw: &str) -> String {
    let mut text = raw.trim().to_string();

    // Remove ```...``` blocks: drop the opening fence line (it may carry a
    // language tag) and the closing fence line if present.
    if text.starts_with("```") {
        let mut lines: Vec<&str> = text.lines().collect();
        lines.remove(0);
        if lines.last().map(|l| l.trim() == "```").unwrap_or(false) {
            lines.pop();
        }
        text = lines.join("\n").trim().to_string();
    }

    // Sometimes the model quotes the whole command.
    let text = strip_wrapping_quotes(&text);

    // Keep the first non-empty line in case the output is still multi-line.
    for line in text.lines() {
        let line = line.trim();
        if !line.is_empty() {
            return line.to_string();
        }
    }
    text
}

fn strip_wrapping_quotes(text: &str) -> String {
    if text.len() >= 2 {
        let first = text.as_bytes()[0];
        let last = text.as_bytes()[text.len() - 1];
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return text[1..text.len() - 1].trim().to_string();
        }
    }
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_command_passes_through() {
        assert_eq!(sanitize_completion("ls -la"), "ls -la");
        assert_eq!(sanitize_completion("  ls -la \n"), "ls -la");
    }

    #[test]
    fn test_fence_with_language_tag() {
        assert_eq!(sanitize_completion("```bash\nrm -rf /\n```"), "rm -rf /");
        assert_eq!(sanitize_completion("```powershell\nGet-Date\n```"), "Get-Date");
    }

    #[test]
    fn test_fence_without_language_tag() {
        assert_eq!(sanitize_completion("```\necho hi\n```"), "echo hi");
    }

    #[test]
    fn test_fence_without_closing_marker() {
        assert_eq!(sanitize_completion("```bash\necho hi"), "echo hi");
    }

    #[test]
    fn test_wrapping_quotes_stripped_once() {
        assert_eq!(sanitize_completion("\"echo hello\""), "echo hello");
        assert_eq!(sanitize_completion("'echo hello'"), "echo hello");
        // Inner quotes survive.
        assert_eq!(
            sanitize_completion("\"echo \"nested\" done\""),
            "echo \"nested\" done"
        );
    }

    #[test]
    fn test_mismatched_quotes_kept() {
        assert_eq!(sanitize_completion("\"echo hello'"), "\"echo hello'");
    }

    #[test]
    fn test_first_non_empty_line_wins() {
        assert_eq!(sanitize_completion("\n\n  \necho one\necho two"), "echo one");
    }

    #[test]
    fn test_empty_input_stays_empty() {
        assert_eq!(sanitize_completion(""), "");
        assert_eq!(sanitize_completion("   \n  \n"), "");
        assert_eq!(sanitize_completion("```\n```"), "");
    }

    #[test]
    fn test_fenced_multiline_keeps_first_line() {
        let raw = "```sh\ncd /tmp\nls\n```";
        assert_eq!(sanitize_completion(raw), "cd /tmp");
    }
}
