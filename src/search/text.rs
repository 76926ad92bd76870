//! Text cleanup applied to provider output

/// Collapse every doubled backslash into a single one.
///
/// Exa returns LaTeX with backslashes escaped once more than intended, and
/// JSON serialization doubles them again. One left-to-right pass undoes a
/// single level: `\\\\` becomes `\\`, never `\`.
pub fn unescape_backslashes(text: &str) -> String {
    text.replace("\\\\", "\\")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doubled_becomes_single() {
        assert_eq!(unescape_backslashes(r"$\\alpha + \\beta$"), r"$\alpha + \beta$");
    }

    #[test]
    fn test_single_backslash_untouched() {
        assert_eq!(unescape_backslashes(r"a\nb \alpha"), r"a\nb \alpha");
        assert_eq!(unescape_backslashes("no escapes here"), "no escapes here");
    }

    #[test]
    fn test_single_pass_not_recursive() {
        assert_eq!(unescape_backslashes(r"\\\\frac"), r"\\frac");
        assert_eq!(unescape_backslashes(r"\\\"), r"\\");
    }

    #[test]
    fn test_second_pass_only_changes_remaining_doubles() {
        let once = unescape_backslashes(r"\alpha \\beta");
        assert_eq!(once, r"\alpha \beta");
        assert_eq!(unescape_backslashes(&once), once);
    }
}
