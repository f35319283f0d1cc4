//! Whitespace word splitting.

/// Append the whitespace-separated words of `s` to `words`.
///
/// Runs of whitespace count as one separator; blank input adds nothing.
pub fn split_into(s: &str, words: &mut Vec<String>) {
    words.extend(s.split_whitespace().map(str::to_string));
}

pub fn split(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    split_into(s, &mut words);
    words
}

pub fn begins_with(s: &str, prefix: &str) -> bool {
    s.starts_with(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_runs_of_whitespace() {
        assert_eq!(split("  -v \t--verbose\n"), vec!["-v", "--verbose"]);
    }

    #[test]
    fn empty_and_blank_input() {
        assert!(split("").is_empty());
        assert!(split(" \t\n ").is_empty());
    }

    #[test]
    fn appends_to_existing() {
        let mut words = vec!["model.mzn".to_string()];
        split_into("-p 4", &mut words);
        assert_eq!(words, vec!["model.mzn", "-p", "4"]);
    }

    #[test]
    fn prefix_check() {
        assert!(begins_with("-Ggecode", "-G"));
        assert!(begins_with("-G", "-G"));
        assert!(begins_with("x", ""));
        assert!(!begins_with("-G", "-Ggecode"));
    }
}
