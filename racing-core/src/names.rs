//! Name splitting for raw comma-separated input

/// Separator between car names in raw input
pub const NAME_DELIMITER: char = ',';

/// Split raw input into trimmed names, keeping order and empty entries
///
/// No validation happens here; blank names are rejected when cars are built.
pub fn split_names(raw: &str) -> Vec<String> {
    raw.split(NAME_DELIMITER)
        .map(|token| token.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_and_trim() {
        assert_eq!(split_names("pobi, woni ,jun"), vec!["pobi", "woni", "jun"]);
    }

    #[test]
    fn test_single_name() {
        assert_eq!(split_names("pobi"), vec!["pobi"]);
    }

    #[test]
    fn test_empty_tokens_preserved() {
        assert_eq!(split_names("a,,b,"), vec!["a", "", "b", ""]);
        assert_eq!(split_names(""), vec![""]);
    }
}
