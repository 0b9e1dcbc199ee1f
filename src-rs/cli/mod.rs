//! Argument parsing and dispatch for the two command-line tools.
//!
//! Each tool takes a set of mutually exclusive action flags, runs exactly
//! one action, and writes the result to stdout or to `--output`. With no
//! action flag the tool prints its help text.

pub mod layout;
pub mod workflow;

/// Splits a comma-separated flag value, trimming items and dropping empty
/// ones.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_trims_and_drops_blanks() {
        assert_eq!(
            split_list(" profile_image, textfield ,,button "),
            ["profile_image", "textfield", "button"]
        );
        assert!(split_list(" , ").is_empty());
    }
}
