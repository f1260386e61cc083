//! Naming helpers for browse-college assets.

/// Derive the image file name for a browse-college record.
///
/// Lowercases the name, turns spaces into `-`, and strips every character
/// outside `[a-z0-9-]`. A missing/empty name falls back to `"default"`.
///
/// # Examples
///
/// ```
/// use admitpath_core::naming::image_file_name;
///
/// assert_eq!(image_file_name("IIT Delhi"), "iit-delhi");
/// assert_eq!(image_file_name("St. Xavier's College"), "st-xaviers-college");
/// assert_eq!(image_file_name(""), "default");
/// ```
pub fn image_file_name(name: &str) -> String {
    if name.is_empty() {
        return "default".to_string();
    }

    name.to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(image_file_name("IIT Delhi"), "iit-delhi");
    }

    #[test]
    fn strips_punctuation() {
        assert_eq!(
            image_file_name("St. Xavier's College"),
            "st-xaviers-college"
        );
    }

    #[test]
    fn empty_name_falls_back_to_default() {
        assert_eq!(image_file_name(""), "default");
    }

    #[test]
    fn punctuation_only_name_collapses_to_empty() {
        // A present-but-unusable name keeps its (empty) slug; only a missing
        // name gets the fallback.
        assert_eq!(image_file_name("###"), "");
    }
}
