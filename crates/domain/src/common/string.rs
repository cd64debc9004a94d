//! Name normalization utilities.

use crate::error::StoryError;

/// Longest name accepted for a player-coined stat, power, or specialty.
pub const MAX_NAME_LENGTH: usize = 80;

/// Connector words kept lower-case unless they open the name.
const LOWER_WORDS: &[&str] = &[
    "a", "an", "and", "at", "by", "for", "in", "of", "on", "or", "the", "to", "with",
];

/// Normalizes a name for storage and comparison.
///
/// Trims, collapses internal whitespace, capitalizes the first letter of
/// every word (and of every hyphen-separated part) and lower-cases the rest.
/// Short connector words stay lower-case unless they open the name.
///
/// # Examples
///
/// ```
/// use storyteller_domain::common::dramatic_capitalize;
///
/// assert_eq!(dramatic_capitalize("  seven  shadow evasion "), "Seven Shadow Evasion");
/// assert_eq!(dramatic_capitalize("dragon-blooded"), "Dragon-Blooded");
/// assert_eq!(dramatic_capitalize("the mirror of the soul"), "The Mirror of the Soul");
/// ```
pub fn dramatic_capitalize(text: &str) -> String {
    text.split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            if i > 0 && LOWER_WORDS.contains(&lower.as_str()) {
                lower
            } else {
                lower
                    .split('-')
                    .map(capitalize_first)
                    .collect::<Vec<_>>()
                    .join("-")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Normalizes a player-supplied name and enforces presence and length.
///
/// `what` names the thing being named in the error message ("Charm", "Craft").
pub fn good_name(text: &str, what: &str, max_length: usize) -> Result<String, StoryError> {
    let name = dramatic_capitalize(text);
    if name.is_empty() {
        return Err(StoryError::invalid_value(format!(
            "Must enter a name for the {what}."
        )));
    }
    if name.chars().count() > max_length {
        return Err(StoryError::invalid_value(format!(
            "'{name}' is too long a name for a {what}."
        )));
    }
    Ok(name)
}

/// Converts a blank string to `None`, otherwise returns the trimmed text.
///
/// # Examples
///
/// ```
/// use storyteller_domain::common::none_if_empty;
///
/// assert_eq!(none_if_empty(" solar "), Some("solar"));
/// assert_eq!(none_if_empty("   "), None);
/// ```
pub fn none_if_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalizes_each_word() {
        assert_eq!(dramatic_capitalize("blacksmithing"), "Blacksmithing");
        assert_eq!(dramatic_capitalize("DIVINE works"), "Divine Works");
    }

    #[test]
    fn test_keeps_connectors_lower_except_first() {
        assert_eq!(
            dramatic_capitalize("single point shining into the void style"),
            "Single Point Shining Into the Void Style"
        );
        assert_eq!(dramatic_capitalize("of ash"), "Of Ash");
    }

    #[test]
    fn test_hyphenated_parts() {
        assert_eq!(
            dramatic_capitalize("silver-voiced nightingale style"),
            "Silver-Voiced Nightingale Style"
        );
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(dramatic_capitalize(""), "");
        assert_eq!(dramatic_capitalize("   "), "");
    }

    #[test]
    fn test_good_name_rejects_empty() {
        let err = good_name("  ", "Craft", MAX_NAME_LENGTH).unwrap_err();
        assert_eq!(err.to_string(), "Must enter a name for the Craft.");
    }

    #[test]
    fn test_good_name_rejects_long_names() {
        let long = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(matches!(
            good_name(&long, "Charm", MAX_NAME_LENGTH),
            Err(StoryError::InvalidValue(_))
        ));
        let exact = "x".repeat(MAX_NAME_LENGTH);
        assert!(good_name(&exact, "Charm", MAX_NAME_LENGTH).is_ok());
    }
}
