//! Partial-match resolution of player text against an option list.

use crate::error::StoryError;

/// Resolves `input` against `options` case-insensitively.
///
/// An exact match wins. Otherwise the input must be the prefix of exactly
/// one option. `what` names the option set in error messages.
///
/// # Examples
///
/// ```
/// use storyteller_domain::common::partial_match;
///
/// let options = ["Medicine", "Melee", "Martial Arts"];
/// assert_eq!(partial_match("Ability", "mel", options).unwrap(), "Melee");
/// assert!(partial_match("Ability", "m", options).is_err());
/// ```
pub fn partial_match<'a, I>(what: &str, input: &str, options: I) -> Result<&'a str, StoryError>
where
    I: IntoIterator<Item = &'a str>,
{
    let options: Vec<&'a str> = options.into_iter().collect();
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Err(StoryError::invalid_value(format!(
            "Must enter a {what} name!"
        )));
    }

    if let Some(exact) = options.iter().find(|o| o.to_lowercase() == needle) {
        return Ok(*exact);
    }

    let candidates: Vec<&'a str> = options
        .iter()
        .copied()
        .filter(|o| o.to_lowercase().starts_with(&needle))
        .collect();

    match candidates.as_slice() {
        [only] => Ok(*only),
        [] => Err(StoryError::not_found(what, input.trim(), options)),
        _ => Err(StoryError::ambiguous(what, input.trim(), candidates)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABILITIES: [&str; 5] = ["Martial Arts", "Medicine", "Melee", "Sail", "Socialize"];

    #[test]
    fn test_unique_prefix_resolves() {
        assert_eq!(partial_match("Ability", "mel", ABILITIES).unwrap(), "Melee");
        assert_eq!(partial_match("Ability", "SOC", ABILITIES).unwrap(), "Socialize");
    }

    #[test]
    fn test_exact_match_beats_prefix() {
        let options = ["Lore", "Lorekeeper"];
        assert_eq!(partial_match("Stat", "lore", options).unwrap(), "Lore");
    }

    #[test]
    fn test_shared_prefix_is_ambiguous() {
        let err = partial_match("Ability", "m", ABILITIES).unwrap_err();
        match err {
            StoryError::Ambiguous { candidates, .. } => {
                assert_eq!(candidates, vec!["Martial Arts", "Medicine", "Melee"]);
            }
            other => panic!("expected Ambiguous, got {other:?}"),
        }
    }

    #[test]
    fn test_no_match_lists_choices() {
        let err = partial_match("Ability", "zz", ABILITIES).unwrap_err();
        match err {
            StoryError::NotFound { choices, .. } => assert_eq!(choices.len(), 5),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_input_is_invalid() {
        assert!(matches!(
            partial_match("Ability", "  ", ABILITIES),
            Err(StoryError::InvalidValue(_))
        ));
    }
}
