//! Parsing of one editor input line.
//!
//! Lines follow `<verb> <lsargs>=<rsargs>`. Everything after the first
//! space is the argument text; the first `=` splits it into left and
//! right halves.

use storyteller_domain::StoryError;

/// One parsed editor line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command<'a> {
    pub verb: &'a str,
    pub lsargs: &'a str,
    pub rsargs: Option<&'a str>,
}

impl<'a> Command<'a> {
    /// Split a line into verb and arguments. Returns `None` for a blank line.
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (verb, args) = match line.split_once(char::is_whitespace) {
            Some((verb, args)) => (verb, args.trim()),
            None => (line, ""),
        };
        let (lsargs, rsargs) = match args.split_once('=') {
            Some((left, right)) => (left.trim(), Some(right.trim())),
            None => (args, None),
        };
        Some(Self {
            verb,
            lsargs,
            rsargs,
        })
    }

    /// Left-hand side split on its first `/`: `(Some(prefix), rest)` or `(None, whole)`.
    pub fn qualified_lhs(&self) -> (Option<&'a str>, &'a str) {
        match self.lsargs.split_once('/') {
            Some((prefix, rest)) => (Some(prefix.trim()), rest.trim()),
            None => (None, self.lsargs),
        }
    }

    /// Right-hand side, required for this verb.
    pub fn value(&self, usage: &str) -> Result<&'a str, StoryError> {
        self.rsargs
            .ok_or_else(|| StoryError::invalid_value(format!("Usage: {usage}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_verb_and_both_sides() {
        let cmd = Command::parse("  set  Strength = 3 ").unwrap();
        assert_eq!(cmd.verb, "set");
        assert_eq!(cmd.lsargs, "Strength");
        assert_eq!(cmd.rsargs, Some("3"));
    }

    #[test]
    fn parse_without_equals() {
        let cmd = Command::parse("favor melee").unwrap();
        assert_eq!(cmd.lsargs, "melee");
        assert_eq!(cmd.rsargs, None);

        let bare = Command::parse("show").unwrap();
        assert_eq!(bare.verb, "show");
        assert_eq!(bare.lsargs, "");
    }

    #[test]
    fn blank_line_is_none() {
        assert!(Command::parse("   ").is_none());
    }

    #[test]
    fn qualified_lhs_splits_on_first_slash() {
        let cmd = Command::parse("add solar/athletics=Seven Shadow Evasion").unwrap();
        assert_eq!(cmd.qualified_lhs(), (Some("solar"), "athletics"));
        assert_eq!(cmd.rsargs, Some("Seven Shadow Evasion"));

        let plain = Command::parse("add athletics=Foo").unwrap();
        assert_eq!(plain.qualified_lhs(), (None, "athletics"));
    }

    #[test]
    fn missing_value_reports_usage() {
        let cmd = Command::parse("set strength").unwrap();
        let err = cmd.value("set <stat>=<value>").unwrap_err();
        assert_eq!(err.to_string(), "Usage: set <stat>=<value>");
    }
}
