use std::collections::BTreeSet;

use regex::{Regex, RegexBuilder};

use crate::error::Result;

/// Matches a fixed vocabulary of skill phrases in free text.
///
/// Each phrase is compiled once into its own case-insensitive pattern with
/// the phrase text escaped, so entries like "C++" or "Natural Language
/// Processing (NLP)" match literally rather than as regex syntax. A word
/// boundary is asserted at an edge only when the phrase itself starts or
/// ends with a word character; that keeps "SQL" from firing inside
/// "NoSQL" while still letting parenthesised phrases match next to
/// whitespace.
pub struct SkillMatcher {
    phrases: Vec<(String, Regex)>,
}

impl SkillMatcher {
    pub fn new<I, S>(vocabulary: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut phrases = Vec::new();
        for phrase in vocabulary {
            let canonical = phrase.as_ref().to_string();
            let pattern = phrase_pattern(&canonical);
            let regex = RegexBuilder::new(&pattern)
                .case_insensitive(true)
                .build()?;
            phrases.push((canonical, regex));
        }
        Ok(Self { phrases })
    }

    /// Compile the built-in skill vocabulary.
    pub fn default_vocabulary() -> Result<Self> {
        Self::new(crate::vocabulary::SKILL_VOCABULARY.iter().copied())
    }

    /// Every vocabulary phrase found in `text`, canonically spelled and
    /// deduplicated. Empty or unmatched input yields an empty set.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        if text.is_empty() {
            return found;
        }
        for (canonical, regex) in &self.phrases {
            if regex.is_match(text) {
                found.insert(canonical.clone());
            }
        }
        found
    }

    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(|(canonical, _)| canonical.as_str())
    }
}

/// Escape the phrase and attach `\b` only where the edge character is a
/// word character; `\b` next to a literal `(` or `+` would demand a word
/// character on the far side and silently never match.
fn phrase_pattern(phrase: &str) -> String {
    let escaped = regex::escape(phrase);
    let leading = phrase
        .chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '_');
    let trailing = phrase
        .chars()
        .last()
        .is_some_and(|c| c.is_alphanumeric() || c == '_');
    format!(
        "{}{}{}",
        if leading { r"\b" } else { "" },
        escaped,
        if trailing { r"\b" } else { "" },
    )
}
