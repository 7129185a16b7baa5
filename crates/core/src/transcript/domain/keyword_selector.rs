use regex::{Regex, RegexBuilder};

use super::segment::Segment;

/// Filters transcript segments down to the ones worth capturing.
///
/// A segment is selected when its text contains at least one keyword as
/// a whole word, case-insensitively. Patterns are compiled once per
/// pipeline invocation, not per segment.
pub struct KeywordSelector {
    patterns: Vec<Regex>,
}

impl KeywordSelector {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Self, regex::Error> {
        let patterns = keywords
            .iter()
            .map(|k| {
                RegexBuilder::new(&format!(r"\b{}\b", regex::escape(k.as_ref())))
                    .case_insensitive(true)
                    .build()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// True if the text contains any keyword as a whole word.
    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }

    /// The subsequence of segments whose text matches, in input order.
    /// A segment matching several keywords appears exactly once.
    pub fn select(&self, segments: &[Segment]) -> Vec<Segment> {
        segments
            .iter()
            .filter(|s| self.matches(&s.text))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::DEFAULT_KEYWORDS;
    use rstest::rstest;

    fn segment(start: f64, end: f64, text: &str) -> Segment {
        Segment {
            start,
            end,
            text: text.to_string(),
        }
    }

    fn default_selector() -> KeywordSelector {
        KeywordSelector::new(DEFAULT_KEYWORDS).unwrap()
    }

    #[test]
    fn test_selects_only_matching_segment() {
        let segments = vec![
            segment(0.0, 1.0, "Hello"),
            segment(1.0, 2.0, "use this icon to search the client"),
        ];
        let selected = default_selector().select(&segments);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0], segments[1]);
    }

    #[test]
    fn test_case_insensitive() {
        let selector = default_selector();
        assert!(selector.matches("click the SEARCH field"));
        assert!(selector.matches("Icon in the corner"));
    }

    #[test]
    fn test_substring_of_longer_word_does_not_match() {
        let selector = default_selector();
        assert!(!selector.matches("the iconography is consistent"));
        assert!(!selector.matches("buttoned up"));
        assert!(selector.matches("press the button now"));
    }

    #[test]
    fn test_multi_keyword_segment_selected_once() {
        let segments = vec![segment(0.0, 1.0, "the settings menu has a search icon")];
        let selected = default_selector().select(&segments);
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn test_order_preserved() {
        let segments = vec![
            segment(0.0, 1.0, "open the menu"),
            segment(1.0, 2.0, "nothing here"),
            segment(2.0, 3.0, "now the settings"),
        ];
        let selected = default_selector().select(&segments);
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].text, "open the menu");
        assert_eq!(selected[1].text, "now the settings");
    }

    #[test]
    fn test_empty_selection_is_valid() {
        let segments = vec![segment(0.0, 1.0, "nothing noteworthy")];
        assert!(default_selector().select(&segments).is_empty());
    }

    #[test]
    fn test_no_keywords_selects_nothing() {
        let selector = KeywordSelector::new::<&str>(&[]).unwrap();
        assert!(!selector.matches("icon"));
    }

    #[test]
    fn test_keyword_with_regex_metacharacters_is_literal() {
        let selector = KeywordSelector::new(&["save.file"]).unwrap();
        assert!(selector.matches("open the save.file dialog"));
        // The dot must not act as a wildcard
        assert!(!selector.matches("open the saveXfile dialog"));
    }

    #[rstest]
    #[case("punctuation after: icon.", true)]
    #[case("parenthesized (icon) works", true)]
    #[case("hyphenated icon-like still a word boundary", true)]
    #[case("no keyword at all", false)]
    fn test_word_boundaries(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(default_selector().matches(text), expected);
    }
}
