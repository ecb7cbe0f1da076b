//! Markup stripping, tokenization, counting and ranking.
//!
//! # Design
//! Each stage is a free function so it can be tested on its own; `WordRanker`
//! only composes them. Words are exact, case-sensitive byte sequences: no
//! folding, no normalization, no entity decoding.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Characters that separate words after markup has been stripped.
pub const SEPARATORS: &[char] = &[
    ' ', '\t', '\n', ',', '.', ':', ';', '"', '\'', '(', ')', '[', ']', '{', '}', '!', '?', '/',
    '|', '\\', '-',
];

/// Word occurrence counts keyed by the exact word.
pub type WordFrequencyTable = HashMap<String, usize>;

/// One entry of a ranked word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Scanner state while stripping tags.
///
/// | state     | input         | next      | emitted      |
/// |-----------|---------------|-----------|--------------|
/// | Outside   | `<`           | InsideTag | nothing      |
/// | Outside   | `>`           | Outside   | `>` and ` `  |
/// | Outside   | other         | Outside   | the char     |
/// | InsideTag | `>`           | Outside   | ` `          |
/// | InsideTag | other         | InsideTag | nothing      |
///
/// A `<` that is never closed keeps the scanner in `InsideTag` for the rest
/// of the input, so nothing after it is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagState {
    Outside,
    InsideTag,
}

impl TagState {
    /// Apply one input character, pushing whatever it emits onto `out`.
    pub fn step(self, c: char, out: &mut String) -> TagState {
        match (self, c) {
            (TagState::Outside, '<') => TagState::InsideTag,
            (TagState::Outside, '>') => {
                out.push('>');
                out.push(' ');
                TagState::Outside
            }
            (TagState::Outside, c) => {
                out.push(c);
                TagState::Outside
            }
            (TagState::InsideTag, '>') => {
                out.push(' ');
                TagState::Outside
            }
            (TagState::InsideTag, _) => TagState::InsideTag,
        }
    }
}

/// Remove every `<...>` span, leaving one space in its place.
pub fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut state = TagState::Outside;
    for c in html.chars() {
        state = state.step(c, &mut out);
    }
    out
}

/// Split on `SEPARATORS`, dropping empty fragments.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(SEPARATORS).filter(|w| !w.is_empty())
}

pub fn count_words<'a>(words: impl IntoIterator<Item = &'a str>) -> WordFrequencyTable {
    let mut table = WordFrequencyTable::new();
    for word in words {
        *table.entry(word.to_string()).or_insert(0) += 1;
    }
    table
}

/// Order by count descending, then by word ascending (byte-wise).
pub fn rank_counts(table: WordFrequencyTable) -> Vec<WordCount> {
    let mut ranked: Vec<WordCount> = table
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    ranked
}

/// Turns page text into a frequency-ranked word list.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordRanker;

impl WordRanker {
    pub fn new() -> Self {
        Self
    }

    pub fn rank(&self, text: &str) -> Vec<WordCount> {
        let stripped = strip_tags(text);
        rank_counts(count_words(tokenize(&stripped)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wc(word: &str, count: usize) -> WordCount {
        WordCount {
            word: word.to_string(),
            count,
        }
    }

    #[test]
    fn strip_replaces_each_tag_with_a_space() {
        assert_eq!(strip_tags("<b>cat</b> cat dog"), " cat  cat dog");
    }

    #[test]
    fn strip_leaves_plain_text_alone() {
        assert_eq!(strip_tags("plain text, no tags"), "plain text, no tags");
    }

    #[test]
    fn unmatched_open_suppresses_the_rest() {
        assert_eq!(strip_tags("keep <this and everything after"), "keep ");
        assert_eq!(strip_tags("<"), "");
    }

    #[test]
    fn stray_close_passes_through_with_a_space() {
        assert_eq!(strip_tags("a>b"), "a> b");
    }

    #[test]
    fn nested_open_is_not_special() {
        assert_eq!(strip_tags("x<a<b>y>z"), "x y> z");
    }

    #[test]
    fn state_transitions() {
        let mut out = String::new();
        assert_eq!(TagState::Outside.step('<', &mut out), TagState::InsideTag);
        assert_eq!(TagState::InsideTag.step('<', &mut out), TagState::InsideTag);
        assert_eq!(TagState::InsideTag.step('x', &mut out), TagState::InsideTag);
        assert!(out.is_empty());
        assert_eq!(TagState::InsideTag.step('>', &mut out), TagState::Outside);
        assert_eq!(out, " ");
    }

    #[test]
    fn tokenize_splits_on_every_separator() {
        let words: Vec<&str> =
            tokenize("a b\tc\nd,e.f:g;h\"i'j(k)l[m]n{o}p!q?r/s|t\\u-v").collect();
        assert_eq!(words.len(), 22);
        assert_eq!(words.first(), Some(&"a"));
        assert_eq!(words.last(), Some(&"v"));
    }

    #[test]
    fn tokenize_drops_empty_fragments() {
        let words: Vec<&str> = tokenize("  --hello,,  world!! ").collect();
        assert_eq!(words, vec!["hello", "world"]);
    }

    #[test]
    fn tokenize_keeps_carriage_returns_and_case() {
        let words: Vec<&str> = tokenize("Word\r\nword").collect();
        assert_eq!(words, vec!["Word\r", "word"]);
    }

    #[test]
    fn count_words_tallies() {
        let table = count_words(["a", "b", "a"]);
        assert_eq!(table["a"], 2);
        assert_eq!(table["b"], 1);
    }

    #[test]
    fn rank_orders_by_count_then_word() {
        let ranked = WordRanker::new().rank("pear apple pear zoo apple Apple kiwi");
        assert_eq!(
            ranked,
            vec![
                wc("apple", 2),
                wc("pear", 2),
                wc("Apple", 1),
                wc("kiwi", 1),
                wc("zoo", 1),
            ]
        );
    }

    #[test]
    fn rank_scenario_from_markup() {
        let ranked = WordRanker::new().rank("<b>cat</b> cat dog");
        assert_eq!(ranked, vec![wc("cat", 2), wc("dog", 1)]);
    }

    #[test]
    fn rank_empty_inputs() {
        let ranker = WordRanker::new();
        assert!(ranker.rank("").is_empty());
        assert!(ranker.rank(" ,.;-\t\n").is_empty());
        assert!(ranker.rank("<unterminated tag and words").is_empty());
    }
}
