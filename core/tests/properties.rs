//! Property tests for tag stripping, tokenization and ranking.

use proptest::prelude::*;
use urlcounter_core::ranker::{count_words, strip_tags, tokenize, SEPARATORS};
use urlcounter_core::WordRanker;

/// Text mixing letters, separators and tag delimiters.
fn page_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            4 => "[a-zA-Z]{1,6}",
            2 => proptest::sample::select(SEPARATORS).prop_map(String::from),
            1 => Just("<".to_string()),
            1 => Just(">".to_string()),
            1 => "<[a-z ]{0,5}>",
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

fn tag_free_text() -> impl Strategy<Value = String> {
    "[^<>]{0,80}"
}

proptest! {
    #[test]
    fn stripping_tag_free_text_is_identity(text in tag_free_text()) {
        prop_assert_eq!(strip_tags(&text), text.clone());
        prop_assert_eq!(strip_tags(&strip_tags(&text)), text);
    }

    #[test]
    fn each_tag_becomes_one_space(words in proptest::collection::vec("[a-z]{1,5}", 1..10), tag in "<[a-z/ ]{0,6}>") {
        let html = words.join(tag.as_str());
        let expected = words.join(" ");
        prop_assert_eq!(strip_tags(&html), expected);
    }

    #[test]
    fn total_count_matches_token_count(text in page_text()) {
        let stripped = strip_tags(&text);
        let tokens = tokenize(&stripped).count();
        let table = count_words(tokenize(&stripped));
        prop_assert_eq!(table.values().sum::<usize>(), tokens);
    }

    #[test]
    fn ranking_is_a_strict_total_order(text in page_text()) {
        let ranked = WordRanker::new().rank(&text);
        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.count > b.count || (a.count == b.count && a.word < b.word));
        }
    }

    #[test]
    fn ranking_is_deterministic(text in page_text()) {
        let ranker = WordRanker::new();
        prop_assert_eq!(ranker.rank(&text), ranker.rank(&text));
    }

    #[test]
    fn separators_only_rank_empty(seps in proptest::collection::vec(proptest::sample::select(SEPARATORS), 0..30)) {
        let text: String = seps.into_iter().collect();
        prop_assert!(WordRanker::new().rank(&text).is_empty());
    }

    #[test]
    fn unterminated_tag_hides_the_rest(prefix in tag_free_text(), rest in "[^>]{0,40}") {
        let text = format!("{prefix}<{rest}");
        prop_assert_eq!(strip_tags(&text), prefix);
    }
}
