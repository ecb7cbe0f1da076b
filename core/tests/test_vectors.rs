//! Verify the ranker and response reader against JSON test vectors stored in
//! `test-vectors/`.

use std::io::Cursor;

use serde::Deserialize;
use urlcounter_core::http::read_response;
use urlcounter_core::ranker::strip_tags;
use urlcounter_core::{WordCount, WordRanker};

#[derive(Deserialize)]
struct Vectors<T> {
    cases: Vec<T>,
}

#[derive(Deserialize)]
struct RankCase {
    name: String,
    input: String,
    stripped: String,
    expected: Vec<WordCount>,
}

#[derive(Deserialize)]
struct ResponseCase {
    name: String,
    raw: String,
    expected_body: Option<String>,
    expected_error: Option<String>,
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

#[test]
fn rank_test_vectors() {
    let raw = include_str!("../../test-vectors/rank.json");
    let vectors: Vectors<RankCase> = serde_json::from_str(raw).unwrap();

    let ranker = WordRanker::new();
    for case in vectors.cases {
        let name = &case.name;
        assert_eq!(strip_tags(&case.input), case.stripped, "{name}: stripped");
        assert_eq!(ranker.rank(&case.input), case.expected, "{name}: ranked");
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[test]
fn response_test_vectors() {
    let raw = include_str!("../../test-vectors/responses.json");
    let vectors: Vectors<ResponseCase> = serde_json::from_str(raw).unwrap();

    for case in vectors.cases {
        let name = &case.name;
        let result = read_response(&mut Cursor::new(case.raw.into_bytes()), None);
        match (result, case.expected_body, case.expected_error) {
            (Ok(response), Some(body), None) => assert_eq!(response.body, body, "{name}: body"),
            (Err(err), None, Some(message)) => assert_eq!(err.to_string(), message, "{name}: error"),
            (Ok(response), _, expected) => {
                panic!("{name}: got body {:?}, expected error {expected:?}", response.body)
            }
            (Err(err), expected, _) => panic!("{name}: got error {err}, expected body {expected:?}"),
        }
    }
}
