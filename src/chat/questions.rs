// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Suggested-question parsing
//!
//! The model is asked for a JSON list of strings but often wraps it in a
//! markdown fence. Anything that does not parse as a list yields no
//! suggestions; that outcome is never an error.

use serde_json::Value;

/// Parse the model's raw reply into suggested questions.
pub fn parse_example_questions(raw: &str) -> Vec<String> {
    let cleaned = raw.trim().replace("```json", "").replace("```", "");

    match serde_json::from_str::<Value>(cleaned.trim()) {
        Ok(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        Ok(_) => {
            tracing::debug!(target: "mesh.chat.controller", "question reply was not a list");
            Vec::new()
        }
        Err(e) => {
            tracing::debug!(target: "mesh.chat.controller", error = %e, "question reply was not JSON");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fenced_json() {
        let raw = "```json\n[\"Q1?\",\"Q2?\",\"Q3?\"]\n```";
        assert_eq!(parse_example_questions(raw), vec!["Q1?", "Q2?", "Q3?"]);
    }

    #[test]
    fn test_bare_fence() {
        let raw = "```\n[\"A?\"]\n```";
        assert_eq!(parse_example_questions(raw), vec!["A?"]);
    }

    #[test]
    fn test_plain_json_with_whitespace() {
        assert_eq!(parse_example_questions("  [\"x\", \"y\"]  \n"), vec!["x", "y"]);
    }

    #[test]
    fn test_not_json() {
        assert!(parse_example_questions("not json").is_empty());
    }

    #[test]
    fn test_object_is_rejected() {
        assert!(parse_example_questions(r#"{"questions": ["a"]}"#).is_empty());
    }

    #[test]
    fn test_non_string_elements_dropped() {
        assert_eq!(parse_example_questions(r#"["a", 1, null, "b"]"#), vec!["a", "b"]);
    }

    #[test]
    fn test_more_than_three_kept() {
        let parsed = parse_example_questions(r#"["1","2","3","4"]"#);
        assert_eq!(parsed.len(), 4);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_example_questions("").is_empty());
    }

    proptest! {
        #[test]
        fn prop_never_panics(raw in ".*") {
            let _ = parse_example_questions(&raw);
        }

        #[test]
        fn prop_fenced_string_lists_round_trip(items in proptest::collection::vec("[a-zA-Z ?]{0,20}", 0..5)) {
            let json = serde_json::to_string(&items).unwrap();
            let raw = format!("```json\n{}\n```", json);
            prop_assert_eq!(parse_example_questions(&raw), items);
        }
    }
}
