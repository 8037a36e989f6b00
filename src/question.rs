// src/question.rs
//
// Wire and canonical shapes for a trivia question.
//
// - RawQuestion: one record of the API's `results` array, text still
//                HTML-entity encoded.
// - Question:    decoded, flattened record handed to exporters and the table
//                view. Field order here is the JSON key order on export.

use serde::{Deserialize, Serialize};

/// API envelope: `{ "response_code": 0, "results": [...] }`.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub response_code: i64,
    /// `None` when the key is missing entirely.
    #[serde(default)]
    pub results: Option<Vec<RawQuestion>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuestion {
    pub question: String,
    pub category: String,
    pub difficulty: String,
    pub correct_answer: String,
    #[serde(default)]
    pub incorrect_answers: Vec<String>,
    /// "multiple" or "boolean"; carried but unused.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub category: String,
    pub difficulty: String,
    pub correct_answer: String,
    /// Decoded answers joined with ", ".
    pub incorrect_answers: String,
}

impl Question {
    pub const FIELD_COUNT: usize = 5;

    /// Cells in export column order.
    pub fn cells(&self) -> [&str; Self::FIELD_COUNT] {
        [
            &self.question,
            &self.category,
            &self.difficulty,
            &self.correct_answer,
            &self.incorrect_answers,
        ]
    }
}
