// src/normalize.rs
use crate::config::consts::ANSWER_SEP;
use crate::core::entities::{decode_entities, decode_join};
use crate::question::{Question, RawQuestion};

/// Map one API record into its canonical form.
///
/// Text fields are entity-decoded; `difficulty` is copied verbatim.
/// Incorrect answers are decoded one by one, then joined with `", "`.
pub fn normalize(raw: RawQuestion) -> Question {
    Question {
        question: decode_entities(&raw.question).into_owned(),
        category: decode_entities(&raw.category).into_owned(),
        difficulty: raw.difficulty,
        correct_answer: decode_entities(&raw.correct_answer).into_owned(),
        incorrect_answers: decode_join(&raw.incorrect_answers, ANSWER_SEP),
    }
}

pub fn normalize_all(raws: Vec<RawQuestion>) -> Vec<Question> {
    raws.into_iter().map(normalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(q: &str, d: &str, wrong: &[&str]) -> RawQuestion {
        RawQuestion {
            question: s!(q),
            category: s!("General Knowledge"),
            difficulty: s!(d),
            correct_answer: s!("4"),
            incorrect_answers: wrong.iter().map(|w| s!(*w)).collect(),
            kind: None,
        }
    }

    #[test]
    fn difficulty_is_not_decoded() {
        let q = normalize(raw("Q", "&amp;hard", &[]));
        assert_eq!(q.difficulty, "&amp;hard");
    }

    #[test]
    fn decodes_each_answer_before_joining() {
        let q = normalize(raw("Q", "easy", &["A, B", "&quot;C&quot;"]));
        assert_eq!(q.incorrect_answers, "A, B, \"C\"");
    }
}
