// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::Deserialize;

/// Whether the user has marked a card as learned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    /// The card has not been marked yet.
    #[default]
    Unseen,
    Known,
    Unknown,
}

/// A question/answer pair. The text is fixed at construction; only the
/// status changes during a session.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Flashcard {
    question: String,
    answer: String,
    #[serde(skip)]
    status: Status,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            status: Status::Unseen,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn mark_known(&mut self) {
        self.status = Status::Known;
    }

    pub fn mark_unknown(&mut self) {
        self.status = Status::Unknown;
    }

    /// Compare a typed answer against the stored one, ignoring case and
    /// surrounding whitespace. Nothing else is normalized.
    pub fn matches(&self, user_text: &str) -> bool {
        normalize(user_text) == normalize(&self.answer)
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_is_unseen() {
        let card = Flashcard::new("France capital?", "Paris");
        assert_eq!(card.question(), "France capital?");
        assert_eq!(card.answer(), "Paris");
        assert_eq!(card.status(), Status::Unseen);
    }

    #[test]
    fn test_marks_are_idempotent() {
        let mut card = Flashcard::new("Q", "A");
        card.mark_known();
        card.mark_known();
        assert_eq!(card.status(), Status::Known);
        card.mark_unknown();
        card.mark_unknown();
        assert_eq!(card.status(), Status::Unknown);
    }

    #[test]
    fn test_matches_ignores_case_and_surrounding_whitespace() {
        let card = Flashcard::new("France capital?", "Paris");
        assert!(card.matches("paris"));
        assert!(card.matches(" PARIS "));
        assert!(card.matches("Paris"));
        assert!(card.matches("\tparis\n"));
    }

    #[test]
    fn test_matches_is_otherwise_exact() {
        let card = Flashcard::new("France capital?", "Paris");
        assert!(!card.matches("paris."));
        assert!(!card.matches("pa ris"));
        assert!(!card.matches(""));
    }

    #[test]
    fn test_stored_answer_is_normalized_too() {
        let card = Flashcard::new("2+2?", "  Four ");
        assert!(card.matches("four"));
    }
}
