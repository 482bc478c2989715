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

use std::fs::read_to_string;
use std::path::Path;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::flashcard::Flashcard;

/// Parse a deck from JSON text: an array of `{"question": ..., "answer": ...}`
/// records. Fails on the first malformed record.
pub fn parse_deck(text: &str) -> Fallible<Vec<Flashcard>> {
    let cards: Vec<Flashcard> = serde_json::from_str(text)?;
    for (idx, card) in cards.iter().enumerate() {
        let n = idx + 1;
        if card.question().trim().is_empty() {
            return fail(format!("card {n} has an empty question."));
        }
        if card.answer().trim().is_empty() {
            return fail(format!("card {n} has an empty answer."));
        }
    }
    if cards.is_empty() {
        return fail("deck has no cards.");
    }
    Ok(cards)
}

/// Read and parse a deck file.
pub fn load_deck(path: &Path) -> Fallible<Vec<Flashcard>> {
    if !path.exists() {
        return fail("deck file does not exist.");
    }
    let text = read_to_string(path)?;
    parse_deck(&text)
}
