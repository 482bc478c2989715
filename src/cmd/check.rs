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

use std::path::Path;

use flipdeck_core::loader::load_deck;

use crate::error::Fallible;
use crate::utils::deck_path;

pub fn check_deck(deck: Option<String>) -> Fallible<()> {
    let path = deck_path(deck);
    let count = validate_deck(&path)?;
    println!("Deck OK: {count} cards.");
    Ok(())
}

/// Load the deck and return the number of cards in it.
fn validate_deck(path: &Path) -> Fallible<usize> {
    let cards = load_deck(path)?;
    log::debug!("Loaded {} cards from {}", cards.len(), path.display());
    Ok(cards.len())
}
