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

//! flipdeck-core: the toolkit-independent half of flipdeck.
//!
//! This library provides:
//! - Flashcards with a learned-status flag
//! - The deck session state machine (cursor, face, quiz mode)
//! - Loading decks from JSON

pub mod error;
pub mod loader;
pub mod rng;
pub mod session;
pub mod types;

// Re-exports for convenience
pub use error::{ErrorReport, Fallible, fail};
pub use loader::{load_deck, parse_deck};
pub use session::{CardView, DeckSession, Face, Tally, Verdict};
pub use types::flashcard::{Flashcard, Status};
