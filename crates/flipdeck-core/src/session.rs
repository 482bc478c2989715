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

use crate::error::Fallible;
use crate::error::fail;
use crate::rng::TinyRng;
use crate::rng::shuffle;
use crate::types::flashcard::Flashcard;
use crate::types::flashcard::Status;

/// Which side of the current card is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Question,
    Answer,
}

impl Face {
    fn flipped(self) -> Self {
        match self {
            Face::Question => Face::Answer,
            Face::Answer => Face::Question,
        }
    }
}

/// Outcome of the last answer check on the current card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// Counts of cards by status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub known: usize,
    pub unknown: usize,
    pub unseen: usize,
}

/// Everything a front end needs to draw the session.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    /// 1-based position of the current card.
    pub position: usize,
    pub total: usize,
    pub question: String,
    pub answer: String,
    pub face: Face,
    pub quiz_mode: bool,
    pub verdict: Option<Verdict>,
    pub tally: Tally,
}

impl CardView {
    /// The text on the face that is currently showing.
    pub fn visible_text(&self) -> &str {
        match self.face {
            Face::Question => &self.question,
            Face::Answer => &self.answer,
        }
    }
}

/// A drill over one deck: the cards, a cursor into them, and the display
/// state of the current card.
///
/// The deck is never empty, so the cursor always points at a card and every
/// operation after construction is total.
pub struct DeckSession {
    cards: Vec<Flashcard>,
    cursor: usize,
    face: Face,
    quiz_mode: bool,
    verdict: Option<Verdict>,
    rng: TinyRng,
}

impl DeckSession {
    /// Start a session on the first card. `seed` drives [`DeckSession::shuffle`].
    pub fn new(cards: Vec<Flashcard>, seed: u64) -> Fallible<Self> {
        if cards.is_empty() {
            return fail("deck has no cards.");
        }
        Ok(Self {
            cards,
            cursor: 0,
            face: Face::Question,
            quiz_mode: false,
            verdict: None,
            rng: TinyRng::from_seed(seed),
        })
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn quiz_mode(&self) -> bool {
        self.quiz_mode
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    pub fn current(&self) -> &Flashcard {
        &self.cards[self.cursor]
    }

    /// Turn the current card question side up and return its text.
    pub fn show_current(&mut self) -> (&str, &str) {
        self.face = Face::Question;
        self.verdict = None;
        let card = &self.cards[self.cursor];
        (card.question(), card.answer())
    }

    pub fn flip(&mut self) {
        self.face = self.face.flipped();
        self.verdict = None;
    }

    pub fn check_answer(&mut self, user_text: &str) -> bool {
        let correct = self.current().matches(user_text);
        self.verdict = Some(if correct {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        });
        correct
    }

    pub fn next(&mut self) {
        if self.cursor < self.cards.len() - 1 {
            self.cursor += 1;
        } else {
            self.cursor = 0;
        }
        self.show_current();
    }

    pub fn previous(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        } else {
            self.cursor = self.cards.len() - 1;
        }
        self.show_current();
    }

    pub fn shuffle(&mut self) {
        shuffle(&mut self.cards, &mut self.rng);
        self.cursor = 0;
        self.show_current();
    }

    pub fn mark_known(&mut self) {
        self.cards[self.cursor].mark_known();
        self.next();
    }

    pub fn mark_unknown(&mut self) {
        self.cards[self.cursor].mark_unknown();
        self.next();
    }

    pub fn toggle_quiz_mode(&mut self) {
        self.quiz_mode = !self.quiz_mode;
    }

    pub fn tally(&self) -> Tally {
        let mut tally = Tally::default();
        for card in &self.cards {
            match card.status() {
                Status::Known => tally.known += 1,
                Status::Unknown => tally.unknown += 1,
                Status::Unseen => tally.unseen += 1,
            }
        }
        tally
    }

    pub fn view(&self) -> CardView {
        let card = self.current();
        CardView {
            position: self.cursor + 1,
            total: self.cards.len(),
            question: card.question().to_string(),
            answer: card.answer().to_string(),
            face: self.face,
            quiz_mode: self.quiz_mode,
            verdict: self.verdict,
            tally: self.tally(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_deck(n: usize) -> Vec<Flashcard> {
        (0..n)
            .map(|i| Flashcard::new(format!("Q{i}"), format!("A{i}")))
            .collect()
    }

    fn make_session(n: usize) -> DeckSession {
        DeckSession::new(make_deck(n), 1234).unwrap()
    }

    fn sorted_pairs(session: &DeckSession) -> Vec<(String, String, Status)> {
        let mut pairs: Vec<_> = session
            .cards()
            .iter()
            .map(|c| (c.question().to_string(), c.answer().to_string(), c.status()))
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        pairs
    }

    #[test]
    fn test_empty_deck_is_rejected() {
        let result = DeckSession::new(Vec::new(), 0);
        assert_eq!(
            result.err().unwrap().to_string(),
            "error: deck has no cards."
        );
    }

    #[test]
    fn test_initial_state() {
        let session = make_session(3);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.face(), Face::Question);
        assert!(!session.quiz_mode());
        assert_eq!(session.verdict(), None);
        assert_eq!(session.cards().len(), 3);
    }

    #[test]
    fn test_show_current_resets_face() {
        let mut session = make_session(2);
        session.flip();
        let (q, a) = session.show_current();
        assert_eq!((q, a), ("Q0", "A0"));
        assert_eq!(session.face(), Face::Question);
    }

    #[test]
    fn test_flip_is_an_involution() {
        let mut session = make_session(2);
        session.flip();
        assert_eq!(session.face(), Face::Answer);
        assert_eq!(session.cursor(), 0);
        session.flip();
        assert_eq!(session.face(), Face::Question);
        assert_eq!(session.current().status(), Status::Unseen);
    }

    #[test]
    fn test_next_wraps() {
        let mut session = make_session(3);
        session.next();
        session.next();
        assert_eq!(session.cursor(), 2);
        session.next();
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn test_previous_wraps() {
        let mut session = make_session(3);
        session.previous();
        assert_eq!(session.cursor(), 2);
        session.previous();
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn test_navigation_resets_face() {
        let mut session = make_session(3);
        session.flip();
        session.next();
        assert_eq!(session.face(), Face::Question);
        session.flip();
        session.previous();
        assert_eq!(session.face(), Face::Question);
    }

    #[test]
    fn test_next_previous_symmetry() {
        for n in 1..5 {
            let mut session = make_session(n);
            for start in 0..n {
                while session.cursor() != start {
                    session.next();
                }
                session.next();
                session.previous();
                assert_eq!(session.cursor(), start);
                session.previous();
                session.next();
                assert_eq!(session.cursor(), start);
            }
        }
    }

    #[test]
    fn test_single_card_deck() {
        let mut session = make_session(1);
        session.next();
        assert_eq!(session.cursor(), 0);
        session.previous();
        assert_eq!(session.cursor(), 0);
        session.mark_known();
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.current().status(), Status::Known);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut session = make_session(4);
        let mut rng = TinyRng::from_seed(5);
        for _ in 0..500 {
            match rng.generate(3) {
                0 => session.next(),
                1 => session.previous(),
                _ => session.shuffle(),
            }
            assert!(session.cursor() < session.cards().len());
        }
    }

    #[test]
    fn test_check_answer() {
        let mut session =
            DeckSession::new(vec![Flashcard::new("France capital?", "Paris")], 0).unwrap();
        assert!(session.check_answer("paris"));
        assert!(session.check_answer(" PARIS "));
        assert!(session.check_answer("Paris"));
        assert_eq!(session.verdict(), Some(Verdict::Correct));
        assert!(!session.check_answer("paris."));
        assert_eq!(session.verdict(), Some(Verdict::Incorrect));
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.face(), Face::Question);
    }

    #[test]
    fn test_verdict_is_cleared() {
        let mut session = make_session(2);
        session.check_answer("A0");
        session.flip();
        assert_eq!(session.verdict(), None);
        session.check_answer("A0");
        session.next();
        assert_eq!(session.verdict(), None);
    }

    #[test]
    fn test_shuffle_preserves_cards() {
        let mut session = make_session(10);
        session.next();
        session.mark_known();
        session.mark_unknown();
        let before = sorted_pairs(&session);
        session.flip();
        session.shuffle();
        assert_eq!(sorted_pairs(&session), before);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.face(), Face::Question);
    }

    #[test]
    fn test_mark_known_advances() {
        let mut session = make_session(3);
        session.mark_known();
        assert_eq!(session.cards()[0].status(), Status::Known);
        assert_eq!(session.cursor(), 1);
        session.next();
        session.mark_known();
        assert_eq!(session.cards()[2].status(), Status::Known);
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn test_mark_unknown_advances() {
        let mut session = make_session(2);
        session.mark_unknown();
        assert_eq!(session.cards()[0].status(), Status::Unknown);
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn test_toggle_quiz_mode() {
        let mut session = make_session(2);
        session.next();
        session.flip();
        session.toggle_quiz_mode();
        assert!(session.quiz_mode());
        assert_eq!(session.cursor(), 1);
        assert_eq!(session.face(), Face::Answer);
        session.toggle_quiz_mode();
        assert!(!session.quiz_mode());
    }

    #[test]
    fn test_tally_and_view() {
        let mut session = make_session(3);
        session.mark_known();
        session.mark_unknown();
        let view = session.view();
        assert_eq!(view.position, 3);
        assert_eq!(view.total, 3);
        assert_eq!(
            view.tally,
            Tally {
                known: 1,
                unknown: 1,
                unseen: 1
            }
        );
        assert_eq!(view.visible_text(), "Q2");
        session.flip();
        assert_eq!(session.view().visible_text(), "A2");
    }

    #[test]
    fn test_walkthrough() {
        let mut session = DeckSession::new(
            vec![
                Flashcard::new("France capital?", "Paris"),
                Flashcard::new("2+2?", "4"),
            ],
            0,
        )
        .unwrap();
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.face(), Face::Question);
        assert!(session.check_answer("PARIS"));
        session.next();
        assert_eq!(session.cursor(), 1);
        assert!(session.check_answer("4"));
        session.next();
        assert_eq!(session.cursor(), 0);
        session.mark_unknown();
        assert_eq!(session.cards()[0].status(), Status::Unknown);
        assert_eq!(session.cursor(), 1);
    }
}
