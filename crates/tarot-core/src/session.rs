//! Cross-screen session state and its transition rules.
//!
//! The machine is strictly linear: landing -> selection -> reading ->
//! (restart) landing. Transitions are pure reducer-style updates so the
//! contract stays testable without any UI attached.

use crate::cards::TarotCard;
use crate::spread::SPREAD_SIZE;

/// Current screen tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Selection,
    Reading,
}

/// State shared across screens, reset on restart.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub page: Page,
    /// The question as typed, set on leaving the landing screen.
    pub question: String,
    /// The three drawn cards in flip order, set on leaving the selection
    /// screen.
    pub drawn: Vec<TarotCard>,
}

/// One transition request.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    SubmitQuestion(String),
    RevealSpread(Vec<TarotCard>),
    Restart,
}

impl Session {
    pub fn new() -> Self {
        Self {
            page: Page::Landing,
            question: String::new(),
            drawn: Vec::new(),
        }
    }

    /// Apply one transition, returning the next state.
    ///
    /// Invalid pairings (wrong page, blank question, wrong card count) leave
    /// the state untouched; the screens only ever offer actions valid for
    /// the page they run on, so a rejected action is a no-op rather than an
    /// error.
    pub fn apply(&self, action: SessionAction) -> Session {
        match (self.page, action) {
            (Page::Landing, SessionAction::SubmitQuestion(question))
                if !question.trim().is_empty() =>
            {
                Session {
                    page: Page::Selection,
                    question,
                    drawn: Vec::new(),
                }
            }
            (Page::Selection, SessionAction::RevealSpread(cards))
                if cards.len() == SPREAD_SIZE =>
            {
                Session {
                    page: Page::Reading,
                    question: self.question.clone(),
                    drawn: cards,
                }
            }
            (Page::Reading, SessionAction::Restart) => Session::new(),
            _ => self.clone(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
