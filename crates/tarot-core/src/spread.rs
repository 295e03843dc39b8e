//! Three-card spread bookkeeping.
//!
//! Tracks which face-down positions the seeker has flipped, in flip order.
//! Rank in the pick list decides the position label, so removing an earlier
//! pick shifts every later pick one step toward 过去.

/// Cards in a finished spread.
pub const SPREAD_SIZE: usize = 3;

/// Position labels, indexed by pick rank.
pub const POSITIONS: [&str; SPREAD_SIZE] = ["过去", "现在", "未来"];

/// Label for a pick rank. Out-of-range ranks return the empty string.
pub fn position_label(rank: usize) -> &'static str {
    POSITIONS.get(rank).copied().unwrap_or("")
}

/// Ordered picks into a fixed shuffled deck.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpreadPicks {
    picked: Vec<usize>,
}

impl SpreadPicks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip or unflip the card at `index`.
    ///
    /// An unflip removes the pick by value, so later picks keep their
    /// relative order and compress down one rank. A fourth flip is refused.
    /// Returns whether the click changed anything.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.contains(index) {
            self.picked.retain(|&i| i != index);
            true
        } else if self.picked.len() < SPREAD_SIZE {
            self.picked.push(index);
            true
        } else {
            false
        }
    }

    /// Rank of a picked index in flip order, if it is face-up.
    pub fn rank_of(&self, index: usize) -> Option<usize> {
        self.picked.iter().position(|&i| i == index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.rank_of(index).is_some()
    }

    pub fn len(&self) -> usize {
        self.picked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picked.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.picked.len() == SPREAD_SIZE
    }

    /// Picked indices in flip order.
    pub fn as_slice(&self) -> &[usize] {
        &self.picked
    }
}
