//! Stack of scale words currently in force.
//!
//! Reading a numeral backward, each scale word either nests under the ones
//! already seen (`十萬`: ten of ten-thousands) or absorbs them (`萬…億`: the
//! larger unit replaces the smaller ones read so far). The stack keeps the
//! active exponents and their running sum, which is the place value the
//! next digit lands on.
//!
//! Reaching the left edge of the numeral marks the stack terminal. The
//! terminal marker contributes nothing to the sum.

use smallvec::SmallVec;

/// Coarse shape of the stack, decided by its bottom entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ScaleState {
    /// Nothing pushed yet.
    Empty,
    /// Bottom entry is a fractional scale or the decimal point below zero.
    Fractional,
    /// Bottom entry is an integer scale (or the decimal point's zero).
    Integer,
    /// Left boundary reached.
    Done,
}

/// Active scale exponents and their sum.
///
/// Invariant: `total` equals the sum of `exps`.
#[derive(Clone, Debug, Default)]
pub(crate) struct ScaleStack {
    exps: SmallVec<[i32; 8]>,
    total: i32,
    done: bool,
}

impl ScaleStack {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, exp: i32) {
        self.exps.push(exp);
        self.total = self.total.saturating_add(exp);
    }

    fn pop(&mut self) {
        if let Some(exp) = self.exps.pop() {
            self.total = self.total.saturating_sub(exp);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.exps.clear();
        self.total = 0;
    }

    /// Pop every entry below `exp`, fractional ones included.
    pub(crate) fn pop_below(&mut self, exp: i32) {
        while self.top().is_some_and(|top| top < exp) {
            self.pop();
        }
    }

    /// Pop integer entries below `exp`, stopping at a fractional entry.
    pub(crate) fn pop_integers_below(&mut self, exp: i32) {
        while self.top().is_some_and(|top| (0..exp).contains(&top)) {
            self.pop();
        }
    }

    /// Mark the left boundary: clear and enter the terminal state.
    pub(crate) fn mark_done(&mut self) {
        self.clear();
        self.done = true;
    }

    /// Sum of the active exponents.
    pub(crate) fn total(&self) -> i32 {
        self.total
    }

    /// Topmost active exponent, `None` when empty or terminal.
    pub(crate) fn top(&self) -> Option<i32> {
        self.exps.last().copied()
    }

    pub(crate) fn state(&self) -> ScaleState {
        if self.done {
            return ScaleState::Done;
        }
        match self.exps.first() {
            None => ScaleState::Empty,
            Some(&exp) if exp < 0 => ScaleState::Fractional,
            Some(_) => ScaleState::Integer,
        }
    }
}
