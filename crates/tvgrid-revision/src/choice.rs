//! # Choice Sources
//!
//! Merges pick the sponsor list and the title by coin flip. The flip is
//! injected so that production code can use a seeded RNG and tests can force
//! either branch.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::Rng;

/// A source of binary choices.
pub trait ChoiceSource {
    /// `true` selects the first of two options.
    fn choose_first(&mut self) -> bool;
}

impl ChoiceSource for StdRng {
    fn choose_first(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}

/// Always answers the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedChoice(pub bool);

impl ChoiceSource for FixedChoice {
    fn choose_first(&mut self) -> bool {
        self.0
    }
}

/// Replays a fixed sequence of answers, then falls back to `true`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChoice {
    answers: VecDeque<bool>,
}

impl ScriptedChoice {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl ChoiceSource for ScriptedChoice {
    fn choose_first(&mut self) -> bool {
        self.answers.pop_front().unwrap_or(true)
    }
}
