use std::collections::HashMap;

use crate::bank::{Difficulty, DifficultyFilter, Question};

pub mod terminal;

#[cfg(test)]
pub mod mock;

// Everything the application can tell the user. Backends decide how each
// message looks.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    Welcome,
    DatasetSummary {
        total: usize,
        counts: HashMap<Difficulty, usize>,
    },
    LoadFailed(String),
    Cards {
        filter: DifficultyFilter,
        questions: Vec<Question>,
    },
    Clamped {
        requested: usize,
        actual: usize,
    },
    NoMatch(DifficultyFilter),
    NoData,
    InvalidCount(String),
    UnknownDifficulty(String),
    Help,
    Goodbye,
}

pub trait CardOutput {
    fn say(&mut self, message: &Message);
}
