use rand::seq::SliceRandom;
use thiserror::Error;

use crate::bank::{DifficultyFilter, Question};


#[derive(Debug, Eq, PartialEq)]
pub struct Draw {
    pub questions: Vec<Question>,
    pub clamped: Option<Clamped>,
}

// Set when more questions were requested than the filter could provide.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Clamped {
    pub requested: usize,
    pub actual: usize,
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum DrawError {
    #[error("asked for {0} questions, the count must be at least 1")]
    InvalidCount(i64),
    #[error("no questions available for difficulty {0}")]
    NoMatch(DifficultyFilter),
}

// Picks `count` distinct questions uniformly at random among those matching
// the filter. Output order is whatever the sampling produces.
pub fn draw(
    questions: &[Question],
    count: i64,
    filter: DifficultyFilter,
) -> Result<Draw, DrawError> {
    if count < 1 {
        return Err(DrawError::InvalidCount(count));
    }

    let candidates: Vec<&Question> = questions
        .iter()
        .filter(|question| filter.matches(question.difficulty))
        .collect();
    if candidates.is_empty() {
        return Err(DrawError::NoMatch(filter));
    }

    let requested = count as usize;
    let actual = requested.min(candidates.len());
    let clamped = if actual < requested {
        Some(Clamped { requested, actual })
    } else {
        None
    };

    let mut rng = rand::thread_rng();
    let questions = candidates
        .choose_multiple(&mut rng, actual)
        .cloned()
        .cloned()
        .collect();

    Ok(Draw { questions, clamped })
}
