use anyhow::*;
use itertools::Itertools;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::path::Path;

pub mod question;

pub use question::{Difficulty, DifficultyFilter, Question};

#[cfg(test)]
mod tests;

#[derive(Debug, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn open(source: &Path) -> Result<QuestionBank> {
        let file = File::open(source)
            .with_context(|| format!("could not open question file {:?}", source))?;
        let mut csv_reader = csv::Reader::from_reader(file);

        let mut questions = Vec::new();
        let mut seen_ids = HashSet::new();
        for record in csv_reader.deserialize() {
            let question: Question =
                record.with_context(|| format!("malformed question file {:?}", source))?;
            if !seen_ids.insert(question.id) {
                return Err(anyhow!(
                    "duplicate question id {} in {:?}",
                    question.id,
                    source
                ));
            }
            questions.push(question);
        }

        Ok(QuestionBank { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn count_by_difficulty(&self) -> HashMap<Difficulty, usize> {
        self.questions
            .iter()
            .map(|question| (question.difficulty, question))
            .into_group_map()
            .into_iter()
            .map(|(difficulty, questions)| (difficulty, questions.len()))
            .collect()
    }
}
