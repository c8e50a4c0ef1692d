use thiserror::Error;

use crate::bank::DifficultyFilter;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Draw { count: i64, filter: DifficultyFilter },
    Stats,
    Help,
    Quit,
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    #[error("`{0}` is not a question count")]
    CountNotNumeric(String),
    #[error("`{0}` is not a difficulty")]
    UnknownDifficulty(String),
}

pub fn parse(line: &str) -> Result<Command, ParseError> {
    let mut words = line.split_whitespace();
    let first = words.next().unwrap_or("");

    match first.to_lowercase().as_ref() {
        "stats" => Ok(Command::Stats),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ => {
            let count: i64 = first
                .parse()
                .map_err(|_| ParseError::CountNotNumeric(first.to_owned()))?;
            let filter = match words.next() {
                None => DifficultyFilter::All,
                Some(word) => word
                    .parse()
                    .map_err(|_| ParseError::UnknownDifficulty(word.to_owned()))?,
            };
            Ok(Command::Draw { count, filter })
        }
    }
}
