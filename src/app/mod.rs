use log::{error, info, warn};
use std::path::Path;

use crate::bank::{DifficultyFilter, QuestionBank};
use crate::draw::{self, DrawError};
use crate::output::{CardOutput, Message};

pub mod command;


use command::{Command, ParseError};

pub struct App<O: CardOutput> {
    bank: QuestionBank,
    output: O,
}

impl<O: CardOutput> App<O> {
    pub fn new(output: O) -> Self {
        App {
            bank: QuestionBank::default(),
            output,
        }
    }

    // A failed load leaves the bank empty; drawing then reports missing data
    // instead of crashing.
    pub fn load(&mut self, source: &Path) {
        self.output.say(&Message::Welcome);
        match QuestionBank::open(source) {
            Ok(bank) => {
                info!("loaded {} questions from {:?}", bank.len(), source);
                self.bank = bank;
                self.say_summary();
            }
            Err(e) => {
                error!("could not load questions from {:?}: {:#}", source, e);
                self.output.say(&Message::LoadFailed(format!("{:#}", e)));
            }
        }
    }

    // Returns false once the user asked to leave.
    pub fn handle_line(&mut self, line: &str) -> bool {
        let command = match command::parse(line) {
            Ok(command) => command,
            Err(e) => {
                info!("rejected input: {}", e);
                match e {
                    ParseError::CountNotNumeric(raw) => {
                        self.output.say(&Message::InvalidCount(raw))
                    }
                    ParseError::UnknownDifficulty(raw) => {
                        self.output.say(&Message::UnknownDifficulty(raw))
                    }
                }
                return true;
            }
        };
        match command {
            Command::Draw { count, filter } => self.draw_cards(count, filter),
            Command::Stats => self.say_summary(),
            Command::Help => self.output.say(&Message::Help),
            Command::Quit => {
                self.output.say(&Message::Goodbye);
                return false;
            }
        }
        true
    }

    fn draw_cards(&mut self, count: i64, filter: DifficultyFilter) {
        if self.bank.is_empty() {
            self.output.say(&Message::NoData);
            return;
        }
        match draw::draw(self.bank.questions(), count, filter) {
            Ok(outcome) => {
                if let Some(clamped) = outcome.clamped {
                    warn!(
                        "requested {} questions, only {} available",
                        clamped.requested, clamped.actual
                    );
                    self.output.say(&Message::Clamped {
                        requested: clamped.requested,
                        actual: clamped.actual,
                    });
                }
                info!(
                    "drew {} questions (difficulty: {})",
                    outcome.questions.len(),
                    filter
                );
                self.output.say(&Message::Cards {
                    filter,
                    questions: outcome.questions,
                });
            }
            Err(e) => {
                info!("draw rejected: {}", e);
                match e {
                    DrawError::InvalidCount(count) => {
                        self.output.say(&Message::InvalidCount(count.to_string()))
                    }
                    DrawError::NoMatch(filter) => self.output.say(&Message::NoMatch(filter)),
                }
            }
        }
    }

    fn say_summary(&mut self) {
        self.output.say(&Message::DatasetSummary {
            total: self.bank.len(),
            counts: self.bank.count_by_difficulty(),
        });
    }
}
