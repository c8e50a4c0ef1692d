use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

use crate::bank::{Difficulty, Question};
use crate::output::{CardOutput, Message};


lazy_static! {
    static ref MARKUP_TAG_REGEX: Regex = Regex::new("<[^>]+>").unwrap();
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

const CARD_RULE: &'static str =
    "──────────────────────────────────────────────────────────────";

const DIFFICULTY_ORDER: &'static [Difficulty] =
    &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

// Descriptions are stored as-is and may carry HTML-ish markup.
fn strip_markup(description: &str) -> String {
    let text = MARKUP_TAG_REGEX.replace_all(description, "");
    WHITESPACE_REGEX.replace_all(&text, " ").trim().to_owned()
}

fn difficulty_badge(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "● EASY",
        Difficulty::Medium => "● MEDIUM",
        Difficulty::Hard => "● HARD",
    }
}

fn render_card(number: usize, question: &Question) -> String {
    format!(
        "{}\nQUESTION {} · Problem #{} · {}\n{}\n\n{}",
        CARD_RULE,
        number,
        question.id,
        difficulty_badge(question.difficulty),
        question.title,
        strip_markup(&question.description),
    )
}

pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        TerminalOutput
    }

    fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        match message {
            Welcome => "🎯 Coding interview practice\nDraw random questions from the loaded set and grind away.\nType a question count and an optional difficulty, e.g. `3 easy`. Type `help` for all commands.".into(),
            DatasetSummary { total, counts } => {
                let breakdown = DIFFICULTY_ORDER
                    .iter()
                    .map(|difficulty| {
                        format!("{}: {}", difficulty, counts.get(difficulty).unwrap_or(&0))
                    })
                    .join(", ");
                format!("📈 {} questions available ({})", total, breakdown)
            }
            LoadFailed(reason) => format!(
                "❌ Could not load the question file: {}\nDraws will report missing data until the file is fixed.",
                reason
            ),
            Cards { filter, questions } => {
                let mut message = format!(
                    "🎯 Drew {} random question{} (difficulty: {})",
                    questions.len(),
                    if questions.len() == 1 { "" } else { "s" },
                    filter
                );
                for (index, question) in questions.iter().enumerate() {
                    message += &format!("\n\n{}", render_card(index + 1, question));
                }
                message += "\n\n🎉 Good luck with your practice! Draw again for different questions.";
                message
            }
            Clamped { requested, actual } => format!(
                "ℹ️ Only {} questions available, drawing {} instead of {}.",
                actual, actual, requested
            ),
            NoMatch(filter) => format!("⚠️ No questions found for the {} difficulty.", filter),
            NoData => "❌ No questions are loaded. Point the app at a valid question file and restart.".into(),
            InvalidCount(raw) => format!(
                "❌ `{}` is not a valid question count. Enter a number of at least 1.",
                raw
            ),
            UnknownDifficulty(raw) => format!(
                "❌ `{}` is not a difficulty. Use `easy`, `medium`, `hard` or `all`.",
                raw
            ),
            Help => "📋 Commands\n`<count>` draws that many questions from all difficulties, e.g. `2`\n`<count> <difficulty>` restricts the draw to `easy`, `medium` or `hard`, e.g. `3 hard`\n`stats` shows how many questions are loaded per difficulty\n`quit` leaves".into(),
            Goodbye => "👋 Good luck with the interviews!".into(),
        }
    }
}

impl CardOutput for TerminalOutput {
    fn say(&mut self, message: &Message) {
        println!("{}", self.interpret_message(message));
    }
}
