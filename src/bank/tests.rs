use super::*;

use std::io::Write;
use tempfile::NamedTempFile;

const WELL_FORMED: &str = "\
Id,Title,Difficulty,Description
1,Two Sum,Easy,<p>Given an array of integers and a target.</p>
2,Add Two Numbers,Medium,You are given two non-empty linked lists.
3,Median of Two Sorted Arrays,Hard,Find the median of the two arrays.
4,Valid Parentheses,Easy,Determine if the input string is valid.
";

fn write_question_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("could not create temporary file");
    write!(file, "{}", contents).expect("could not write temporary file");
    file
}

#[test]
fn loads_every_row() {
    let file = write_question_file(WELL_FORMED);
    let bank = QuestionBank::open(file.path()).unwrap();
    assert_eq!(bank.len(), 4);
    assert_eq!(bank.questions()[0].id, 1);
    assert_eq!(bank.questions()[0].title, "Two Sum");
    assert_eq!(bank.questions()[2].difficulty, Difficulty::Hard);
}

#[test]
fn difficulty_is_read_case_insensitively() {
    let file = write_question_file("Id,Title,Difficulty,Description\n1,Two Sum,easy,text\n");
    let bank = QuestionBank::open(file.path()).unwrap();
    assert_eq!(bank.questions()[0].difficulty, Difficulty::Easy);
}

#[test]
fn counts_by_difficulty_sum_to_total() {
    let file = write_question_file(WELL_FORMED);
    let bank = QuestionBank::open(file.path()).unwrap();
    let counts = bank.count_by_difficulty();
    assert_eq!(counts.get(&Difficulty::Easy), Some(&2));
    assert_eq!(counts.get(&Difficulty::Medium), Some(&1));
    assert_eq!(counts.get(&Difficulty::Hard), Some(&1));
    assert_eq!(counts.values().sum::<usize>(), bank.len());
}

#[test]
fn missing_file_is_an_error() {
    assert!(QuestionBank::open(Path::new("no-such-questions.csv")).is_err());
}

#[test]
fn unknown_difficulty_is_an_error() {
    let file = write_question_file("Id,Title,Difficulty,Description\n1,Two Sum,Impossible,text\n");
    assert!(QuestionBank::open(file.path()).is_err());
}

#[test]
fn non_numeric_id_is_an_error() {
    let file = write_question_file("Id,Title,Difficulty,Description\nfirst,Two Sum,Easy,text\n");
    assert!(QuestionBank::open(file.path()).is_err());
}

#[test]
fn duplicate_id_is_an_error() {
    let file = write_question_file(
        "Id,Title,Difficulty,Description\n1,Two Sum,Easy,text\n1,Add Two Numbers,Hard,text\n",
    );
    assert!(QuestionBank::open(file.path()).is_err());
}

#[test]
fn empty_bank_reports_no_questions() {
    let file = write_question_file("Id,Title,Difficulty,Description\n");
    let bank = QuestionBank::open(file.path()).unwrap();
    assert!(bank.is_empty());
    assert!(bank.count_by_difficulty().is_empty());
}
