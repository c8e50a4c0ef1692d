use directories_next::BaseDirs;
use log::info;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

mod app;
mod bank;
mod draw;
mod output;

use app::App;
use output::terminal::TerminalOutput;

const DEFAULT_QUESTION_FILE: &'static str = "questions.csv";

fn question_file_path() -> PathBuf {
    if let Some(path) = env::args().nth(1) {
        return PathBuf::from(path);
    }
    if let Some(base_dirs) = BaseDirs::new() {
        let mut path = base_dirs.data_dir().to_path_buf();
        path.push("grindstone");
        path.push(DEFAULT_QUESTION_FILE);
        if path.exists() {
            return path;
        }
    }
    PathBuf::from(DEFAULT_QUESTION_FILE)
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

fn main() {
    pretty_env_logger::init();

    let path = question_file_path();
    info!("using question file {:?}", path);

    let mut app = App::new(TerminalOutput::new());
    app.load(&path);

    let stdin = io::stdin();
    prompt();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let line = line.trim();
        if !line.is_empty() && !app.handle_line(line) {
            break;
        }
        prompt();
    }
}
