use rustyline::{Config, Editor, Result};

pub const CITY_LABEL: &str = "Enter the city for your day trip";
pub const INTERESTS_LABEL: &str = "Enter your interests (comma-separated)";

/// What the user typed at one of the form prompts.
#[derive(Debug, PartialEq, Eq)]
pub enum FormLine {
    Value(String),
    Help,
    Quit,
}

/// Blank lines yield `None` so the caller can ask again.
pub fn classify(line: &str) -> Option<FormLine> {
    match line.trim() {
        "" => None,
        "/help" => Some(FormLine::Help),
        "/quit" => Some(FormLine::Quit),
        _ => Some(FormLine::Value(line.to_string())),
    }
}

pub fn generate_prompt(label: &str) -> String {
    format!("{}: ", label)
}

pub fn rl() -> Result<Editor<()>> {
    let config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .build();
    Editor::with_config(config)
}
