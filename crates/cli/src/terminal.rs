//! `rustyline`-backed prompter for an interactive terminal.
//!
//! The editor draws on the controlling terminal rather than stdout, so the
//! only thing ever written to stdout is the final report.

use rustyline::config::{Behavior, Config};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use winix_collect_core::prompt::{confirm_hint, parse_confirm};
use winix_collect_core::{PromptError, Prompter};

pub struct TerminalPrompter {
    editor: DefaultEditor,
}

impl TerminalPrompter {
    pub fn new() -> Result<Self, PromptError> {
        let config = Config::builder()
            .behavior(Behavior::PreferTerm)
            .auto_add_history(false)
            .build();
        let editor = DefaultEditor::with_config(config).map_err(readline_error)?;
        Ok(TerminalPrompter { editor })
    }

    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        self.editor
            .readline(&format!("? {} ", question))
            .map_err(readline_error)
    }
}

impl Prompter for TerminalPrompter {
    fn notify(&mut self, message: &str) -> Result<(), PromptError> {
        eprintln!("{}", message);
        Ok(())
    }

    fn acknowledge(&mut self, message: &str) -> Result<(), PromptError> {
        self.ask(message).map(|_| ())
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError> {
        let answer = self.ask(&format!("{} {}", message, confirm_hint(default)))?;
        Ok(parse_confirm(&answer, default))
    }

    fn text_input(&mut self, message: &str) -> Result<String, PromptError> {
        self.ask(message)
    }
}

/// Ctrl-C and Ctrl-D both end the session quietly.
fn readline_error(e: ReadlineError) -> PromptError {
    match e {
        ReadlineError::Interrupted | ReadlineError::Eof => PromptError::Cancelled,
        ReadlineError::Io(io) => PromptError::Io(io),
        other => PromptError::Io(std::io::Error::other(other.to_string())),
    }
}
