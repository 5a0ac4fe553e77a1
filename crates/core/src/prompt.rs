//! Operator interaction seam.
//!
//! Every interaction blocks until the operator answers. An operator abort
//! surfaces as [`PromptError::Cancelled`] from whichever prompt was active.

use std::io::{BufRead, Write};

use crate::error::PromptError;

/// Renders questions to the operator and collects typed answers.
pub trait Prompter {
    /// Show an informational line that needs no answer.
    fn notify(&mut self, message: &str) -> Result<(), PromptError>;

    /// Show `message` and wait for any input. The input itself is discarded.
    fn acknowledge(&mut self, message: &str) -> Result<(), PromptError>;

    /// Ask a yes/no question, returning `default` on an empty answer.
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError>;

    /// Ask for free text. The answer is returned as typed, empty included.
    fn text_input(&mut self, message: &str) -> Result<String, PromptError>;
}

/// Interpret a confirm answer: blank takes the default, anything starting
/// with `y` in any case is yes, anything else is no.
pub fn parse_confirm(answer: &str, default: bool) -> bool {
    let answer = answer.trim();
    if answer.is_empty() {
        return default;
    }
    answer.to_lowercase().starts_with('y')
}

/// Question suffix showing which answer the empty line selects.
pub fn confirm_hint(default: bool) -> &'static str {
    if default {
        "(Y/n)"
    } else {
        "(y/N)"
    }
}

// ──────────────────────────────────────────────
// LinePrompter
// ──────────────────────────────────────────────

/// Line-oriented prompter over any reader/writer pair.
///
/// One line of input answers one interaction. End of input counts as the
/// operator walking away and is reported as [`PromptError::Cancelled`].
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        LinePrompter { reader, writer }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.writer, "? {} ", question)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(self.writer)?;
            return Err(PromptError::Cancelled);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn notify(&mut self, message: &str) -> Result<(), PromptError> {
        writeln!(self.writer, "{}", message)?;
        Ok(())
    }

    fn acknowledge(&mut self, message: &str) -> Result<(), PromptError> {
        self.ask(message).map(|_| ())
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError> {
        let question = format!("{} {}", message, confirm_hint(default));
        let answer = self.ask(&question)?;
        Ok(parse_confirm(&answer, default))
    }

    fn text_input(&mut self, message: &str) -> Result<String, PromptError> {
        self.ask(message)
    }
}
