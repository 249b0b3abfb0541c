use std::io::{BufRead, Write};

use log::debug;

use crate::error::PasswordError;
use crate::generators::GenerationRequest;
use crate::input::parse::{parse_length, parse_yes_no};

pub const LENGTH_PROMPT: &str = "Enter password length: ";
pub const LETTERS_PROMPT: &str = "Include letters? (y/n): ";
pub const DIGITS_PROMPT: &str = "Include digits? (y/n): ";
pub const SYMBOLS_PROMPT: &str = "Include symbols? (y/n): ";

#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    fn ask(&mut self, question: &str) -> Result<String, PasswordError>;
}

/// Writes each question to `writer` and reads one answer line from `reader`.
pub struct StdioPrompter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StdioPrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> Prompter for StdioPrompter<R, W> {
    fn ask(&mut self, question: &str) -> Result<String, PasswordError> {
        write!(self.writer, "{}", question)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PasswordError::Input("unexpected end of input".to_string()));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Runs the interactive question sequence and builds a request from the answers.
///
/// Text that is not an integer aborts before the class questions are asked.
/// Every other answer is collected first, so a missing class is reported
/// ahead of a non-positive length.
pub fn collect_request(prompter: &mut dyn Prompter) -> Result<GenerationRequest, PasswordError> {
    let length = parse_length(&prompter.ask(LENGTH_PROMPT)?)?;
    let letters = parse_yes_no(&prompter.ask(LETTERS_PROMPT)?);
    let digits = parse_yes_no(&prompter.ask(DIGITS_PROMPT)?);
    let symbols = parse_yes_no(&prompter.ask(SYMBOLS_PROMPT)?);
    debug!(
        "Interactive answers: length={}, letters={}, digits={}, symbols={}",
        length, letters, digits, symbols
    );

    GenerationRequest::from_flags(length, letters, digits, symbols)
}
