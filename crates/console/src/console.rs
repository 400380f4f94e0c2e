//! Line-oriented terminal: the only place that touches input and output.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use shopdesk_core::{DomainError, DomainResult};

use crate::error::{ConsoleError, ConsoleResult};

/// Blocking line reader paired with an append-only text sink.
///
/// Every read consumes exactly one line and trims it, so a product name may
/// contain spaces. Reads return `ConsoleResult<DomainResult<T>>`: the outer
/// layer is I/O or end-of-input, the inner one is input the caller should
/// report and ask for again.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write `text` followed by a newline.
    pub fn say(&mut self, text: impl Display) -> ConsoleResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Write `text` without a newline and flush, leaving the cursor after it.
    pub fn prompt(&mut self, text: &str) -> ConsoleResult<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Tell the user their input was rejected.
    pub fn report(&mut self, err: &DomainError) -> ConsoleResult<()> {
        let detail = match err {
            DomainError::Validation(msg) | DomainError::InvalidId(msg) => msg.as_str(),
            DomainError::NotFound => "no such record",
        };
        self.say(format_args!("Invalid input: {detail}. Please try again."))
    }

    /// A line that is not UTF-8 is rejected input, not an I/O failure.
    fn read_line(&mut self) -> ConsoleResult<DomainResult<String>> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(String::from_utf8(raw)
            .map(|line| line.trim().to_string())
            .map_err(|_| DomainError::validation("input is not valid text")))
    }

    /// Prompt and read one line of free text.
    pub fn read_text(&mut self, prompt: &str) -> ConsoleResult<DomainResult<String>> {
        self.prompt(prompt)?;
        self.read_line()
    }

    /// Prompt and read a whole number.
    pub fn read_i64(&mut self, prompt: &str) -> ConsoleResult<DomainResult<i64>> {
        Ok(self.read_text(prompt)?.and_then(|text| {
            text.parse::<i64>()
                .map_err(|_| DomainError::validation(format!("'{text}' is not a whole number")))
        }))
    }

    /// Prompt and parse a line with the type's own `FromStr`.
    pub fn read_parsed<T>(&mut self, prompt: &str) -> ConsoleResult<DomainResult<T>>
    where
        T: FromStr<Err = DomainError>,
    {
        Ok(self.read_text(prompt)?.and_then(|text| text.parse::<T>()))
    }
}
