// Line-oriented console used by every booking flow
// Generic over the reader and writer so the flows can be driven by a scripted transcript

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::debug;

use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input closed before the booking was completed")]
    InputClosed,
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::StdoutLock<'static>> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn say(&mut self, line: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    // Show the prompt, read one line and return it trimmed
    pub fn prompt(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }

        Ok(line.trim().to_string())
    }

    pub fn report(&mut self, error: &ValidationError) -> Result<(), ConsoleError> {
        debug!(%error, "input rejected");
        self.say(format_args!("Error: {}", error))
    }

    // Ask until the validator accepts the trimmed input and return the value it produced.
    // No retry limit, each rejection prints the reason before prompting again.
    pub fn get_valid_input<T, F>(&mut self, prompt: &str, validator: F) -> Result<T, ConsoleError>
    where
        F: Fn(&str) -> Result<T, ValidationError>,
    {
        loop {
            let input = self.prompt(prompt)?;
            match validator(&input) {
                Ok(value) => return Ok(value),
                Err(error) => self.report(&error)?,
            }
        }
    }

    pub fn get_yes_no_input(&mut self, prompt: &str) -> Result<bool, ConsoleError> {
        loop {
            let choice = self.prompt(prompt)?.to_lowercase();
            match choice.as_str() {
                "yes" | "y" => return Ok(true),
                "no" | "n" => return Ok(false),
                _ => self.say("Please enter 'yes' or 'no'")?,
            }
        }
    }
}
