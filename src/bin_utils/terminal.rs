use std::{
    fmt::Display,
    io::{BufRead, Lines, Write},
};

use anyhow::{Context, Result};

/// Line based prompt/answer channel over any reader and writer.
pub struct Terminal<'w, R, W: 'w> {
    lines: Lines<R>,
    output: &'w mut W,
}

impl<'w, R, W> Terminal<'w, R, W>
where
    R: BufRead,
    W: Write + 'w,
{
    pub fn new(input: R, output: &'w mut W) -> Self {
        Self {
            lines: input.lines(),
            output,
        }
    }

    /// Prints `text` without a newline and reads one trimmed answer.
    /// `None` once the input is exhausted.
    pub fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")?;
        match self.lines.next() {
            None => Ok(None),
            Some(line) => {
                let line = line.context("Failed to read from input")?;
                Ok(Some(line.trim().to_string()))
            }
        }
    }

    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{text}").context("Failed to write output")
    }
}
