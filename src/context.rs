// SPDX-FileCopyrightText: 2025 The prjava authors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Write};

/// Current state of the output of the formatter.
///
/// Everything written through [`Write`] is forwarded to the output,
/// unless the context is currently buffering (see [`Self::buffer`]).
/// The context keeps track of the column the next character lands in,
/// which is what allows it to decide about line breaks.
pub struct Context<'a, W: Write> {
    output: &'a mut W,
    /// One level of indentation, e.g. two spaces.
    indentation: String,
    /// The level of indentation
    /// (**not** measured in spaces).
    pub indent_level: usize,
    /// The 0-based column of the next character.
    column: usize,
    line_width: usize,
    /// Nesting depth of [`Self::buffer`] calls.
    buffering: usize,
    buffer: String,
    /// Written before the buffer, unless the buffer goes onto a new line.
    prefix: String,
    /// The column the buffer (without prefix) starts at.
    buffer_start: usize,
}

/// The column after writing `text`, starting at `column`.
fn advance(column: usize, text: &str) -> usize {
    match text.rfind('\n') {
        Some(idx) => text.get(idx + 1..).unwrap_or_default().chars().count(),
        None => column + text.chars().count(),
    }
}

impl<'a, W: Write> Context<'a, W> {
    pub fn new(output: &'a mut W, indentation: &str, line_width: usize) -> Self {
        Self {
            output,
            indentation: indentation.to_owned(),
            indent_level: 0,
            column: 0,
            line_width,
            buffering: 0,
            buffer: String::new(),
            prefix: String::new(),
            buffer_start: 0,
        }
    }

    /// A detached context at the same column and indentation level,
    /// writing into `output`.
    /// Used to try out how something would be printed.
    pub fn probe<'b>(&self, output: &'b mut String) -> Context<'b, String> {
        let mut probe = Context::new(output, &self.indentation, self.line_width);
        probe.indent_level = self.indent_level;
        probe.column = self.column;
        probe
    }

    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    #[must_use]
    pub const fn line_width(&self) -> usize {
        self.line_width
    }

    fn indent_width(&self, level: usize) -> usize {
        self.indentation.chars().count() * level
    }

    pub const fn incr(&mut self) {
        self.indent_level += 1;
    }

    pub const fn decr(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Writes the indentation for the current level.
    pub fn indent(&mut self) -> fmt::Result {
        let indentation = self.indentation.repeat(self.indent_level);
        self.write_str(&indentation)
    }

    /// Writes the indentation for one level less than the current one.
    pub fn indent_less(&mut self) -> fmt::Result {
        let indentation = self
            .indentation
            .repeat(self.indent_level.saturating_sub(1));
        self.write_str(&indentation)
    }

    /// Terminates the current line.
    pub fn pln(&mut self) -> fmt::Result {
        self.unbuffer()?;
        self.write_char('\n')
    }

    /// Starts collecting output instead of writing it,
    /// so [`Self::fit`] can decide whether it goes onto the current line.
    ///
    /// `prefix` separates the collected output from what precedes it
    /// on the same line; it is dropped when breaking the line.
    pub fn buffer(&mut self, prefix: &str) -> fmt::Result {
        if self.buffering == 0 {
            self.buffer.clear();
            prefix.clone_into(&mut self.prefix);
            self.buffer_start = self.column;
            self.buffering = 1;
            Ok(())
        } else {
            self.buffering += 1;
            self.write_str(prefix)
        }
    }

    /// Writes out what was collected since the matching [`Self::buffer`],
    /// on the current line if it fits, on a new line otherwise.
    pub fn fit(&mut self) -> fmt::Result {
        match self.buffering {
            0 => Ok(()),
            1 => {
                self.buffering = 0;
                let content = std::mem::take(&mut self.buffer);
                let first_line = content.split('\n').next().unwrap_or_default();
                let end = self.buffer_start
                    + self.prefix.chars().count()
                    + first_line.chars().count();
                let line_start = self.buffer_start <= self.indent_width(self.indent_level);
                self.column = self.buffer_start;
                if end > self.line_width && !line_start {
                    self.write_char('\n')?;
                    self.indent()?;
                } else {
                    let prefix = std::mem::take(&mut self.prefix);
                    self.write_str(&prefix)?;
                }
                self.write_str(&content)
            }
            _ => {
                self.buffering -= 1;
                Ok(())
            }
        }
    }

    /// Writes out any collected output as is.
    pub fn unbuffer(&mut self) -> fmt::Result {
        if self.buffering == 0 {
            return Ok(());
        }
        self.buffering = 0;
        let content = std::mem::take(&mut self.buffer);
        let prefix = std::mem::take(&mut self.prefix);
        self.column = self.buffer_start;
        self.write_str(&prefix)?;
        self.write_str(&content)
    }
}

impl<W: Write> Write for Context<'_, W> {
    fn write_str(&mut self, text: &str) -> fmt::Result {
        self.column = advance(self.column, text);
        if self.buffering > 0 {
            self.buffer.push_str(text);
            Ok(())
        } else {
            self.output.write_str(text)
        }
    }
}
