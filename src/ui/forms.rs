use anyhow::{anyhow, Context, Result};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Free-text book filter typed after `/`.
#[derive(Default, Clone)]
pub(crate) struct FilterInput {
    pub(crate) query: String,
}

impl FilterInput {
    /// Append a printable character to the query.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.query.push(ch);
        true
    }

    pub(crate) fn backspace(&mut self) {
        self.query.pop();
    }

    pub(crate) fn build_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::raw("Book: "),
            Span::styled(self.query.clone(), Style::default().fg(Color::Yellow)),
        ])
    }

    /// Column offset of the cursor inside the rendered line.
    pub(crate) fn cursor_offset(&self) -> usize {
        "Book: ".len() + self.query.chars().count()
    }
}

/// Which list a number jump targets.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum JumpTarget {
    Chapter,
    Verse,
}

impl JumpTarget {
    pub(crate) fn label(self) -> &'static str {
        match self {
            JumpTarget::Chapter => "Chapter",
            JumpTarget::Verse => "Verse",
        }
    }
}

/// Digits typed after `:` (chapter) or `.` (verse).
#[derive(Clone)]
pub(crate) struct JumpInput {
    pub(crate) target: JumpTarget,
    pub(crate) digits: String,
    pub(crate) error: Option<String>,
}

impl JumpInput {
    pub(crate) fn new(target: JumpTarget) -> Self {
        Self {
            target,
            digits: String::new(),
            error: None,
        }
    }

    /// Only ASCII digits are accepted.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_ascii_digit() {
            self.digits.push(ch);
            self.error = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn backspace(&mut self) {
        self.digits.pop();
        self.error = None;
    }

    /// Validate the digits and return the 1-based number the operator typed.
    pub(crate) fn parse_number(&self) -> Result<u32> {
        let raw = self.digits.trim();
        if raw.is_empty() {
            return Err(anyhow!("{} number is required.", self.target.label()));
        }
        let number = raw
            .parse::<u32>()
            .with_context(|| format!("{} number is too large.", self.target.label()))?;
        if number == 0 {
            return Err(anyhow!("{} numbers start at 1.", self.target.label()));
        }
        Ok(number)
    }

    pub(crate) fn build_line(&self) -> Line<'static> {
        let display = if self.digits.is_empty() {
            "<number>".to_string()
        } else {
            self.digits.clone()
        };
        let style = if self.digits.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Yellow)
        };
        Line::from(vec![
            Span::raw(format!("{}: ", self.target.label())),
            Span::styled(display, style),
        ])
    }

    pub(crate) fn cursor_offset(&self) -> usize {
        self.target.label().len() + 2 + self.digits.chars().count()
    }
}
