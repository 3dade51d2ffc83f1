//! Line-oriented stream source: text lines in, chart values out.
//!
//! Input is one numeric token per non-empty line, optionally wrapped in
//! single or double quotes. Blank lines are skipped silently. A line that
//! does not parse as a float is surfaced as an error item so the caller
//! can report it and keep pulling — a malformed line never terminates the
//! stream and never reaches the engine.

use std::io::BufRead;

use thiserror::Error;

/// Errors produced while pulling values from the line stream.
#[derive(Debug, Error)]
pub enum StreamError {
    /// A non-blank line did not parse as a floating-point number.
    ///
    /// Recoverable: report it and continue pulling.
    #[error("invalid line {line:?}")]
    Malformed { line: String },

    /// The underlying reader failed.
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
}

/// Lazy iterator over parsed chart values.
///
/// Wraps any [`BufRead`] source and yields one `Result<f64, StreamError>`
/// per non-blank line, in input order. The sequence is single-pass and as
/// unbounded as its source; pulling blocks on the source's next line.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use runchart::ValueLines;
///
/// let values: Vec<f64> = ValueLines::new(Cursor::new("1.0\n\n'2.5'\n"))
///     .filter_map(Result::ok)
///     .collect();
/// assert_eq!(values, vec![1.0, 2.5]);
/// ```
pub struct ValueLines<R> {
    lines: std::io::Lines<R>,
}

impl<R: BufRead> ValueLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> Iterator for ValueLines<R> {
    type Item = Result<f64, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(err) => return Some(Err(StreamError::Io(err))),
            };
            match parse_value_line(&line) {
                Some(item) => return Some(item),
                None => continue,
            }
        }
    }
}

/// Parses one line into a value.
///
/// Returns `None` for blank lines, `Some(Ok(..))` for a numeric token, and
/// `Some(Err(..))` for anything else. A token wrapped in quotes is
/// unwrapped before parsing.
fn parse_value_line(line: &str) -> Option<Result<f64, StreamError>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let token = if trimmed.starts_with('\'') || trimmed.starts_with('"') {
        trimmed.trim_matches('"').trim_matches('\'')
    } else {
        trimmed
    };
    match token.parse::<f64>() {
        Ok(value) => Some(Ok(value)),
        Err(_) => Some(Err(StreamError::Malformed {
            line: line.to_string(),
        })),
    }
}
