//! Tokenizer for path data.

use crate::{error::MalformedPathError, Point};

/// Byte level reader over path data.
///
/// All tokens of the grammar are ASCII so the scanner works on bytes and
/// only decodes characters when reporting an error.
#[derive(Clone, Debug)]
pub(crate) struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Current byte offset into the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Returns the full character starting at `pos`, for error reporting.
    pub fn char_at(&self, pos: usize) -> char {
        self.text
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    pub fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\r' | b'\n' | b'\x0C')) {
            self.pos += 1;
        }
    }

    /// Skips whitespace with at most one comma in between.
    pub fn skip_separators(&mut self) {
        self.skip_whitespace();
        if self.peek() == Some(b',') {
            self.pos += 1;
            self.skip_whitespace();
        }
    }

    /// Returns true if the next token starts a number.
    ///
    /// Separators before the number are consumed.
    pub fn has_number(&mut self) -> bool {
        self.skip_separators();
        matches!(self.peek(), Some(b'0'..=b'9' | b'.' | b'+' | b'-'))
    }

    /// Reads a number argument of `command`.
    ///
    /// The token ends at the first byte that can not continue it so that
    /// `1.2.3` reads as `1.2` followed by `.3` and `10-5` as `10` followed
    /// by `-5`.
    pub fn read_number(&mut self, command: u8) -> Result<f32, MalformedPathError> {
        self.skip_separators();
        let start = self.pos;
        if self.peek().is_none() {
            return Err(MalformedPathError::UnexpectedEnd {
                command: command as char,
            });
        }
        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.pos += 1;
        }
        let mut digits = self.skip_digits();
        if self.peek() == Some(b'.') {
            self.pos += 1;
            digits += self.skip_digits();
        }
        if digits == 0 {
            return Err(self.invalid_number(start));
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if self.skip_digits() == 0 {
                return Err(self.invalid_number(start));
            }
        }
        self.text[start..self.pos]
            .parse()
            .map_err(|_| self.invalid_number(start))
    }

    /// Reads a pair of numbers as a point.
    pub fn read_point(&mut self, command: u8) -> Result<Point<f32>, MalformedPathError> {
        let x = self.read_number(command)?;
        let y = self.read_number(command)?;
        Ok(Point::new(x, y))
    }

    /// Reads a single `0` or `1` arc flag.
    ///
    /// Flags are exactly one character so `01` is two flags.
    pub fn read_flag(&mut self, command: u8) -> Result<bool, MalformedPathError> {
        self.skip_separators();
        let position = self.pos;
        let flag = match self.peek() {
            Some(b'0') => false,
            Some(b'1') => true,
            Some(_) => return Err(MalformedPathError::InvalidFlag { position }),
            None => {
                return Err(MalformedPathError::UnexpectedEnd {
                    command: command as char,
                })
            }
        };
        self.pos += 1;
        Ok(flag)
    }

    fn skip_digits(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        self.pos - start
    }

    fn invalid_number(&mut self, start: usize) -> MalformedPathError {
        self.pos = start;
        MalformedPathError::InvalidNumber { position: start }
    }
}
