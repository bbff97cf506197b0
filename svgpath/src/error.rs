//! Error types associated with path conversion.

use std::fmt;

/// Errors that occur when path data does not follow the path grammar.
///
/// Parsing stops at the first error. Primitives already sent to the
/// formatter for the part of the path preceding the error are not retracted;
/// use [`PathConverter::parse_buffered`](crate::PathConverter::parse_buffered)
/// when partial output is not acceptable.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum MalformedPathError {
    /// A character that does not start any path command.
    UnknownCommand { command: char, position: usize },
    /// An `F` token followed by something other than `0` or `1`.
    InvalidFillRule {
        digit: Option<char>,
        position: usize,
    },
    /// A numeric argument that does not scan as a float.
    InvalidNumber { position: usize },
    /// An arc flag that is neither `0` nor `1`.
    InvalidFlag { position: usize },
    /// The data ended while reading the arguments of this command.
    UnexpectedEnd { command: char },
    /// A drawing command appeared before the first moveto.
    MissingMoveTo { command: char, position: usize },
}

impl MalformedPathError {
    /// Byte offset into the path data where the error was detected, if known.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::UnknownCommand { position, .. }
            | Self::InvalidFillRule { position, .. }
            | Self::InvalidNumber { position }
            | Self::InvalidFlag { position }
            | Self::MissingMoveTo { position, .. } => Some(*position),
            Self::UnexpectedEnd { .. } => None,
        }
    }
}

impl fmt::Display for MalformedPathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::UnknownCommand { command, position } => {
                write!(f, "unknown path command '{command}' at offset {position}")
            }
            Self::InvalidFillRule {
                digit: Some(digit),
                position,
            } => write!(
                f,
                "invalid fill rule '{digit}' at offset {position} (expected 0 or 1)"
            ),
            Self::InvalidFillRule {
                digit: None,
                position,
            } => write!(f, "missing fill rule digit at offset {position}"),
            Self::InvalidNumber { position } => write!(f, "expected a number at offset {position}"),
            Self::InvalidFlag { position } => {
                write!(f, "invalid arc flag at offset {position} (expected 0 or 1)")
            }
            Self::UnexpectedEnd { command } => {
                write!(f, "path data ended inside the arguments of '{command}'")
            }
            Self::MissingMoveTo { command, position } => write!(
                f,
                "command '{command}' at offset {position} appears before the first moveto"
            ),
        }
    }
}

impl std::error::Error for MalformedPathError {}

/// A conversion was requested but no formatter has been bound.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct MissingFormatterError;

impl fmt::Display for MissingFormatterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "no formatter is bound to the converter")
    }
}

impl std::error::Error for MissingFormatterError {}

/// Errors that may occur when converting path data with a
/// [`PathConverter`](crate::PathConverter).
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ConvertError {
    /// The path data was rejected by the parser.
    Malformed(MalformedPathError),
    /// The converter has no formatter.
    MissingFormatter(MissingFormatterError),
}

impl From<MalformedPathError> for ConvertError {
    fn from(e: MalformedPathError) -> Self {
        Self::Malformed(e)
    }
}

impl From<MissingFormatterError> for ConvertError {
    fn from(e: MissingFormatterError) -> Self {
        Self::MissingFormatter(e)
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Malformed(e) => write!(f, "{e}"),
            Self::MissingFormatter(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed(e) => Some(e),
            Self::MissingFormatter(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = MalformedPathError::UnknownCommand {
            command: 'X',
            position: 4,
        };
        assert_eq!(e.to_string(), "unknown path command 'X' at offset 4");
        let e = MalformedPathError::InvalidFillRule {
            digit: Some('7'),
            position: 1,
        };
        assert_eq!(
            e.to_string(),
            "invalid fill rule '7' at offset 1 (expected 0 or 1)"
        );
        let e = ConvertError::from(MissingFormatterError);
        assert_eq!(e.to_string(), "no formatter is bound to the converter");
    }

    #[test]
    fn positions() {
        assert_eq!(
            MalformedPathError::InvalidNumber { position: 9 }.position(),
            Some(9)
        );
        assert_eq!(
            MalformedPathError::UnexpectedEnd { command: 'Q' }.position(),
            None
        );
    }
}
