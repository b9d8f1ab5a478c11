// SPDX-License-Identifier: Apache-2.0

use core::fmt;

/// Reasons a parse can fail.
///
/// Each variant renders as the fixed message the parser reports for that
/// failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The buffer ran out, or held a structural byte, where a value had to start.
    ExpectedValue,
    /// An object member did not start with a quoted key.
    ExpectedKey,
    /// An object key was not followed by `:`.
    ExpectedColon,
    /// Array elements or object members were not separated by `,`.
    ExpectedSeparator,
    /// A literal/number scan captured no characters.
    EmptyValue,
    /// The buffer ended inside a string.
    UnterminatedString,
    /// The buffer ended inside an array.
    UnterminatedArray,
    /// The buffer ended inside an object.
    UnterminatedObject,
    /// The buffer ended right after a backslash.
    IncompleteEscape,
    /// The character after a backslash is not a recognized escape.
    InvalidEscape,
    /// `\u` escapes are rejected rather than mis-decoded.
    UnicodeEscape,
    /// A literal token was neither `null`, `true`, `false` nor a number.
    InvalidNumber,
}

impl ErrorKind {
    /// The fixed message text for this failure.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::ExpectedValue => "Expected value",
            ErrorKind::ExpectedKey => "Expected key",
            ErrorKind::ExpectedColon => "Expected colon",
            ErrorKind::ExpectedSeparator => "Expected separator",
            ErrorKind::EmptyValue => "Value must not be empty",
            ErrorKind::UnterminatedString => "Unterminated string",
            ErrorKind::UnterminatedArray => "Unterminated array",
            ErrorKind::UnterminatedObject => "Unterminated object",
            ErrorKind::IncompleteEscape => "Incomplete character escape",
            ErrorKind::InvalidEscape => "Invalid character escape",
            ErrorKind::UnicodeEscape => "Unicode escapes are not implemented yet",
            ErrorKind::InvalidNumber => "Invalid number",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A parse failure: what went wrong, and the byte offset where it was
/// detected.
///
/// The offset indexes the original input buffer and can be handed to
/// [`crate::get_context`] to render the offending line. The error itself
/// stays cheap and holds no reference into the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    /// Byte offset into the input at the point of failure detection.
    pub cursor: usize,
    /// What went wrong.
    pub kind: ErrorKind,
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, cursor: usize) -> Self {
        ParseError { cursor, kind }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.kind, self.cursor)
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_reported_text() {
        assert_eq!(ErrorKind::ExpectedValue.message(), "Expected value");
        assert_eq!(ErrorKind::EmptyValue.message(), "Value must not be empty");
        assert_eq!(
            ErrorKind::UnicodeEscape.message(),
            "Unicode escapes are not implemented yet"
        );
    }

    #[test]
    fn display_includes_the_offset() {
        let err = ParseError::new(ErrorKind::ExpectedColon, 17);
        assert_eq!(err.to_string(), "Expected colon at offset 17");
    }
}
