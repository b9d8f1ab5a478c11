// SPDX-License-Identifier: Apache-2.0

//! Recursive-descent JSON parser.
//!
//! One function per grammar rule, all sharing a forward-only [`Cursor`].
//! The first failure anywhere aborts the whole parse; errors propagate to
//! the top untouched, carrying the byte offset where they were detected.

use std::collections::BTreeMap;

use log::debug;

use crate::cursor::Cursor;
use crate::escape::unescape;
use crate::parse_error::{ErrorKind, ParseError};
use crate::value::JsonValue;

/// Bytes a literal or number token may be built from. The set is wide on
/// purpose: `null`, `true`, `false` and numeric tokens are all captured by
/// one scan and told apart afterwards.
fn is_literal_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'+' | b'-')
}

/// Parse a complete JSON document from `source`.
///
/// On success the returned tree owns all of its data and holds no
/// references into `source`. On failure the error's `cursor` indexes
/// `source` at the point the problem was detected; [`crate::get_context`]
/// turns it into a printable snippet.
pub fn parse(source: &str) -> Result<JsonValue, ParseError> {
    debug!("parsing {} bytes", source.len());
    let mut cursor = Cursor::new(source);
    let result = parse_value(&mut cursor);
    if let Err(err) = &result {
        debug!("parse failed: {err}");
    }
    result
}

/// Entry rule: dispatch on the first significant byte.
fn parse_value(cursor: &mut Cursor) -> Result<JsonValue, ParseError> {
    cursor.skip_whitespace();
    let Some(byte) = cursor.peek() else {
        return Err(ParseError::new(ErrorKind::ExpectedValue, cursor.pos()));
    };

    match byte {
        b'{' => {
            cursor.bump();
            parse_object(cursor)
        }
        b'[' => {
            cursor.bump();
            parse_array(cursor)
        }
        b'"' => Ok(JsonValue::String(parse_string(cursor)?)),
        _ => parse_literal(cursor),
    }
}

/// Scan a maximal literal token and classify it as `null`, a boolean or a
/// number. The cursor is committed only when the token is accepted, so a
/// failure reports at the token start.
fn parse_literal(cursor: &mut Cursor) -> Result<JsonValue, ParseError> {
    let start = cursor.pos();
    let mut end = start;
    while matches!(cursor.byte_at(end), Some(byte) if is_literal_byte(byte)) {
        end += 1;
    }

    let token = cursor.slice(start, end);
    if token.is_empty() {
        return Err(ParseError::new(ErrorKind::EmptyValue, start));
    }

    let value = match token {
        "null" => JsonValue::Null,
        "true" => JsonValue::Bool(true),
        "false" => JsonValue::Bool(false),
        // The numeric conversion has to consume the whole token; trailing
        // garbage like `12abc` was captured by the scan and must not be
        // silently truncated away.
        _ => token
            .parse::<f64>()
            .map(JsonValue::Number)
            .map_err(|_| ParseError::new(ErrorKind::InvalidNumber, start))?,
    };
    cursor.seek(end);
    Ok(value)
}

/// Parse a string; the cursor sits on the opening quote. The escape
/// selector is read from the source buffer at the post-backslash position,
/// and `\u` is rejected outright instead of being mis-decoded.
fn parse_string(cursor: &mut Cursor) -> Result<String, ParseError> {
    cursor.bump();
    let mut out = String::with_capacity(32);
    let mut run_start = cursor.pos();
    loop {
        match cursor.peek() {
            None => {
                return Err(ParseError::new(ErrorKind::UnterminatedString, cursor.pos()));
            }
            Some(b'\\') => {
                out.push_str(cursor.slice(run_start, cursor.pos()));
                cursor.bump();
                let Some(selector) = cursor.peek() else {
                    return Err(ParseError::new(ErrorKind::IncompleteEscape, cursor.pos()));
                };
                if selector == b'u' {
                    return Err(ParseError::new(ErrorKind::UnicodeEscape, cursor.pos()));
                }
                let Some(unescaped) = unescape(selector) else {
                    return Err(ParseError::new(ErrorKind::InvalidEscape, cursor.pos()));
                };
                out.push(unescaped);
                cursor.bump();
                run_start = cursor.pos();
            }
            Some(b'"') => {
                out.push_str(cursor.slice(run_start, cursor.pos()));
                cursor.bump();
                return Ok(out);
            }
            Some(_) => cursor.bump(),
        }
    }
}

/// Parse the elements of an array; the opening bracket is already consumed.
fn parse_array(cursor: &mut Cursor) -> Result<JsonValue, ParseError> {
    let mut values = Vec::new();
    loop {
        cursor.skip_whitespace();
        if cursor.at_end() {
            return Err(ParseError::new(ErrorKind::UnterminatedArray, cursor.pos()));
        }
        if cursor.peek() == Some(b']') {
            cursor.bump();
            break;
        }

        values.push(parse_value(cursor)?);

        // The separator is optional right before the closing bracket,
        // which tolerates one trailing comma.
        let separator_found = skip_separator(cursor);
        if cursor.peek() == Some(b']') {
            cursor.bump();
            break;
        }
        if !separator_found {
            return Err(ParseError::new(ErrorKind::ExpectedSeparator, cursor.pos()));
        }
    }
    Ok(JsonValue::Array(values))
}

/// Parse the members of an object; the opening brace is already consumed.
/// A duplicate key keeps the first value inserted for it.
fn parse_object(cursor: &mut Cursor) -> Result<JsonValue, ParseError> {
    let mut members = BTreeMap::new();
    loop {
        cursor.skip_whitespace();
        if cursor.at_end() {
            return Err(ParseError::new(ErrorKind::UnterminatedObject, cursor.pos()));
        }
        if cursor.peek() == Some(b'}') {
            cursor.bump();
            break;
        }

        if cursor.peek() != Some(b'"') {
            return Err(ParseError::new(ErrorKind::ExpectedKey, cursor.pos()));
        }
        let key = parse_string(cursor)?;

        cursor.skip_whitespace();
        if cursor.peek() != Some(b':') {
            return Err(ParseError::new(ErrorKind::ExpectedColon, cursor.pos()));
        }
        cursor.bump();

        cursor.skip_whitespace();
        if cursor.at_end() {
            return Err(ParseError::new(ErrorKind::ExpectedValue, cursor.pos()));
        }
        let value = parse_value(cursor)?;
        members.entry(key).or_insert(value);

        let separator_found = skip_separator(cursor);
        if cursor.peek() == Some(b'}') {
            cursor.bump();
            break;
        }
        if !separator_found {
            return Err(ParseError::new(ErrorKind::ExpectedSeparator, cursor.pos()));
        }
    }
    Ok(JsonValue::Object(members))
}

/// Skip whitespace and at most one comma. True when a comma was consumed.
fn skip_separator(cursor: &mut Cursor) -> bool {
    cursor.skip_whitespace();
    if cursor.peek() == Some(b',') {
        cursor.bump();
        cursor.skip_whitespace();
        return true;
    }
    false
}
