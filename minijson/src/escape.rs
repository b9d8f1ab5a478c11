// SPDX-License-Identifier: Apache-2.0

//! The fixed set of single-character string escapes.

/// Map the byte following a backslash to the character it stands for.
///
/// Returns `None` for anything outside the recognized set. `\u` is handled
/// by the string rule before this table is consulted, so that it gets its
/// own error message.
pub(crate) fn unescape(selector: u8) -> Option<char> {
    match selector {
        b'"' => Some('"'),
        b'\\' => Some('\\'),
        b'/' => Some('/'),
        b'b' => Some('\u{0008}'), // backspace
        b'f' => Some('\u{000C}'), // form feed
        b'n' => Some('\n'),
        b'r' => Some('\r'),
        b't' => Some('\t'),
        _ => None,
    }
}
