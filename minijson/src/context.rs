// SPDX-License-Identifier: Apache-2.0

//! Diagnostic snippet rendering for parse errors.

/// Render the line of `source` enclosing byte offset `cursor`, followed by
/// a caret line marking the offset's column.
///
/// Pure and total: it works for any offset (one at or past the end of the
/// buffer points just behind the last line) and does not require that a
/// parse failed. Columns are counted in bytes.
pub fn get_context(source: &str, cursor: usize) -> String {
    let bytes = source.as_bytes();
    let cursor = cursor.min(bytes.len());

    let mut line_start = cursor;
    while line_start > 0 && bytes[line_start - 1] != b'\n' {
        line_start -= 1;
    }

    let mut line_end = line_start;
    while line_end < bytes.len() && bytes[line_end] != b'\n' {
        line_end += 1;
    }

    format!(
        "{}\n{}^",
        &source[line_start..line_end],
        " ".repeat(cursor - line_start)
    )
}
