// SPDX-License-Identifier: Apache-2.0

//! A small DOM-style JSON parser.
//!
//! [`parse`] turns a text buffer into an owned [`JsonValue`] tree, or a
//! [`ParseError`] carrying the byte offset where parsing stopped. The tree
//! keeps object members sorted by key, supports total `doc["key"][index]`
//! lookups that resolve misses to an invalid sentinel instead of failing,
//! and can be re-rendered as text with [`JsonValue::dump`].
//!
//! ```
//! use minijson::{parse, Kind};
//!
//! let doc = parse(r#"{"a": 12, "arr": [1, 2, 3]}"#).unwrap();
//! assert_eq!(doc["a"].as_number(), Some(12.0));
//! assert_eq!(doc["arr"].size(), 3);
//! assert_eq!(doc["missing"].kind(), Kind::Invalid);
//! ```
//!
//! On failure, [`get_context`] renders the offending line with a caret:
//!
//! ```
//! use minijson::{get_context, parse};
//!
//! let source = "[1, 2";
//! let err = parse(source).unwrap_err();
//! println!("{}", get_context(source, err.cursor));
//! ```

mod context;
mod cursor;
mod escape;
mod parse_error;
mod parser;
mod value;

pub use context::get_context;
pub use parse_error::{ErrorKind, ParseError};
pub use parser::parse;
pub use value::{JsonValue, Kind};
