//! # Inline Parsing
//!
//! Cursor-based inline parsing over a single line of content.
//!
//! ## Architecture
//!
//! The host pass hands each line to [`InlineParser::parse`], which walks a
//! [`Cursor`] forward one byte at a time and, at every position, tries the
//! inline constructs in precedence order:
//!
//! 1. Code spans: a raw zone, nothing inside them is parsed
//! 2. Wikilinks: `[[...]]` and `![[...]]`, resolved through a [`Resolver`]
//!
//! Anything not claimed by a construct is emitted as `InlineNode::Text`.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, CodeSpan, Link, Embed) and `Link`
//! - **`kinds`**: delimiter ownership and the wikilink scanner (`WikiLink::scan`)
//! - **`cursor`**: `Cursor` for byte-wise parsing with absolute positions
//! - **`parser`**: `InlineParser` with the resolve-or-plain-text decision
//!
//! ## Two Ways To Not Produce A Link
//!
//! A syntax non-match (`[[]]`, `[[x|]]`, a missing `]]`) is silent: the parser
//! moves on as if nothing was there. A resolver *error* stops the parse and is
//! returned to the caller. A resolver returning [`Resolution::Absent`] is
//! neither: the wikilink is consumed and replaced by its label as plain text.
//!
//! [`Resolver`]: crate::resolver::Resolver
//! [`Resolution::Absent`]: crate::resolver::Resolution::Absent

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use cursor::Cursor;
pub use kinds::Occurrence;
pub use parser::{InlineParser, parse_inline};
pub use types::{InlineNode, Link};
