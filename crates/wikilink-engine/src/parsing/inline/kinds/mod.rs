//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other parsing
//! - **`WikiLink`**: `[[`, `![[`, `]]`, `|`, `#` and the scanner that
//!   decomposes a wikilink into target, fragment and label spans
//!
//! All delimiter constants live here, not scattered in parser code.

pub mod code_span;
pub mod wikilink;

pub use code_span::CodeSpan;
pub use wikilink::{Occurrence, WikiLink};
