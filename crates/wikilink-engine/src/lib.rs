//! # wikilink-engine
//!
//! Recognizes wikilinks inside markdown lines and turns them into link,
//! embed, or plain-text nodes.
//!
//! ```
//! use wikilink_engine::{InlineNode, parse_inline};
//!
//! let nodes = parse_inline(0, "[[foo]] bar").unwrap();
//! match &nodes[0] {
//!     InlineNode::Link { link, .. } => assert_eq!(link.destination, "foo.html"),
//!     other => panic!("expected a link, got {other:?}"),
//! }
//! ```
//!
//! Supported forms, each also available `!`-prefixed as an embed:
//!
//! ```text
//! [[target]]  [[target|label]]  [[target#fragment]]
//! [[target#fragment|label]]  [[#fragment]]
//! ```
//!
//! Destinations come from a [`Resolver`]; see [`resolver`] for the contract
//! and [`DefaultResolver`] for the built-in file-extension behaviour.

pub mod io;
pub mod parsing;
pub mod resolver;

// Re-export key types for easier usage
pub use io::{IoError, read_document};
pub use parsing::inline::{InlineNode, InlineParser, Link, parse_inline};
pub use parsing::{LineNode, ParseError, ParsedDoc, parse_document};
pub use resolver::{DefaultResolver, Resolution, ResolveError, Resolver, from_fn};
