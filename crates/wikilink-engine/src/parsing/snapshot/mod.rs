//! # Snapshot Testing Support
//!
//! Utilities for checking parser output via snapshot assertions and
//! invariant checks.
//!
//! - **`outline`**: renders a [`ParsedDoc`] as a stable indented outline,
//!   used with `insta` file snapshots and printed by the CLI
//! - **`invariants`**: runtime checks for parser correctness (spans in bounds,
//!   inline nodes contained in their line, links carrying a single non-empty
//!   label)
//!
//! [`ParsedDoc`]: crate::parsing::ParsedDoc

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
