//! # Wikilink Resolution
//!
//! A [`Resolver`] turns the target and fragment of a wikilink into the
//! address placed in the output link. It is the only customization point of
//! the parser.
//!
//! The result is three-way:
//!
//! | Outcome | Meaning |
//! |---------|---------|
//! | `Ok(Resolution::Destination(d))` | link to `d`, verbatim |
//! | `Ok(Resolution::Absent)` | no link; the label is emitted as plain text |
//! | `Err(ResolveError)` | the whole conversion stops |
//!
//! Resolvers are expected to be pure and fast. Anything stateful (a page
//! index, a cache) is the resolver's own business, including any locking
//! needed to share it between threads.

use std::{error::Error, sync::Arc};

use serde::Serialize;

use crate::parsing::inline::kinds::WikiLink;

/// Extension appended by [`DefaultResolver`] to targets that have none.
pub const DEFAULT_EXTENSION: &str = ".html";

/// Successful outcome of resolving a wikilink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Resolution {
    /// Address for the link or embed.
    Destination(String),
    /// Deliberately no link: render the label as text.
    Absent,
}

impl Resolution {
    pub fn destination(&self) -> Option<&str> {
        match self {
            Resolution::Destination(d) => Some(d.as_str()),
            Resolution::Absent => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("No page found for wikilink target {target:?}")]
    NotFound { target: String },
    #[error("Failed to resolve wikilink target {target:?}: {reason}")]
    Lookup { target: String, reason: String },
    #[error("Resolver failed: {0}")]
    Other(#[from] Box<dyn Error + Send + Sync>),
}

impl ResolveError {
    /// Wraps an arbitrary error raised inside a custom resolver.
    pub fn other(err: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        ResolveError::Other(err.into())
    }
}

/// Maps a wikilink's target and fragment to a destination.
///
/// `target` is empty for same-page links like `[[#heading]]`; `fragment` is
/// empty when the wikilink has no `#`.
pub trait Resolver {
    fn resolve_wikilink(&self, target: &str, fragment: &str) -> Result<Resolution, ResolveError>;
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn resolve_wikilink(&self, target: &str, fragment: &str) -> Result<Resolution, ResolveError> {
        (**self).resolve_wikilink(target, fragment)
    }
}

impl<R: Resolver + ?Sized> Resolver for Box<R> {
    fn resolve_wikilink(&self, target: &str, fragment: &str) -> Result<Resolution, ResolveError> {
        (**self).resolve_wikilink(target, fragment)
    }
}

impl<R: Resolver + ?Sized> Resolver for Arc<R> {
    fn resolve_wikilink(&self, target: &str, fragment: &str) -> Result<Resolution, ResolveError> {
        (**self).resolve_wikilink(target, fragment)
    }
}

/// A resolver backed by a closure. Build one with [`from_fn`].
#[derive(Clone)]
pub struct FnResolver<F>(F);

/// Creates a resolver from a closure.
///
/// ```
/// use wikilink_engine::resolver::{from_fn, DefaultResolver, Resolution, Resolver};
///
/// let fallback = DefaultResolver::new();
/// let resolver = from_fn(move |target: &str, fragment: &str| {
///     if target == "Does Not Exist" {
///         return Ok(Resolution::Absent);
///     }
///     fallback.resolve_wikilink(target, fragment)
/// });
///
/// assert_eq!(resolver.resolve_wikilink("Does Not Exist", "").unwrap(), Resolution::Absent);
/// ```
pub fn from_fn<F>(f: F) -> FnResolver<F>
where
    F: Fn(&str, &str) -> Result<Resolution, ResolveError>,
{
    FnResolver(f)
}

impl<F> Resolver for FnResolver<F>
where
    F: Fn(&str, &str) -> Result<Resolution, ResolveError>,
{
    fn resolve_wikilink(&self, target: &str, fragment: &str) -> Result<Resolution, ResolveError> {
        (self.0)(target, fragment)
    }
}

/// Resolves wikilinks to sibling files.
///
/// Appends an extension (`.html` unless configured otherwise) when the last
/// path component of the target has no `.`, then appends `#fragment`:
///
/// ```text
/// [[Foo]]      => "Foo.html"
/// [[foo/Bar]]  => "foo/Bar.html"
/// [[foo.pdf]]  => "foo.pdf"
/// [[Foo#Baz]]  => "Foo.html#Baz"
/// [[#Baz]]     => "#Baz"
/// ```
///
/// Never fails. Reports [`Resolution::Absent`] only when both target and
/// fragment are empty (`[[#]]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultResolver {
    extension: String,
}

impl DefaultResolver {
    pub fn new() -> Self {
        Self::with_extension(DEFAULT_EXTENSION)
    }

    pub fn with_extension(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}

impl Default for DefaultResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver for DefaultResolver {
    fn resolve_wikilink(&self, target: &str, fragment: &str) -> Result<Resolution, ResolveError> {
        let mut dest =
            String::with_capacity(target.len() + self.extension.len() + 1 + fragment.len());

        if !target.is_empty() {
            dest.push_str(target);
            if !has_extension(target) {
                dest.push_str(&self.extension);
            }
        }
        if !fragment.is_empty() {
            dest.push(WikiLink::FRAGMENT);
            dest.push_str(fragment);
        }

        if dest.is_empty() {
            return Ok(Resolution::Absent);
        }
        Ok(Resolution::Destination(dest))
    }
}

/// True if the last `/`-separated component contains a `.` anywhere.
fn has_extension(target: &str) -> bool {
    target
        .rsplit('/')
        .next()
        .is_some_and(|name| name.contains('.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::plain("Foo", "", "Foo.html")]
    #[case::spaces("Foo bar", "", "Foo bar.html")]
    #[case::nested("foo/Bar", "", "foo/Bar.html")]
    #[case::pdf("foo.pdf", "", "foo.pdf")]
    #[case::png("foo.png", "", "foo.png")]
    #[case::dotted_dir_only("v1.2/notes", "", "v1.2/notes.html")]
    #[case::dotfile(".hidden", "", ".hidden")]
    #[case::fragment("Foo", "Bar", "Foo.html#Bar")]
    #[case::fragment_with_extension("doc.pdf", "page=2", "doc.pdf#page=2")]
    #[case::fragment_only("", "Bar", "#Bar")]
    fn default_destinations(#[case] target: &str, #[case] fragment: &str, #[case] want: &str) {
        let got = DefaultResolver::new()
            .resolve_wikilink(target, fragment)
            .unwrap();
        assert_eq!(got, Resolution::Destination(want.to_owned()));
    }

    #[test]
    fn fragment_suffix_matches_fragmentless_resolution() {
        let r = DefaultResolver::new();
        for target in ["Foo", "a/b", "x.png"] {
            let base = r.resolve_wikilink(target, "").unwrap();
            let with = r.resolve_wikilink(target, "sec").unwrap();
            assert_eq!(
                with.destination().unwrap(),
                format!("{}#sec", base.destination().unwrap())
            );
        }
    }

    #[test]
    fn empty_target_and_fragment_is_absent() {
        let got = DefaultResolver::new().resolve_wikilink("", "").unwrap();
        assert_eq!(got, Resolution::Absent);
    }

    #[test]
    fn custom_extension() {
        let r = DefaultResolver::with_extension(".md");
        assert_eq!(r.extension(), ".md");
        assert_eq!(
            r.resolve_wikilink("Foo", "").unwrap().destination(),
            Some("Foo.md")
        );
    }

    #[test]
    fn shared_resolvers_delegate() {
        let shared: Arc<dyn Resolver + Send + Sync> = Arc::new(DefaultResolver::new());
        let boxed: Box<dyn Resolver> = Box::new(DefaultResolver::new());
        assert_eq!(
            shared.resolve_wikilink("a", "").unwrap(),
            boxed.resolve_wikilink("a", "").unwrap()
        );
        assert_eq!(
            (&shared).resolve_wikilink("a", "b").unwrap().destination(),
            Some("a.html#b")
        );
    }

    #[test]
    fn error_messages() {
        let err = ResolveError::NotFound {
            target: "Foo".into(),
        };
        assert_eq!(err.to_string(), "No page found for wikilink target \"Foo\"");

        let err = ResolveError::other("backend down");
        assert_eq!(err.to_string(), "Resolver failed: backend down");
    }
}
