//! Strict parser for Semantic Version numbers with precise diagnostics.
//!
//! ## Motivation
//!
//! This crate parses version strings of the form `MAJOR[.MINOR[.PATCH]][-PRE-RELEASE][+BUILD]`.
//! Minor and patch default to 0, and a leading non-numeric prefix like `v` or `release-` is skipped.
//! Everything else must follow the grammar, and every rejected input is reported with
//! the component that failed and the exact location of the problem.
//!
//! ## Examples
//!
//! ```rust
//! use semver_scan::Version;
//!
//! let version = semver_scan::parse("v1.2.3-alpha.1+build.5").unwrap();
//! assert_eq!(version.major, 1);
//! assert_eq!(version.pre, ["alpha", "1"]);
//! assert_eq!(version.build, ["build", "5"]);
//!
//! assert_eq!(semver_scan::parse("1"), Ok(Version::new(1, 0, 0)));
//! ```
//!
//! Any type that implements [`VersionBuilder`] can be the target of the parser,
//! including [`semver::Version`](https://docs.rs/semver) with the `semver` feature.
//!
//! ```rust
//! let version = semver_scan::parse_into::<semver::Version>("1.2").unwrap();
//! assert_eq!(version, semver::Version::new(1, 2, 0));
//! ```
//!
//! Errors know where they happened:
//!
//! ```rust
//! let error = semver_scan::parse("1.2.3-beta_1").unwrap_err();
//! assert_eq!(
//!     error.diagnostic(),
//!     concat!(
//!         "Malformed version string `1.2.3-beta_1`: unexpected character `_`\n",
//!         "|    1.2.3-beta_1\n",
//!         "|    ~~~~~~~~~~^\n",
//!     )
//! );
//! ```
//!
//! ## Features
//!
//! - `semver` (default): [`VersionBuilder`] for `semver::Version` and a conversion from [`Version`].
//! - `version` (default): the owned [`Version`] type, [`parse`] and the [`lookup`] module.
//! - `serde`: serialize and deserialize [`Version`] as its string representation.
//! - `logging`: emit `tracing` events for parsed and rejected versions.

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    no_mangle_generic_items,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused_allocation,
    unused_comparisons,
    unused_extern_crates,
    unused_import_braces,
    unused_parens,
    unused_qualifications,
    unused_results,
    unused,
    while_true
)]

pub use semver_scan_parser::{Component, ComponentError, Error, Malformed, VersionBuilder};
#[cfg(feature = "version")]
pub use semver_scan_version::{Identifiers, Number, Version};

#[cfg(feature = "version")]
mod logging;
#[cfg(feature = "version")]
pub mod lookup;

/// Parse a string slice into a [`Version`].
///
/// ## Examples
///
/// ```rust
/// use semver_scan::{Component, Error, Version};
///
/// assert_eq!(semver_scan::parse("1.0.0"), Ok(Version::new(1, 0, 0)));
///
/// let error = semver_scan::parse("1.2.3-a..b").unwrap_err();
/// assert!(matches!(error, Error::ComponentParseError { component: Component::PreRelease, .. }));
/// ```
#[cfg(feature = "version")]
pub fn parse(input: &str) -> Result<Version, Error> {
    Version::parse(input)
}

/// Parse a string slice into any type that implements [`VersionBuilder`].
///
/// ## Examples
///
/// ```rust
/// use semver_scan::VersionBuilder;
///
/// /// Counts the pre-release identifiers and ignores everything else
/// #[derive(Debug, Default)]
/// struct PreReleaseCount(usize);
///
/// impl VersionBuilder<'_> for PreReleaseCount {
///     type Out = usize;
///
///     fn new() -> Self {
///         Self::default()
///     }
///
///     fn add_pre_release(&mut self, _pre_release: &str) {
///         self.0 += 1;
///     }
///
///     fn build(self) -> Self::Out {
///         self.0
///     }
/// }
///
/// assert_eq!(semver_scan::parse_into::<PreReleaseCount>("1.2.3-rc.1.x"), Ok(3));
/// assert_eq!(semver_scan::parse_into::<PreReleaseCount>("1.2.3+rc.1"), Ok(0));
/// assert!(semver_scan::parse_into::<PreReleaseCount>("1.2.3-").is_err());
/// ```
pub fn parse_into<'input, V>(input: &'input str) -> Result<V::Out, Error>
where
    V: VersionBuilder<'input>,
{
    semver_scan_parser::parse::<V>(input)
}
