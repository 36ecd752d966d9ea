//! Semantic version value.
//!
//! Companion version struct for the semver_scan_parser parser.
//! It keeps the pre-release and build identifiers as owned strings, exactly as they were written,
//! and compares structurally. There is no notion of version precedence.
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

use std::fmt::{self, Write};

mod metadata;
pub use metadata::Identifiers;

/// Represents a semantic version number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Version {
    /// The major version.
    pub major: u64,
    /// The minor version.
    pub minor: u64,
    /// The patch version.
    pub patch: u64,
    /// The pre-release identifiers.
    pub pre: Identifiers,
    /// The build identifiers.
    pub build: Identifiers,
}

impl Version {
    /// Constructs a new, empty version
    ///
    /// ## Examples
    ///
    /// ```
    /// # use semver_scan_version::Version;
    /// let version = Version::empty();
    /// assert_eq!(version.to_string(), "0.0.0")
    /// ```
    pub const fn empty() -> Self {
        Version::new(0, 0, 0)
    }

    /// Constructs a new version out of the three regular version components
    ///
    /// ## Examples
    ///
    /// ```
    /// # use semver_scan_version::Version;
    /// let version = Version::new(1, 2, 3);
    /// assert_eq!(version.to_string(), "1.2.3")
    /// ```
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre: Identifiers::empty(),
            build: Identifiers::empty(),
        }
    }

    /// Parse a string slice into a Version.
    ///
    /// For the accepted grammar, see [`semver_scan_parser::parse`].
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use semver_scan_version::Version;
    ///
    /// let version = Version::parse("v1.2.3-alpha.1+build.5").unwrap();
    /// assert_eq!(version.pre, ["alpha", "1"]);
    /// assert_eq!(version.build, ["build", "5"]);
    ///
    /// assert!(Version::parse("1.2.3.4").is_err());
    /// ```
    #[cfg(feature = "parser")]
    pub fn parse(input: &str) -> Result<Self, semver_scan_parser::Error> {
        semver_scan_parser::parse::<Self>(input)
    }

    /// Parse the decimal representation of a primitive number into a Version.
    ///
    /// This goes through the same parser as [`Version::parse`], so it accepts exactly
    /// what `Version::parse(&number.to_string())` accepts.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use semver_scan_version::Version;
    ///
    /// assert_eq!(Version::from_number(12), Version::parse("12"));
    /// assert_eq!(Version::from_number(1.5).unwrap(), Version::new(1, 5, 0));
    /// assert!(Version::from_number(-1).is_err());
    /// ```
    #[cfg(feature = "parser")]
    pub fn from_number<N: Number>(number: N) -> Result<Self, semver_scan_parser::Error> {
        Self::parse(&number.to_string())
    }

    /// Returns true if this version has pre-release identifiers, i.e. it represents a pre-release.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use semver_scan_version::Version;
    ///
    /// assert!(!Version::parse("1").unwrap().is_pre_release());
    /// assert!(Version::parse("1-pre").unwrap().is_pre_release());
    /// assert!(!Version::parse("1+build").unwrap().is_pre_release());
    /// ```
    pub fn is_pre_release(&self) -> bool {
        self.pre.is_defined()
    }

    /// Returns true if this version has build identifiers.
    pub fn has_build_metadata(&self) -> bool {
        self.build.is_defined()
    }
}

/// Primitive numbers that [`Version::from_number`] accepts.
///
/// This trait is sealed and cannot be implemented outside of this crate.
pub trait Number: fmt::Display + private::Sealed {}

mod private {
    pub trait Sealed {}
}

macro_rules! impl_number {
    ($($ty:ty),+) => {
        $(
            impl private::Sealed for $ty {}
            impl Number for $ty {}
        )+
    };
}

impl_number!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl From<u64> for Version {
    fn from(x: u64) -> Self {
        Version::new(x, 0, 0)
    }
}

impl From<(u64, u64)> for Version {
    fn from((x, y): (u64, u64)) -> Self {
        Version::new(x, y, 0)
    }
}

impl From<(u64, u64, u64)> for Version {
    fn from((x, y, z): (u64, u64, u64)) -> Self {
        Version::new(x, y, z)
    }
}

impl From<[u64; 1]> for Version {
    fn from([x]: [u64; 1]) -> Self {
        Version::new(x, 0, 0)
    }
}

impl From<[u64; 2]> for Version {
    fn from([x, y]: [u64; 2]) -> Self {
        Version::new(x, y, 0)
    }
}

impl From<[u64; 3]> for Version {
    fn from([x, y, z]: [u64; 3]) -> Self {
        Version::new(x, y, z)
    }
}

#[cfg(feature = "parser")]
impl std::str::FromStr for Version {
    type Err = semver_scan_parser::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "parser")]
impl std::convert::TryFrom<&str> for Version {
    type Error = semver_scan_parser::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = String::with_capacity(16);
        write!(result, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.pre.is_defined() {
            write!(result, "-{}", self.pre)?;
        }
        if self.build.is_defined() {
            write!(result, "+{}", self.build)?;
        }

        f.pad(result.as_ref())
    }
}

#[cfg(feature = "parser")]
impl<'input> semver_scan_parser::VersionBuilder<'input> for Version {
    type Out = Self;

    fn new() -> Self {
        Version::default()
    }

    fn set_major(&mut self, major: u64) {
        self.major = major;
    }

    fn set_minor(&mut self, minor: u64) {
        self.minor = minor;
    }

    fn set_patch(&mut self, patch: u64) {
        self.patch = patch;
    }

    fn add_pre_release(&mut self, pre_release: &'input str) {
        self.pre.push(pre_release)
    }

    fn add_build(&mut self, build: &'input str) {
        self.build.push(build)
    }

    fn build(self) -> Self::Out {
        self
    }
}

#[cfg(all(feature = "serde", feature = "parser"))]
use serde::de::{self, Deserialize, Deserializer, Visitor};
#[cfg(feature = "serde")]
use serde::ser::{Serialize, Serializer};
#[cfg(feature = "serde")]
impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(all(feature = "serde", feature = "parser"))]
impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VersionVisitor;

        impl<'de> Visitor<'de> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a version string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Version::parse(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}

/// Numeric pre-release identifiers with leading zeroes, like the `01` in `1.0.0-rc.01`,
/// are stripped of those zeroes, as [`semver::Prerelease`] would reject them.
///
/// The fields of a [`Version`] can hold any string, so the identifiers are checked again by `semver`.
///
/// ```rust
/// # use semver_scan_version::Version;
/// use std::convert::TryFrom;
///
/// let version = Version::parse("1.0.0-rc.01").unwrap();
/// assert_eq!(semver::Version::try_from(version).unwrap().to_string(), "1.0.0-rc.1");
///
/// let mut version = Version::new(1, 0, 0);
/// version.pre = vec!["not valid".to_string()].into();
/// assert!(semver::Version::try_from(version).is_err());
/// ```
#[cfg(feature = "semver")]
impl std::convert::TryFrom<Version> for semver::Version {
    type Error = semver::Error;

    fn try_from(v: Version) -> Result<Self, Self::Error> {
        let mut normalized = format!("{}.{}.{}", v.major, v.minor, v.patch);
        if v.pre.is_defined() {
            normalized.push('-');
            let pre = semver_scan_version_builder::normalize_pre_release(v.pre.iter());
            normalized.push_str(&pre);
        }
        if v.build.is_defined() {
            normalized.push('+');
            normalized.push_str(&v.build.to_string());
        }
        semver::Version::parse(&normalized)
    }
}
