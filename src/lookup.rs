//! Looking up the version an application declares for itself.
//!
//! A declared version is a convenience, not a requirement, so everything in here
//! treats a missing or unparseable version as absent instead of failing.
//!
//! ```rust
//! use semver_scan::lookup::{app_version, Declared, EnvVar};
//! use semver_scan::Version;
//!
//! assert_eq!(app_version(&Declared("2.1.0")), Some(Version::new(2, 1, 0)));
//! assert_eq!(app_version(&Declared("two")), None);
//! assert_eq!(app_version(&EnvVar("SEMVER_SCAN_DOC_UNSET_VERSION")), None);
//! ```

use std::{borrow::Cow, env};

use crate::{logging::debug, Version};

/// A place where an application declares its own version.
pub trait VersionSource {
    /// Returns the declared version string, or `None` if nothing is declared.
    fn declared_version(&self) -> Option<Cow<'_, str>>;
}

impl<S: VersionSource + ?Sized> VersionSource for &S {
    fn declared_version(&self) -> Option<Cow<'_, str>> {
        (**self).declared_version()
    }
}

/// A version string that is known at compile time, usually `env!("CARGO_PKG_VERSION")`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Declared(pub &'static str);

impl VersionSource for Declared {
    fn declared_version(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.0))
    }
}

/// A version string that is read from an environment variable every time it is looked up.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EnvVar<'a>(pub &'a str);

impl VersionSource for EnvVar<'_> {
    #[cfg_attr(not(feature = "logging"), allow(unused_variables))]
    fn declared_version(&self) -> Option<Cow<'_, str>> {
        match env::var(self.0) {
            Ok(version) => Some(Cow::Owned(version)),
            Err(error) => {
                debug!(variable = self.0, %error, "version variable is not available");
                None
            }
        }
    }
}

/// Returns the version declared by `source`, or `None` if there is none or it cannot be parsed.
///
/// Parse errors are logged at debug level and then discarded.
#[cfg_attr(not(feature = "logging"), allow(unused_variables))]
pub fn app_version<S: VersionSource + ?Sized>(source: &S) -> Option<Version> {
    let declared = match source.declared_version() {
        Some(declared) => declared,
        None => {
            debug!("no version declared");
            return None;
        }
    };
    match Version::parse(&declared) {
        Ok(version) => Some(version),
        Err(error) => {
            debug!(%error, "ignoring unparseable declared version");
            None
        }
    }
}

/// Returns the version of the calling crate as declared in its `Cargo.toml`.
///
/// Expands to [`app_version`] over `env!("CARGO_PKG_VERSION")`, evaluated in the crate that invokes it.
///
/// ```rust
/// let version = semver_scan::package_version!().unwrap();
/// assert_eq!(version.to_string(), env!("CARGO_PKG_VERSION"));
/// ```
#[macro_export]
macro_rules! package_version {
    () => {
        $crate::lookup::app_version(&$crate::lookup::Declared(env!("CARGO_PKG_VERSION")))
    };
}
