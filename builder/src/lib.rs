//! VersionBuilder trait for the semver_scan parser.
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

/// Trait to abstract over version building.
///
/// The methods to implement in this trait represent the components of a semantic version,
/// but allow for parsing into a custom type.
///
/// The trait is generic over the lifetime of the input string, so that one could
/// parse into a version without having to allocate.
///
/// The parser only starts calling into the builder after the whole input has been validated,
/// so a builder never observes a version string that is later rejected.
///
/// Most methods have a default implementation that does nothing and ignores the input.
/// This can be used to implement some form of validation without needing to keep the result.
pub trait VersionBuilder<'input> {
    /// The return type of the final version.
    type Out;

    /// Construct a new version builder.
    ///
    /// The function must not fail and the version (if returned from [`VersionBuilder::build`] at this point)
    /// should represent something akin to "0.0.0"
    fn new() -> Self;

    /// Set the major version component.
    #[allow(unused)]
    fn set_major(&mut self, major: u64) {}

    /// Set the minor version component.
    ///
    /// A minor component that is missing from the input is reported as `0`.
    #[allow(unused)]
    fn set_minor(&mut self, minor: u64) {}

    /// Set the patch version component.
    ///
    /// A patch component that is missing from the input is reported as `0`.
    #[allow(unused)]
    fn set_patch(&mut self, patch: u64) {}

    /// Add a single pre-release identifier.
    ///
    /// The identifier is never empty and consists only of ASCII alphanumerics and `-`.
    /// Numeric identifiers are passed verbatim, including any leading zeroes.
    ///
    /// Unless [`VersionBuilder::set_pre_release`] is overridden, this method is called once
    /// per dot-separated identifier, in input order.
    #[allow(unused)]
    fn add_pre_release(&mut self, pre_release: &'input str) {}

    /// Add a single build identifier.
    ///
    /// The identifier is never empty and consists only of ASCII alphanumerics and `-`.
    ///
    /// Unless [`VersionBuilder::set_build`] is overridden, this method is called once
    /// per dot-separated identifier, in input order.
    #[allow(unused)]
    fn add_build(&mut self, build: &'input str) {}

    /// Set all pre-release identifiers at once.
    ///
    /// The parser calls this once with the whole dot-separated run, e.g. `alpha.1` for `1.2.3-alpha.1+b`.
    /// The default splits the run on `.` and calls [`VersionBuilder::add_pre_release`] for every identifier.
    fn set_pre_release(&mut self, pre_release: &'input str) {
        for identifier in pre_release.split('.') {
            self.add_pre_release(identifier);
        }
    }

    /// Set all build identifiers at once.
    ///
    /// The parser calls this once with the whole dot-separated run.
    /// The default splits the run on `.` and calls [`VersionBuilder::add_build`] for every identifier.
    fn set_build(&mut self, build: &'input str) {
        for identifier in build.split('.') {
            self.add_build(identifier);
        }
    }

    /// Construct the final version.
    fn build(self) -> Self::Out;
}

#[cfg(feature = "semver")]
impl<'input> VersionBuilder<'input> for semver::Version {
    type Out = Self;

    fn new() -> Self {
        semver::Version::new(0, 0, 0)
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

    /// Appends one identifier. Identifiers that `semver` rejects are skipped.
    fn add_pre_release(&mut self, pre_release: &'input str) {
        let pre_release = remove_leading_zeroes(pre_release);
        let pre = if self.pre.is_empty() {
            semver::Prerelease::new(&pre_release)
        } else {
            semver::Prerelease::new(&format!("{}.{}", self.pre, pre_release))
        };
        if let Ok(pre) = pre {
            self.pre = pre;
        }
    }

    /// Appends one identifier. Identifiers that `semver` rejects are skipped.
    fn add_build(&mut self, build: &'input str) {
        let build = if self.build.is_empty() {
            semver::BuildMetadata::new(build)
        } else {
            semver::BuildMetadata::new(&format!("{}.{}", self.build, build))
        };
        if let Ok(build) = build {
            self.build = build;
        }
    }

    // runs from the parser are valid once leading zeroes are gone
    fn set_pre_release(&mut self, pre_release: &'input str) {
        let pre_release = normalize_pre_release(pre_release.split('.'));
        if let Ok(pre) = semver::Prerelease::new(&pre_release) {
            self.pre = pre;
        }
    }

    fn set_build(&mut self, build: &'input str) {
        if let Ok(build) = semver::BuildMetadata::new(build) {
            self.build = build;
        }
    }

    fn build(self) -> Self::Out {
        self
    }
}

/// Strips leading zeroes from an all-numeric identifier.
///
/// [`semver::Prerelease`] rejects numeric identifiers like `01`, which are accepted by the parser.
/// Identifiers that contain any non-digit are returned unchanged.
#[cfg(feature = "semver")]
pub fn remove_leading_zeroes(identifier: &str) -> std::borrow::Cow<'_, str> {
    let is_numeric = !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit());
    if !is_numeric || !identifier.starts_with('0') || identifier.len() == 1 {
        return identifier.into();
    }
    match identifier.trim_start_matches('0') {
        "" => "0".into(),
        trimmed => trimmed.into(),
    }
}

/// Joins pre-release identifiers with `.`, stripping leading zeroes from numeric ones.
///
/// ```rust
/// use semver_scan_version_builder::normalize_pre_release;
///
/// assert_eq!(normalize_pre_release(vec!["rc", "007", "0a"]), "rc.7.0a");
/// ```
#[cfg(feature = "semver")]
pub fn normalize_pre_release<'a, I>(identifiers: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut normalized = String::new();
    for (i, identifier) in identifiers.into_iter().enumerate() {
        if i > 0 {
            normalized.push('.');
        }
        normalized.push_str(&remove_leading_zeroes(identifier));
    }
    normalized
}
