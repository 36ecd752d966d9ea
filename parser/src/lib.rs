//! Single-pass parser for Semantic Version numbers.
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

mod error;
mod logging;

pub use error::{Component, ComponentError, Error, Malformed};
pub use semver_scan_version_builder::VersionBuilder;

use error::{ErrorSpan, Span};
use logging::{debug, trace};

/// Parse a string slice into a Version.
///
/// The grammar is `MAJOR[.MINOR[.PATCH]][-PRERELEASE][+BUILD]`, with a few allowances:
///
/// - Minor and patch are optional and default to 0 (e.g. "1" parses as "1.0.0")
/// - Any leading run of non-digits is skipped (e.g. "v1.2.3" parses as "1.2.3"),
///   unless it is a bare `-`
/// - Numbers may have leading zeroes (e.g. "01.02" parses as "1.2.0")
///
/// Everything else is rejected: characters outside of `[0-9A-Za-z.+-]`,
/// empty pre-release or build identifiers, numbers that overflow an u64,
/// and any input that is left over once the build identifiers have been parsed.
///
/// ## Examples
///
/// ```rust
/// use semver::Version;
///
/// let version = semver_scan_parser::parse::<Version>("1.2.3");
/// assert_eq!(version, Ok(Version::new(1, 2, 3)));
///
/// assert_eq!(
///     semver_scan_parser::parse::<Version>("1").unwrap(),
///     Version::parse("1.0.0").unwrap()
/// );
/// assert!(Version::parse("1").is_err());
///
/// assert_eq!(
///     semver_scan_parser::parse::<Version>("v1.2.3-alpha.1+build.5").unwrap(),
///     Version::parse("1.2.3-alpha.1+build.5").unwrap()
/// );
/// assert!(Version::parse("v1.2.3").is_err());
///
/// assert!(semver_scan_parser::parse::<Version>("1.2.3.4").is_err());
/// assert!(semver_scan_parser::parse::<Version>("-1.2.3").is_err());
/// ```
pub fn parse<'input, V>(input: &'input str) -> Result<V::Out, Error>
where
    V: VersionBuilder<'input>,
{
    match scan(input) {
        Ok(parts) => {
            trace!(input, "parsed version");
            Ok(parts.build::<V>())
        }
        Err(error) => {
            let error = error.with_input(input);
            debug!(%error, "rejected version");
            Err(error)
        }
    }
}

/// The validated components of a version, pointing into the input.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Parts<'input> {
    major: u64,
    minor: u64,
    patch: u64,
    pre: Option<&'input str>,
    build: Option<&'input str>,
}

impl<'input> Parts<'input> {
    fn build<V: VersionBuilder<'input>>(self) -> V::Out {
        let mut version = V::new();
        version.set_major(self.major);
        version.set_minor(self.minor);
        version.set_patch(self.patch);
        if let Some(pre) = self.pre {
            version.set_pre_release(pre);
        }
        if let Some(build) = self.build {
            version.set_build(build);
        }
        version.build()
    }
}

fn scan(input: &str) -> Result<Parts<'_>, ErrorSpan> {
    validate_characters(input)?;
    let core_start = skip_prefix(input)?;
    if core_start == input.len() {
        return Err(ErrorSpan::digits_not_found(
            Component::Major,
            Span::new(0, input.len()),
        ));
    }

    let core_end = input[core_start..]
        .find(|c: char| c == '-' || c == '+')
        .map_or(input.len(), |end| core_start + end);

    let mut core = Cursor::new(input, core_start, core_end);
    let major = core.number(Component::Major)?;
    let minor = core.optional_number(Component::Minor)?;
    let patch = core.optional_number(Component::Patch)?;

    // the remainder starts where the core scan stopped, so that unvisited core input,
    // like the `.4` in `1.2.3.4`, is reported as trailing input
    let mut rest = Cursor::new(input, core.pos, input.len());
    let pre = rest.identifiers(b'-', Component::PreRelease)?;
    let build = rest.identifiers(b'+', Component::Build)?;
    rest.finish()?;

    Ok(Parts {
        major,
        minor,
        patch,
        pre,
        build,
    })
}

fn validate_characters(input: &str) -> Result<(), ErrorSpan> {
    if input.is_empty() {
        return Err(ErrorSpan::empty_input());
    }
    match input.char_indices().find(|&(_, c)| !is_version_char(c)) {
        Some((pos, c)) => Err(ErrorSpan::malformed(
            Malformed::UnexpectedCharacter(c),
            Span::new(pos, pos + c.len_utf8()),
        )),
        None => Ok(()),
    }
}

/// Returns the position of the first digit.
fn skip_prefix(input: &str) -> Result<usize, ErrorSpan> {
    let start = input
        .bytes()
        .position(|b| b.is_ascii_digit())
        .unwrap_or_else(|| input.len());
    if &input[..start] == "-" {
        return Err(ErrorSpan::malformed(
            Malformed::DelimiterPrefix,
            Span::new(0, 1),
        ));
    }
    Ok(start)
}

fn is_version_char(c: char) -> bool {
    matches!(c, '0'..='9' | 'A'..='Z' | 'a'..='z' | '.' | '-' | '+')
}

fn is_identifier_byte(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z' | b'.' | b'-')
}

/// Forward-only scanner over `input[pos..end]`.
///
/// The input has been validated to be ASCII before any cursor is created,
/// so every byte position is a char boundary.
#[derive(Debug, Copy, Clone)]
struct Cursor<'input> {
    input: &'input str,
    pos: usize,
    end: usize,
}

impl<'input> Cursor<'input> {
    fn new(input: &'input str, pos: usize, end: usize) -> Self {
        Self { input, pos, end }
    }

    fn is_exhausted(&self) -> bool {
        self.pos >= self.end
    }

    fn remaining(&self) -> &'input str {
        &self.input[self.pos..self.end]
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.remaining().as_bytes().first() == Some(&byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> Span {
        let start = self.pos;
        self.pos += self.remaining().bytes().take_while(|&b| pred(b)).count();
        Span::new(start, self.pos)
    }

    fn number(&mut self, component: Component) -> Result<u64, ErrorSpan> {
        let digits = self.take_while(|b| b.is_ascii_digit());
        if digits.is_empty() {
            let end = if self.is_exhausted() {
                self.pos
            } else {
                self.pos + 1
            };
            return Err(ErrorSpan::digits_not_found(
                component,
                Span::new(self.pos, end),
            ));
        }
        digits
            .at(self.input)
            .parse::<u64>()
            .map_err(|e| ErrorSpan::component(component, e.into(), digits))
    }

    /// Minor and patch default to 0 once the core is used up.
    /// The separating dot is optional, but digits must follow.
    fn optional_number(&mut self, component: Component) -> Result<u64, ErrorSpan> {
        if self.is_exhausted() {
            return Ok(0);
        }
        let _ = self.eat(b'.');
        self.number(component)
    }

    /// Matches `{delimiter}[0-9A-Za-z.-]+` anchored at the current position.
    ///
    /// Without a match nothing is consumed and the component is absent.
    fn identifiers(
        &mut self,
        delimiter: u8,
        component: Component,
    ) -> Result<Option<&'input str>, ErrorSpan> {
        let mut run = *self;
        if !run.eat(delimiter) {
            return Ok(None);
        }
        let span = run.take_while(is_identifier_byte);
        if span.is_empty() {
            return Ok(None);
        }
        let identifiers = span.at(self.input);
        if let Some(offset) = find_empty_identifier(identifiers) {
            let pos = span.start + offset;
            return Err(ErrorSpan::component(
                component,
                ComponentError::EmptyIdentifier,
                Span::new(pos, pos + 1),
            ));
        }
        *self = run;
        Ok(Some(identifiers))
    }

    fn finish(&self) -> Result<(), ErrorSpan> {
        let rest = self.remaining();
        let trailing = rest.trim();
        if trailing.is_empty() {
            return Ok(());
        }
        let start = self.pos + (rest.len() - rest.trim_start().len());
        Err(ErrorSpan::malformed(
            Malformed::TrailingInput(trailing.to_owned()),
            Span::new(start, start + trailing.len()),
        ))
    }
}

/// Returns the offset of the first `.` that does not end a non-empty identifier.
fn find_empty_identifier(run: &str) -> Option<usize> {
    let bytes = run.as_bytes();
    let mut previous = b'.';
    for (pos, &b) in bytes.iter().enumerate() {
        if b == b'.' && previous == b'.' {
            return Some(pos);
        }
        previous = b;
    }
    match bytes.len() {
        0 => None,
        len if previous == b'.' => Some(len - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::error::ErrorType;
    use test_case::test_case;

    /// Owned version with plain string identifiers, only used to observe the builder calls.
    #[derive(Debug, Default, Clone, PartialEq, Eq)]
    struct Parsed {
        major: u64,
        minor: u64,
        patch: u64,
        pre: Vec<String>,
        build: Vec<String>,
    }

    impl<'input> VersionBuilder<'input> for Parsed {
        type Out = Self;

        fn new() -> Self {
            Self::default()
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
            self.pre.push(pre_release.into());
        }

        fn add_build(&mut self, build: &'input str) {
            self.build.push(build.into());
        }

        fn build(self) -> Self::Out {
            self
        }
    }

    macro_rules! vers {
        ($major:literal . $minor:literal . $patch:literal) => {
            vers!($major . $minor . $patch, [], [])
        };

        ($major:literal . $minor:literal . $patch:literal - $( $pre:literal ).+ ) => {
            vers!($major . $minor . $patch, [ $( $pre ),+ ], [])
        };

        ($major:literal . $minor:literal . $patch:literal + $( $build:literal ).+ ) => {
            vers!($major . $minor . $patch, [], [ $( $build ),+ ])
        };

        ($major:literal . $minor:literal . $patch:literal - $( $pre:literal ).+ + $( $build:literal ).+ ) => {
            vers!($major . $minor . $patch, [ $( $pre ),+ ], [ $( $build ),+ ])
        };

        ($major:literal . $minor:literal . $patch:literal, [ $( $pre:literal ),* ], [ $( $build:literal ),* ]) => {
            Parsed {
                major: $major,
                minor: $minor,
                patch: $patch,
                pre: vec![ $( String::from($pre) ),* ],
                build: vec![ $( String::from($build) ),* ],
            }
        };
    }

    fn parse_parts(input: &str) -> Result<Parsed, ErrorSpan> {
        scan(input).map(Parts::build::<Parsed>)
    }

    fn malformed(cause: Malformed, start: usize, end: usize) -> Result<Parsed, ErrorSpan> {
        Err(ErrorSpan::malformed(cause, Span::new(start, end)))
    }

    fn no_digits(component: Component, start: usize, end: usize) -> Result<Parsed, ErrorSpan> {
        Err(ErrorSpan::digits_not_found(component, Span::new(start, end)))
    }

    fn empty_identifier(component: Component, pos: usize) -> Result<Parsed, ErrorSpan> {
        Err(ErrorSpan::component(
            component,
            ComponentError::EmptyIdentifier,
            Span::new(pos, pos + 1),
        ))
    }

    #[test_case("1" => Ok(vers!(1 . 0 . 0)); "major only")]
    #[test_case("1.2" => Ok(vers!(1 . 2 . 0)); "major.minor only")]
    #[test_case("1.2.3" => Ok(vers!(1 . 2 . 3)); "major.minor.patch")]
    #[test_case("0.0.0" => Ok(vers!(0 . 0 . 0)); "all zero")]
    #[test_case("2020.04.09" => Ok(vers!(2020 . 4 . 9)); "date version")]
    #[test_case("18446744073709551615" => Ok(vers!(18446744073709551615 . 0 . 0)); "u64 max")]
    fn test_simple(input: &str) -> Result<Parsed, Error> {
        parse::<Parsed>(input)
    }

    #[test_case("1.2.3-alpha.1" => Ok(vers!(1 . 2 . 3 - "alpha" . "1")); "dotted")]
    #[test_case("1.2.3-alpha1" => Ok(vers!(1 . 2 . 3 - "alpha1")); "single")]
    #[test_case("3.1.0-M13-beta3" => Ok(vers!(3 . 1 . 0 - "M13-beta3")); "hyphen inside identifier")]
    #[test_case("1.2.3-alpha01.drop02" => Ok(vers!(1 . 2 . 3 - "alpha01" . "drop02")); "zero padded")]
    #[test_case("1.4-alpha02" => Ok(vers!(1 . 4 . 0 - "alpha02")); "without patch")]
    #[test_case("1-alpha03" => Ok(vers!(1 . 0 . 0 - "alpha03")); "without minor")]
    #[test_case("1.3.3-7" => Ok(vers!(1 . 3 . 3 - "7")); "numeric")]
    #[test_case("1.2.3-0001" => Ok(vers!(1 . 2 . 3 - "0001")); "numeric with leading zeroes")]
    #[test_case("1.2.3--" => Ok(vers!(1 . 2 . 3 - "-")); "hyphen identifier")]
    fn test_pre_release(input: &str) -> Result<Parsed, Error> {
        parse::<Parsed>(input)
    }

    #[test_case("1.2.3+build.5" => Ok(vers!(1 . 2 . 3 + "build" . "5")); "dotted")]
    #[test_case("1.0.0+exp.sha.5114f85" => Ok(vers!(1 . 0 . 0 + "exp" . "sha" . "5114f85")); "commit hash")]
    #[test_case("3.1.0+build3-r021" => Ok(vers!(3 . 1 . 0 + "build3-r021")); "hyphen inside identifier")]
    #[test_case("1.4+build02" => Ok(vers!(1 . 4 . 0 + "build02")); "without patch")]
    #[test_case("1+build03" => Ok(vers!(1 . 0 . 0 + "build03")); "without minor")]
    #[test_case("7.2.0+28-2f9fb552" => Ok(vers!(7 . 2 . 0 + "28-2f9fb552")); "describe output")]
    fn test_build(input: &str) -> Result<Parsed, Error> {
        parse::<Parsed>(input)
    }

    #[test_case("1.2.3-alpha+build" => Ok(vers!(1 . 2 . 3 - "alpha" + "build")); "both")]
    #[test_case("1.2.3-alpha.1+build.5" => Ok(vers!(1 . 2 . 3 - "alpha" . "1" + "build" . "5")); "both dotted")]
    #[test_case("0.4.0-beta.1+0851523" => Ok(vers!(0 . 4 . 0 - "beta" . "1" + "0851523")); "numeric build")]
    #[test_case("1-x+y" => Ok(vers!(1 . 0 . 0 - "x" + "y")); "short")]
    fn test_combined(input: &str) -> Result<Parsed, Error> {
        parse::<Parsed>(input)
    }

    #[test_case("v1" => Ok(vers!(1 . 0 . 0)); "v major")]
    #[test_case("v1.2.3" => Ok(vers!(1 . 2 . 3)); "v full")]
    #[test_case("V2.3.4" => Ok(vers!(2 . 3 . 4)); "upper v")]
    #[test_case("version1.2" => Ok(vers!(1 . 2 . 0)); "word prefix")]
    #[test_case("v1.3.3-7" => Ok(vers!(1 . 3 . 3 - "7")); "v with pre-release")]
    #[test_case("+1.2.3" => Ok(vers!(1 . 2 . 3)); "plus prefix")]
    #[test_case("--1.2.3" => Ok(vers!(1 . 2 . 3)); "double hyphen prefix")]
    fn test_prefix(input: &str) -> Result<Parsed, Error> {
        parse::<Parsed>(input)
    }

    #[test_case("01" => Ok(vers!(1 . 0 . 0)); "major")]
    #[test_case("00001" => Ok(vers!(1 . 0 . 0)); "many zeroes")]
    #[test_case("1.02.003" => Ok(vers!(1 . 2 . 3)); "all parts")]
    fn test_leading_zeroes(input: &str) -> Result<Parsed, Error> {
        parse::<Parsed>(input)
    }

    #[test_case("" => Err(ErrorSpan::empty_input()); "empty")]
    #[test_case("-1.0.0" => malformed(Malformed::DelimiterPrefix, 0, 1); "bare delimiter prefix")]
    #[test_case("1.2.3.4" => malformed(Malformed::TrailingInput(".4".into()), 5, 7); "fourth number")]
    #[test_case("1.2.3-" => malformed(Malformed::TrailingInput("-".into()), 5, 6); "trailing hyphen")]
    #[test_case("1.2.3+" => malformed(Malformed::TrailingInput("+".into()), 5, 6); "trailing plus")]
    #[test_case("1.2.3-+b" => malformed(Malformed::TrailingInput("-+b".into()), 5, 8); "empty pre-release before build")]
    #[test_case("1.2.3+a+b" => malformed(Malformed::TrailingInput("+b".into()), 7, 9); "second build")]
    #[test_case("1.2.3+a-b-c+d" => malformed(Malformed::TrailingInput("+d".into()), 11, 13); "second build after hyphens")]
    #[test_case("1.2.3x" => malformed(Malformed::TrailingInput("x".into()), 5, 6); "letter after patch")]
    #[test_case("1.2.3 " => malformed(Malformed::UnexpectedCharacter(' '), 5, 6); "trailing space")]
    #[test_case(" 1.2.3" => malformed(Malformed::UnexpectedCharacter(' '), 0, 1); "leading space")]
    #[test_case("1.2.3-beta_1" => malformed(Malformed::UnexpectedCharacter('_'), 10, 11); "underscore")]
    #[test_case("1.2.3-ä" => malformed(Malformed::UnexpectedCharacter('ä'), 6, 8); "non ascii")]
    #[test_case("1.2.3\n" => malformed(Malformed::UnexpectedCharacter('\n'), 5, 6); "newline")]
    fn test_malformed(input: &str) -> Result<Parsed, ErrorSpan> {
        parse_parts(input)
    }

    #[test_case("v" => no_digits(Component::Major, 0, 1); "prefix only")]
    #[test_case("abc" => no_digits(Component::Major, 0, 3); "letters only")]
    #[test_case("-" => malformed(Malformed::DelimiterPrefix, 0, 1); "bare delimiter")]
    #[test_case("1." => no_digits(Component::Minor, 2, 2); "dot without minor")]
    #[test_case("1.2." => no_digits(Component::Patch, 4, 4); "dot without patch")]
    #[test_case("1.x" => no_digits(Component::Minor, 2, 3); "letter as minor")]
    #[test_case("1x2" => no_digits(Component::Minor, 1, 2); "letter instead of dot")]
    #[test_case("1..2" => no_digits(Component::Minor, 2, 3); "double dot")]
    #[test_case("1.-alpha" => no_digits(Component::Minor, 2, 2); "dot before pre-release")]
    fn test_digits_not_found(input: &str) -> Result<Parsed, ErrorSpan> {
        parse_parts(input)
    }

    #[test_case("1.2.3-." => empty_identifier(Component::PreRelease, 6); "pre-release only dot")]
    #[test_case("1.2.3-.a" => empty_identifier(Component::PreRelease, 6); "pre-release leading dot")]
    #[test_case("1.2.3-a..b" => empty_identifier(Component::PreRelease, 8); "pre-release double dot")]
    #[test_case("1.2.3-a." => empty_identifier(Component::PreRelease, 7); "pre-release trailing dot")]
    #[test_case("1.2.3+." => empty_identifier(Component::Build, 6); "build only dot")]
    #[test_case("1.2.3+a..b" => empty_identifier(Component::Build, 8); "build double dot")]
    #[test_case("1.2.3-a+b." => empty_identifier(Component::Build, 9); "build trailing dot")]
    fn test_empty_identifier(input: &str) -> Result<Parsed, ErrorSpan> {
        parse_parts(input)
    }

    #[test]
    fn test_number_out_of_range() {
        let error = parse_parts("1.18446744073709551616").unwrap_err();
        assert_eq!(error.span, Span::new(2, 22));
        assert!(matches!(
            error.error,
            ErrorType::Component(Component::Minor, ComponentError::NumberOutOfRange(_))
        ));
    }

    #[test]
    fn test_error_with_input() {
        let error = parse::<Parsed>("1.2.3-a..b").unwrap_err();
        assert_eq!(
            error,
            Error::ComponentParseError {
                input: "1.2.3-a..b".into(),
                span: 8..9,
                component: Component::PreRelease,
                cause: ComponentError::EmptyIdentifier,
            }
        );
    }

    #[test]
    fn test_error_source() {
        use std::error::Error as _;

        let error = parse::<Parsed>("99999999999999999999").unwrap_err();
        assert_eq!(error.component(), Some(Component::Major));
        let source = error.source().expect("wrapped cause");
        assert_eq!(source.to_string(), "number too large to fit in target type");

        let error = parse::<Parsed>("").unwrap_err();
        assert!(error.source().is_none());
    }

    #[test_case("" => "Malformed version string ``\n|    \n|    \n"; "empty string")]
    #[test_case("1.2.3-" => "Malformed version string `1.2.3-`: unexpected trailing input `-`
|    1.2.3-
|    ~~~~~^
"; "trailing hyphen")]
    #[test_case("-1.2.3" => "Malformed version string `-1.2.3`: a version cannot start with a bare `-`
|    -1.2.3
|    ^
"; "bare delimiter prefix")]
    #[test_case("1.b.c" => "Could not parse the minor identifier of `1.b.c`: No digits found
|    1.b.c
|    ~~^
"; "letter as minor")]
    #[test_case("foo" => "Could not parse the major identifier of `foo`: No digits found
|    foo
|    ^^^
"; "letters only")]
    #[test_case("1.2.3+a..b" => "Could not parse the build identifier of `1.2.3+a..b`: identifiers must not be empty
|    1.2.3+a..b
|    ~~~~~~~~^
"; "empty build identifier")]
    #[test_case("1.2.3-€" => "Malformed version string `1.2.3-€`: unexpected character `€`
|    1.2.3-€
|    ~~~~~~^
"; "multi byte character")]
    fn test_diagnostic(input: &str) -> String {
        parse::<Parsed>(input).unwrap_err().diagnostic()
    }

    #[test]
    fn test_parse_semver() {
        let actual = parse::<semver::Version>("v1.2.3-alpha.007+build.0042").ok();
        let expected = semver::Version::parse("1.2.3-alpha.7+build.0042").ok();
        assert_eq!(actual, expected)
    }

    #[test]
    fn test_builder_is_not_called_on_error() {
        struct Panicking;

        impl VersionBuilder<'_> for Panicking {
            type Out = ();

            fn new() -> Self {
                panic!("builder must not be created for invalid input")
            }

            fn build(self) -> Self::Out {}
        }

        assert!(parse::<Panicking>("1.2.3-alpha..1").is_err());
    }

    #[test_case("." => Some(0); "only dot")]
    #[test_case("a" => None; "single")]
    #[test_case("a.b.c" => None; "dotted")]
    #[test_case(".a" => Some(0); "leading dot")]
    #[test_case("a." => Some(1); "trailing dot")]
    #[test_case("a..b" => Some(2); "double dot")]
    #[test_case("a.b..." => Some(4); "many dots")]
    #[test_case("" => None; "empty run")]
    fn test_find_empty_identifier(run: &str) -> Option<usize> {
        find_empty_identifier(run)
    }

    #[test]
    fn test_cursor_identifiers_consume_nothing_without_match() {
        let mut cursor = Cursor::new("-+", 0, 2);
        assert_eq!(cursor.identifiers(b'-', Component::PreRelease), Ok(None));
        assert_eq!(cursor.pos, 0);
        assert_eq!(cursor.identifiers(b'+', Component::Build), Ok(None));
        assert_eq!(cursor.pos, 0);
    }

    #[test]
    fn test_cursor_optional_number_defaults_to_zero() {
        let mut cursor = Cursor::new("1-alpha", 1, 1);
        assert_eq!(cursor.optional_number(Component::Minor), Ok(0));
        assert_eq!(cursor.optional_number(Component::Patch), Ok(0));
        assert_eq!(cursor.pos, 1);
    }
}
