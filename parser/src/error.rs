use std::{fmt, num::ParseIntError, ops::Range};

use thiserror::Error;

/// Possible errors that happen during parsing
/// and the location of the input where the error occurred.
///
/// Every variant keeps an owned copy of the original input,
/// so that the error can outlive the string that was parsed.
///
/// # Example
///
/// ```rust
/// use semver_scan_parser::{Component, Error};
///
/// let error = semver_scan_parser::parse::<semver::Version>("1.2.3.4").unwrap_err();
/// assert_eq!(error.to_string(), "Malformed version string `1.2.3.4`: unexpected trailing input `.4`");
///
/// let error = semver_scan_parser::parse::<semver::Version>("1.x").unwrap_err();
/// assert!(matches!(error, Error::DigitsNotFound { component: Component::Minor, .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input is not shaped like a version string at all.
    ///
    /// Raised for characters outside of `[0-9A-Za-z.+-]`, for a bare `-` in front of the version,
    /// and for any input that is left over after all components have been parsed.
    #[error("Malformed version string `{input}`{}", with_cause(.cause))]
    MalformedString {
        /// The original input.
        input: String,
        /// The erroneous part of the input.
        span: Range<usize>,
        /// What exactly was malformed, `None` for an empty input.
        #[source]
        cause: Option<Malformed>,
    },
    /// A numeric component was expected, but no digits were found.
    #[error("Could not parse the {component} identifier of `{input}`: No digits found")]
    DigitsNotFound {
        /// The original input.
        input: String,
        /// The position where digits were expected.
        span: Range<usize>,
        /// The numeric component that is missing.
        component: Component,
    },
    /// A component was found, but it could not be parsed.
    #[error("Could not parse the {component} identifier of `{input}`: {cause}")]
    ComponentParseError {
        /// The original input.
        input: String,
        /// The erroneous part of the input.
        span: Range<usize>,
        /// The component that failed to parse.
        component: Component,
        /// The reason why the component failed to parse.
        #[source]
        cause: ComponentError,
    },
}

fn with_cause(cause: &Option<Malformed>) -> String {
    match cause {
        Some(cause) => format!(": {}", cause),
        None => String::new(),
    }
}

impl Error {
    /// Returns the original input line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = semver_scan_parser::parse::<semver::Version>("1+").unwrap_err();
    /// assert_eq!(error.input(), "1+");
    /// ```
    pub fn input(&self) -> &str {
        match self {
            Error::MalformedString { input, .. }
            | Error::DigitsNotFound { input, .. }
            | Error::ComponentParseError { input, .. } => input,
        }
    }

    /// Returns range into the input string that points to the erroneous input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = semver_scan_parser::parse::<semver::Version>("1+").unwrap_err();
    /// assert_eq!(error.error_span(), 1..2);
    /// ```
    pub fn error_span(&self) -> Range<usize> {
        match self {
            Error::MalformedString { span, .. }
            | Error::DigitsNotFound { span, .. }
            | Error::ComponentParseError { span, .. } => span.clone(),
        }
    }

    /// Returns the component that failed to parse, if the error is attributable to one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semver_scan_parser::Component;
    ///
    /// let error = semver_scan_parser::parse::<semver::Version>("1.2.3+a..b").unwrap_err();
    /// assert_eq!(error.component(), Some(Component::Build));
    ///
    /// let error = semver_scan_parser::parse::<semver::Version>("1.2.3 ").unwrap_err();
    /// assert_eq!(error.component(), None);
    /// ```
    pub fn component(&self) -> Option<Component> {
        match self {
            Error::MalformedString { .. } => None,
            Error::DigitsNotFound { component, .. }
            | Error::ComponentParseError { component, .. } => Some(*component),
        }
    }

    /// Returns a slice from the original input line that triggered the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = semver_scan_parser::parse::<semver::Version>("1.2.3-beta_1").unwrap_err();
    /// assert_eq!(error.erroneous_input(), "_");
    /// ```
    pub fn erroneous_input(&self) -> &str {
        self.input().get(self.error_span()).unwrap_or_default()
    }

    /// Returns a caret line indication the erroneous input if it was written under the original input line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = semver_scan_parser::parse::<semver::Version>("1.2.3-").unwrap_err();
    /// assert_eq!(error.indicate_erroneous_input(), "~~~~~^");
    /// ```
    pub fn indicate_erroneous_input(&self) -> String {
        let span = self.error_span();
        let input = self.input();
        let start = input.get(..span.start).map_or(0, |s| s.chars().count());
        let width = self.erroneous_input().chars().count();
        format!("{0:~<start$}{0:^<width$}", "", start = start, width = width)
    }

    /// Renders the error message followed by the input and a caret line
    /// pointing at the erroneous input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = semver_scan_parser::parse::<semver::Version>("1.2.3 abc").unwrap_err();
    /// assert_eq!(
    ///     error.diagnostic(),
    ///     "Malformed version string `1.2.3 abc`: unexpected character ` `\n|    1.2.3 abc\n|    ~~~~~^\n"
    /// );
    /// ```
    pub fn diagnostic(&self) -> String {
        format!(
            "{}\n|    {}\n|    {}\n",
            self,
            self.input(),
            self.indicate_erroneous_input()
        )
    }
}

/// The reason for a [`Error::MalformedString`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    /// A character outside of `[0-9A-Za-z.+-]`.
    #[error("unexpected character `{0}`")]
    UnexpectedCharacter(char),
    /// The version is prefixed by nothing but the pre-release delimiter, as in `-1.2.3`.
    #[error("a version cannot start with a bare `-`")]
    DelimiterPrefix,
    /// Input that remains after all components have been parsed.
    #[error("unexpected trailing input `{0}`")]
    TrailingInput(String),
}

/// The reason for a [`Error::ComponentParseError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
    /// A pre-release or build identifier is empty, as in `1.2.3-alpha..1`.
    #[error("identifiers must not be empty")]
    EmptyIdentifier,
    /// A numeric component does not fit into an u64.
    #[error("{0}")]
    NumberOutOfRange(#[from] ParseIntError),
}

/// The components of a version.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Component {
    /// The major number.
    Major,
    /// The minor number.
    Minor,
    /// The patch number.
    Patch,
    /// The pre-release identifiers.
    PreRelease,
    /// The build identifiers.
    Build,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Major => f.pad("major"),
            Component::Minor => f.pad("minor"),
            Component::Patch => f.pad("patch"),
            Component::PreRelease => f.pad("pre-release"),
            Component::Build => f.pad("build"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ErrorType {
    Malformed(Option<Malformed>),
    DigitsNotFound(Component),
    Component(Component, ComponentError),
}

/// An error together with its location, but without the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ErrorSpan {
    pub(crate) error: ErrorType,
    pub(crate) span: Span,
}

impl ErrorSpan {
    pub(crate) fn new(error: ErrorType, span: Span) -> Self {
        Self { error, span }
    }

    pub(crate) fn empty_input() -> Self {
        Self::new(ErrorType::Malformed(None), Span::default())
    }

    pub(crate) fn malformed(cause: Malformed, span: Span) -> Self {
        Self::new(ErrorType::Malformed(Some(cause)), span)
    }

    pub(crate) fn digits_not_found(component: Component, span: Span) -> Self {
        Self::new(ErrorType::DigitsNotFound(component), span)
    }

    pub(crate) fn component(component: Component, cause: ComponentError, span: Span) -> Self {
        Self::new(ErrorType::Component(component, cause), span)
    }

    pub(crate) fn with_input(self, input: &str) -> Error {
        let input = input.to_owned();
        let span = self.span.into();
        match self.error {
            ErrorType::Malformed(cause) => Error::MalformedString { input, span, cause },
            ErrorType::DigitsNotFound(component) => Error::DigitsNotFound {
                input,
                span,
                component,
            },
            ErrorType::Component(component, cause) => Error::ComponentParseError {
                input,
                span,
                component,
                cause,
            },
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl Span {
    pub(crate) fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub(crate) fn at<'input>(&self, input: &'input str) -> &'input str {
        &input[self.start..self.end]
    }
}

impl From<Span> for Range<usize> {
    fn from(s: Span) -> Self {
        s.start..s.end
    }
}
