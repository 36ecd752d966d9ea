use std::{
    fmt,
    iter::FromIterator,
    ops::{Deref, Index},
};

/// Dot-separated identifiers of the pre-release or build segment of a Version.
///
/// An absent segment is represented by an empty list, never by a single empty identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Identifiers {
    identifiers: Vec<String>,
}

impl Identifiers {
    /// Constructs an empty list of identifiers
    pub const fn empty() -> Self {
        Self {
            identifiers: Vec::new(),
        }
    }

    /// Returns true if there are no identifiers, i.e. the segment is absent.
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// Returns true if there is at least one identifier.
    pub fn is_defined(&self) -> bool {
        !self.is_empty()
    }

    /// Returns an iterator over the identifiers
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.identifiers.iter().map(String::as_str)
    }

    #[cfg(feature = "parser")]
    pub(super) fn push(&mut self, identifier: &str) {
        self.identifiers.push(identifier.to_owned());
    }
}

impl Deref for Identifiers {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.identifiers[..]
    }
}

impl AsRef<[String]> for Identifiers {
    fn as_ref(&self) -> &[String] {
        &self.identifiers[..]
    }
}

impl Index<usize> for Identifiers {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.identifiers[index]
    }
}

impl<S: Into<String>> FromIterator<S> for Identifiers {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            identifiers: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<String>> for Identifiers {
    fn from(identifiers: Vec<String>) -> Self {
        Self { identifiers }
    }
}

impl From<Identifiers> for Vec<String> {
    fn from(identifiers: Identifiers) -> Self {
        identifiers.identifiers
    }
}

impl<S: AsRef<str>, const N: usize> PartialEq<[S; N]> for Identifiers {
    fn eq(&self, other: &[S; N]) -> bool {
        self.identifiers.len() == N
            && self
                .identifiers
                .iter()
                .zip(other.iter())
                .all(|(lhs, rhs)| lhs == rhs.as_ref())
    }
}

impl<'a> IntoIterator for &'a Identifiers {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.identifiers.iter()
    }
}

/// Joins the identifiers with `.`, without the leading delimiter.
impl fmt::Display for Identifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut identifiers = self.identifiers.iter();
        if let Some(first) = identifiers.next() {
            f.write_str(first)?;
            for identifier in identifiers {
                f.write_str(".")?;
                f.write_str(identifier)?;
            }
        }
        Ok(())
    }
}
