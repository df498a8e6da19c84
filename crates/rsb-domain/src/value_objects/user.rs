//! User identity types
//!
//! The messaging service keys group members by the host platform's username.
//! Earlier revisions of the bridge used the numeric host user id instead;
//! usernames are now the only identity carried through the system.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::error::{Error, Result};

/// Username of a host platform user, used as the remote member identifier
///
/// Deserialization goes through [`Username::new`], so blank values are
/// rejected. The `From` conversions are for trusted literals only.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Create a username, rejecting blank values
    pub fn new<S: Into<String>>(value: S) -> Result<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(Error::internal("username cannot be blank"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the username as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

impl From<&str> for Username {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Order-insensitive, duplicate-free set of usernames
///
/// Backed by a `BTreeSet` so iteration and serialization are always sorted,
/// which makes membership comparisons and log output deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserSet(BTreeSet<Username>);

impl UserSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a username, returning whether it was newly added
    pub fn insert(&mut self, username: Username) -> bool {
        self.0.insert(username)
    }

    /// Whether the set contains the given username
    pub fn contains(&self, username: &Username) -> bool {
        self.0.contains(username)
    }

    /// Number of usernames in the set
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Usernames in `self` that are not in `other`
    pub fn difference(&self, other: &UserSet) -> UserSet {
        Self(self.0.difference(&other.0).cloned().collect())
    }

    /// Iterate over usernames in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &Username> {
        self.0.iter()
    }

}

impl fmt::Display for UserSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for username in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(username.as_str())?;
            first = false;
        }
        Ok(())
    }
}

impl FromIterator<Username> for UserSet {
    fn from_iter<I: IntoIterator<Item = Username>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Collects raw identifiers, skipping blank ones
impl<'a> FromIterator<&'a str> for UserSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().filter_map(|v| Username::new(v).ok()).collect())
    }
}

/// Collects raw identifiers, skipping blank ones
impl FromIterator<String> for UserSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().filter_map(|v| Username::new(v).ok()).collect())
    }
}

impl Extend<Username> for UserSet {
    fn extend<I: IntoIterator<Item = Username>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for UserSet {
    type Item = Username;
    type IntoIter = std::collections::btree_set::IntoIter<Username>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a UserSet {
    type Item = &'a Username;
    type IntoIter = std::collections::btree_set::Iter<'a, Username>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Username> for UserSet {
    fn from(username: Username) -> Self {
        Self(BTreeSet::from([username]))
    }
}
