//! Textual qualifiers such as `alpha`, `rc` or `sp`, and the fixed table that ranks them.

use std::cmp::Ordering;

/// Well-known qualifiers, lowest precedence first. The empty string is a plain release.
const QUALIFIERS: [&str; 7] = ["alpha", "beta", "milestone", "rc", "snapshot", "", "sp"];

/// Index of the empty qualifier in [`QUALIFIERS`].
const RELEASE_INDEX: usize = 5;

const ALIASES: [(&str, &str); 4] = [("ga", ""), ("final", ""), ("release", ""), ("cr", "rc")];

/// Sort key of a qualifier.
///
/// Known qualifiers sort by their position in the table; anything else sorts
/// after every known qualifier, and lexically among other unknown ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank<'a> {
    Known(usize),
    Unknown(&'a str),
}

impl Rank<'static> {
    /// The rank of a release, which is what a missing item compares as.
    pub const RELEASE: Self = Rank::Known(RELEASE_INDEX);
}

impl std::fmt::Display for Rank<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Known(index) => write!(f, "{index}"),
            Rank::Unknown(text) => write!(f, "{}-{text}", QUALIFIERS.len()),
        }
    }
}

/// A non-numeric version component, stored after alias substitution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Qualifier(String);

impl Qualifier {
    /// Build a qualifier from a lowercased token.
    ///
    /// `followed_by_digit` is set when the token ran directly into a digit, as
    /// in `1.0a1`; only then are `a`, `b` and `m` read as alpha, beta and milestone.
    pub fn new(token: &str, followed_by_digit: bool) -> Self {
        let token = match (token, followed_by_digit) {
            ("a", true) => "alpha",
            ("b", true) => "beta",
            ("m", true) => "milestone",
            _ => token,
        };

        let text = ALIASES
            .iter()
            .find_map(|(alias, target)| (*alias == token).then_some(*target))
            .unwrap_or(token);

        Self(text.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn rank(&self) -> Rank<'_> {
        match QUALIFIERS.iter().position(|q| *q == self.0) {
            Some(index) => Rank::Known(index),
            None => Rank::Unknown(&self.0),
        }
    }

    /// Whether this qualifier means "no qualifier at all", i.e. a release.
    pub fn is_release(&self) -> bool {
        self.rank() == Rank::RELEASE
    }
}

impl PartialOrd for Qualifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Qualifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl std::fmt::Display for Qualifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
