//! Ordering for free-form version strings such as `1.0.1`, `1.0-alpha-1` or `2.0.0.RC1`,
//! following the rules Maven uses to compare artifact versions.
//!
//! ```
//! use mvn_version::Version;
//!
//! let alpha: Version = "1.0-alpha-1".parse().unwrap();
//! let release: Version = "1.0".parse().unwrap();
//! assert!(alpha < release);
//! assert_eq!(release.canonical(), "1");
//! ```

use std::{cmp::Ordering, hash::Hash};

use once_cell::race::OnceBox;
use serde_with::{DeserializeFromStr, SerializeDisplay};

mod cmp;
mod item;
mod parse;
mod qualifier;

pub use item::Item;
pub use qualifier::{Qualifier, Rank};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    #[error("Numeric component {token} of version {version} exceeds 18 digits")]
    NumericOverflow { version: String, token: String },
}

/// A parsed version.
///
/// Two versions are equal when their parsed items are, so `1`, `1.0.0` and
/// `1-ga` are all the same version even though they print differently.
#[derive(DeserializeFromStr, SerializeDisplay)]
pub struct Version {
    original: String,
    items: Vec<Item>,
    canonical: OnceBox<String>,
}

impl Version {
    pub fn parse(version: impl AsRef<str>) -> Result<Self, VersionError> {
        let original = version.as_ref();
        let items = parse::parse_items(original)?;
        Ok(Self {
            original: original.to_owned(),
            items,
            canonical: OnceBox::new(),
        })
    }

    /// The string this version was parsed from, unchanged.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// The normalized top-level items.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The canonical form, e.g. `1` for `1.0.0` or `1-rc-1` for `1.0.0-CR1`.
    ///
    /// Computed on first use. Parsing the canonical form of a version
    /// gives back an equal version.
    pub fn canonical(&self) -> &str {
        self.canonical.get_or_init(|| {
            let mut out = String::new();
            item::write_canonical_sequence(&self.items, &mut out);
            Box::new(out)
        })
    }

    /// The parsed items as a bracketed list, e.g. `[1, [alpha, [1]]]` for `1.0-alpha-1`.
    pub fn tokens(&self) -> String {
        let mut out = String::new();
        item::write_token_list(&self.items, &mut out);
        out
    }
}

impl Clone for Version {
    fn clone(&self) -> Self {
        let canonical = OnceBox::new();
        if let Some(cached) = self.canonical.get() {
            // Only fails if the new cell was already set, which it cannot be.
            let _ = canonical.set(cached.clone().into());
        }

        Self {
            original: self.original.clone(),
            items: self.items.clone(),
            canonical,
        }
    }
}

impl std::fmt::Debug for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Version")
            .field("original", &self.original)
            .field("items", &self.items)
            .finish()
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.original)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

/// Versions that compare equal have identical normalized items, so hashing
/// the items agrees with [`PartialEq`].
impl Hash for Version {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp::compare_sequences(&self.items, &other.items)
    }
}

impl std::str::FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, VersionError> {
        Version::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(s: &str) -> Result<Self, VersionError> {
        Version::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionError;

    fn try_from(s: String) -> Result<Self, VersionError> {
        Version::parse(s)
    }
}
