use crate::qualifier::Qualifier;

/// One parsed component of a version.
///
/// Digit runs become [`Item::Integer`] or [`Item::WideInteger`] depending on
/// how many digits are left after dropping leading zeros. Everything between
/// separators that is not a digit becomes a [`Item::Qualifier`]. A hyphen, or
/// a switch between digits and letters, opens a nested [`Item::Sequence`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Item {
    /// Up to 9 significant digits.
    Integer(u32),
    /// 10 to 18 significant digits.
    WideInteger(u64),
    Qualifier(Qualifier),
    Sequence(Vec<Item>),
}

impl Item {
    /// Whether this item carries no ordering information, and so is
    /// equivalent to it not being there at all.
    pub fn is_null(&self) -> bool {
        match self {
            Item::Integer(n) => *n == 0,
            Item::WideInteger(n) => *n == 0,
            Item::Qualifier(q) => q.is_release(),
            Item::Sequence(items) => items.is_empty(),
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    fn write_canonical(&self, out: &mut String) {
        match self {
            Item::Integer(n) => out.push_str(&n.to_string()),
            Item::WideInteger(n) => out.push_str(&n.to_string()),
            Item::Qualifier(q) => out.push_str(q.as_str()),
            Item::Sequence(items) => write_canonical_sequence(items, out),
        }
    }

    fn write_tokens(&self, out: &mut String) {
        match self {
            Item::Sequence(items) => write_token_list(items, out),
            leaf => leaf.write_canonical(out),
        }
    }
}

/// Render a sequence as `1.0-alpha-1`.
///
/// A nested sequence is introduced by `-`, anything else by `.`. No separator
/// is written until the sequence has rendered some text.
pub(crate) fn write_canonical_sequence(items: &[Item], out: &mut String) {
    let start = out.len();
    for item in items {
        if out.len() > start {
            out.push(if item.is_sequence() { '-' } else { '.' });
        }
        item.write_canonical(out);
    }
}

/// Render a sequence as `[1, [alpha, [1]]]`.
pub(crate) fn write_token_list(items: &[Item], out: &mut String) {
    out.push('[');
    let start = out.len();
    for item in items {
        if out.len() > start {
            out.push_str(", ");
        }
        item.write_tokens(out);
    }
    out.push(']');
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = String::new();
        self.write_canonical(&mut out);
        f.write_str(&out)
    }
}

impl From<Qualifier> for Item {
    fn from(qualifier: Qualifier) -> Self {
        Self::Qualifier(qualifier)
    }
}
