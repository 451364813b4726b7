use tracing::{debug, trace};

use crate::{VersionError, item::Item, qualifier::Qualifier};

/// Digit runs up to this wide become [`Item::Integer`].
const MAX_INTEGER_DIGITS: usize = 9;

/// Digit runs up to this wide become [`Item::WideInteger`]; anything wider is rejected.
const MAX_WIDE_INTEGER_DIGITS: usize = 18;

/// Parse a version string into its normalized root sequence.
pub(crate) fn parse_items(original: &str) -> Result<Vec<Item>, VersionError> {
    let version = original.to_lowercase();
    let mut tokenizer = Tokenizer::new(original);

    let mut start = 0;
    let mut is_digit = false;
    for (i, c) in version.char_indices() {
        match c {
            '.' | '-' => {
                if i == start {
                    tokenizer.push(Item::Integer(0));
                } else {
                    let item = tokenizer.token(is_digit, &version[start..i])?;
                    tokenizer.push(item);
                }
                start = i + 1;
                if c == '-' {
                    tokenizer.open_sequence();
                }
            }
            c if c.is_ascii_digit() => {
                if !is_digit && i > start {
                    tokenizer.push(Qualifier::new(&version[start..i], true).into());
                    start = i;
                    tokenizer.open_sequence();
                }
                is_digit = true;
            }
            _ => {
                if is_digit && i > start {
                    let item = tokenizer.number(&version[start..i])?;
                    tokenizer.push(item);
                    start = i;
                    tokenizer.open_sequence();
                }
                is_digit = false;
            }
        }
    }

    if version.len() > start {
        let item = tokenizer.token(is_digit, &version[start..])?;
        tokenizer.push(item);
    }

    let items = tokenizer.finish();
    trace!("Parsed {original} into {} top-level items", items.len());
    Ok(items)
}

/// Builds the item tree while scanning.
///
/// Every sequence opened during the scan is the last item of its parent, and
/// nothing is added to the parent afterwards, so a child is only attached to
/// its parent once the scan is over.
struct Tokenizer<'a> {
    original: &'a str,
    /// The innermost open sequence.
    current: Vec<Item>,
    /// Enclosing open sequences, outermost first.
    parents: Vec<Vec<Item>>,
}

impl<'a> Tokenizer<'a> {
    fn new(original: &'a str) -> Self {
        Self {
            original,
            current: Vec::new(),
            parents: Vec::new(),
        }
    }

    fn push(&mut self, item: Item) {
        self.current.push(item);
    }

    fn open_sequence(&mut self) {
        let parent = std::mem::take(&mut self.current);
        self.parents.push(parent);
    }

    fn token(&self, is_digit: bool, token: &str) -> Result<Item, VersionError> {
        if is_digit {
            self.number(token)
        } else {
            Ok(Qualifier::new(token, false).into())
        }
    }

    fn number(&self, token: &str) -> Result<Item, VersionError> {
        let digits = match token.trim_start_matches('0') {
            "" => "0",
            digits => digits,
        };
        let overflow = || VersionError::NumericOverflow {
            version: self.original.to_owned(),
            token: digits.to_owned(),
        };

        if digits.len() <= MAX_INTEGER_DIGITS {
            digits.parse().map(Item::Integer).map_err(|_| overflow())
        } else if digits.len() <= MAX_WIDE_INTEGER_DIGITS {
            digits.parse().map(Item::WideInteger).map_err(|_| overflow())
        } else {
            debug!(
                "Rejecting {}: {} digits in {digits} is more than {MAX_WIDE_INTEGER_DIGITS}",
                self.original,
                digits.len()
            );
            Err(overflow())
        }
    }

    /// Close every open sequence, innermost first, normalizing each as it closes.
    fn finish(self) -> Vec<Item> {
        let Self {
            current: mut items,
            mut parents,
            ..
        } = self;

        normalize(&mut items);
        while let Some(mut parent) = parents.pop() {
            parent.push(Item::Sequence(items));
            normalize(&mut parent);
            items = parent;
        }
        items
    }
}

/// Drop trailing items that do not affect ordering, so `1.0.0` and `1-0` both become `1`.
///
/// The scan walks backwards, removing null items. A non-null leaf ends it; a
/// non-null nested sequence is kept but the scan carries on past it.
pub(crate) fn normalize(items: &mut Vec<Item>) {
    for i in (0..items.len()).rev() {
        if items[i].is_null() {
            items.remove(i);
        } else if !items[i].is_sequence() {
            break;
        }
    }
}
