use std::cmp::Ordering;

use crate::{item::Item, qualifier::Rank};

impl Item {
    /// Compare against another item, or against nothing at all.
    ///
    /// A missing item behaves like padding: it equals a zero, an empty
    /// sequence or a release qualifier. Between kinds, the order is
    /// qualifier < sequence < integer < wide integer.
    pub fn compare(&self, other: Option<&Item>) -> Ordering {
        use Item::*;

        let Some(other) = other else {
            return self.compare_to_absent();
        };

        match (self, other) {
            (Integer(a), Integer(b)) => a.cmp(b),
            (WideInteger(a), WideInteger(b)) => a.cmp(b),
            (Qualifier(a), Qualifier(b)) => a.cmp(b),
            (Sequence(a), Sequence(b)) => compare_sequences(a, b),

            // Integers only hold narrower digit runs than wide integers.
            (Integer(_), WideInteger(_)) => Ordering::Less,
            (WideInteger(_), Integer(_)) => Ordering::Greater,

            (Integer(_) | WideInteger(_), Qualifier(_) | Sequence(_)) => Ordering::Greater,
            (Qualifier(_) | Sequence(_), Integer(_) | WideInteger(_)) => Ordering::Less,

            (Qualifier(_), Sequence(_)) => Ordering::Less,
            (Sequence(_), Qualifier(_)) => Ordering::Greater,
        }
    }

    fn compare_to_absent(&self) -> Ordering {
        match self {
            Item::Integer(n) => n.cmp(&0),
            Item::WideInteger(n) => n.cmp(&0),
            Item::Qualifier(q) => q.rank().cmp(&Rank::RELEASE),
            Item::Sequence(items) => items
                .iter()
                .map(Item::compare_to_absent)
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal),
        }
    }
}

/// Compare two sequences item by item, padding the shorter one with absent items.
pub(crate) fn compare_sequences(left: &[Item], right: &[Item]) -> Ordering {
    let max_len = left.len().max(right.len());

    for i in 0..max_len {
        let ordering = match (left.get(i), right.get(i)) {
            (Some(l), r) => l.compare(r),
            (None, Some(r)) => r.compare(None).reverse(),
            (None, None) => Ordering::Equal,
        };
        if ordering.is_ne() {
            return ordering;
        }
    }

    Ordering::Equal
}
