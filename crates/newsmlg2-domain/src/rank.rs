//! Rank module - the ordering key of every ranked collection

use std::fmt;

/// A positive, 1-based ordering key
///
/// Lower ranks come first. A value that cannot be expressed as a positive
/// integer is not a rank at all: callers keep it as `None`, and unranked
/// items sort after every ranked one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(u32);

impl Rank {
    /// Create a rank from a raw value, rejecting zero
    ///
    /// # Examples
    ///
    /// ```
    /// use newsmlg2_domain::Rank;
    ///
    /// assert_eq!(Rank::new(3).map(|r| r.value()), Some(3));
    /// assert!(Rank::new(0).is_none());
    /// ```
    pub fn new(value: u32) -> Option<Self> {
        if value == 0 {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Create the rank of the item at a 0-based list position
    pub fn from_position(index: usize) -> Self {
        Self(u32::try_from(index.saturating_add(1)).unwrap_or(u32::MAX))
    }

    /// Parse a rank from text, tolerating surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        s.trim().parse::<u32>().ok().and_then(Self::new)
    }

    /// Get the raw value
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Rank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid rank: {}", s))
    }
}

/// Stable sort by ascending rank, unranked items last
///
/// Items with equal ranks (or no rank) keep their relative order.
pub fn sort_by_rank<T, F>(items: &mut [T], rank_of: F)
where
    F: Fn(&T) -> Option<Rank>,
{
    // slice::sort_by_key is stable
    items.sort_by_key(|item| match rank_of(item) {
        Some(rank) => (false, rank.value()),
        None => (true, 0),
    });
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: output is non-decreasing by rank, unranked last
        #[test]
        fn test_sorted_output_is_ordered(ranks in proptest::collection::vec(proptest::option::of(1u32..20), 0..40)) {
            let mut items: Vec<(usize, Option<Rank>)> = ranks
                .iter()
                .enumerate()
                .map(|(idx, r)| (idx, r.and_then(Rank::new)))
                .collect();
            sort_by_rank(&mut items, |(_, rank)| *rank);

            for pair in items.windows(2) {
                match (pair[0].1, pair[1].1) {
                    (Some(a), Some(b)) => prop_assert!(a <= b),
                    (None, Some(_)) => prop_assert!(false, "unranked item before ranked item"),
                    _ => {}
                }
            }
        }

        /// Property: equal ranks preserve source order
        #[test]
        fn test_sort_is_stable(ranks in proptest::collection::vec(proptest::option::of(1u32..4), 0..40)) {
            let mut items: Vec<(usize, Option<Rank>)> = ranks
                .iter()
                .enumerate()
                .map(|(idx, r)| (idx, r.and_then(Rank::new)))
                .collect();
            sort_by_rank(&mut items, |(_, rank)| *rank);

            for pair in items.windows(2) {
                if pair[0].1 == pair[1].1 {
                    prop_assert!(pair[0].0 < pair[1].0);
                }
            }
        }
    }
}
