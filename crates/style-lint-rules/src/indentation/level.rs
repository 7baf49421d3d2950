//! Acceptable indentation columns.

use std::collections::BTreeSet;
use std::fmt;

/// The column(s) at which a token may legally start.
///
/// Either an explicit, non-empty set of columns or an open-ended
/// threshold. The two modes are exclusive by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndentLevel {
    /// Any of the listed columns.
    ExactSet(Columns),
    /// Any column at or right of the threshold.
    AtLeast(usize),
}

/// Non-empty, ordered set of columns.
///
/// Only [`IndentLevel`] constructors can build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns(BTreeSet<usize>);

impl Columns {
    /// Columns in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

impl<'a> IntoIterator for &'a Columns {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

impl IndentLevel {
    /// A single acceptable column.
    #[must_use]
    pub fn exact(column: usize) -> Self {
        Self::ExactSet(Columns(BTreeSet::from([column])))
    }

    /// Every column at or beyond `threshold`.
    #[must_use]
    pub fn at_least(threshold: usize) -> Self {
        Self::AtLeast(threshold)
    }

    /// Builds an exact set from `columns`, or `None` if there are none.
    #[must_use]
    pub fn from_columns(columns: impl IntoIterator<Item = usize>) -> Option<Self> {
        let set: BTreeSet<usize> = columns.into_iter().collect();
        if set.is_empty() {
            None
        } else {
            Some(Self::ExactSet(Columns(set)))
        }
    }

    /// Returns `true` if a token at `column` satisfies this level.
    #[must_use]
    pub fn accepts(&self, column: usize) -> bool {
        match self {
            Self::ExactSet(set) => set.0.contains(&column),
            Self::AtLeast(threshold) => column >= *threshold,
        }
    }

    /// Moves every acceptable column `offset` places to the right.
    #[must_use]
    pub fn shifted(&self, offset: usize) -> Self {
        match self {
            Self::ExactSet(set) => {
                Self::ExactSet(Columns(set.iter().map(|c| c + offset).collect()))
            }
            Self::AtLeast(threshold) => Self::AtLeast(threshold + offset),
        }
    }

    /// Merges two exact sets.
    ///
    /// Returns `None` when either side is a threshold; such a union has no
    /// meaningful value.
    #[must_use]
    pub fn union(&self, other: &Self) -> Option<Self> {
        match (self, other) {
            (Self::ExactSet(a), Self::ExactSet(b)) => {
                Some(Self::ExactSet(Columns(a.0.union(&b.0).copied().collect())))
            }
            _ => None,
        }
    }

    /// Adds one more acceptable column.
    ///
    /// For a threshold this lowers the threshold when `column` is left of it.
    #[must_use]
    pub fn add_acceptable(&self, column: usize) -> Self {
        match self {
            Self::ExactSet(set) => {
                let mut set = set.clone();
                set.0.insert(column);
                Self::ExactSet(set)
            }
            Self::AtLeast(threshold) => Self::AtLeast((*threshold).min(column)),
        }
    }

    /// Smallest acceptable column.
    #[must_use]
    pub fn first(&self) -> usize {
        match self {
            Self::ExactSet(set) => set.iter().next().unwrap_or_default(),
            Self::AtLeast(threshold) => *threshold,
        }
    }

    /// Returns `true` if more than one exact column is acceptable.
    #[must_use]
    pub fn is_multi(&self) -> bool {
        matches!(self, Self::ExactSet(set) if set.0.len() > 1)
    }

    /// Renders the level for diagnostics: `12`, `8, 12` or `>= 12`.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for IndentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactSet(set) => {
                for (i, column) in set.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{column}")?;
                }
                Ok(())
            }
            Self::AtLeast(threshold) => write!(f, ">= {threshold}"),
        }
    }
}
