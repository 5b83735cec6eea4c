//! Cell addresses and dimension labels.
//!
//! A cell is addressed by one [`Label`] per dimension of its tensor type, in
//! the type's dimension order. Mapped dimensions are addressed by string
//! labels, indexed dimensions by non-negative integers. Update sets may carry
//! string labels even for indexed dimensions, so the two forms convert into
//! each other through [`Label::as_index`] and [`Label::as_name`].
//!
//! # Examples
//!
//! ```
//! use celltensor_core::{Address, Label};
//!
//! let addr = Address::new(["8", "9"]);
//! assert_eq!(addr.rank(), 2);
//! assert_eq!(addr.labels()[0].as_index(), Some(8));
//!
//! assert_eq!(Label::from("ten").as_index(), None);
//! assert_eq!(Label::from(7usize).as_name(), "7");
//! ```

use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

/// Label storage, inline for tensors with up to 4 dimensions.
pub type Labels = SmallVec<[Label; 4]>;

/// A single coordinate of an address: a string label or an integer index.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Label {
    /// Label of a mapped dimension (or an index spelled as a string)
    Name(String),
    /// Position along an indexed dimension
    Index(usize),
}

impl Label {
    /// Resolve this label to an index.
    ///
    /// `Index(n)` resolves to `n`. `Name(s)` resolves only when `s` is a
    /// canonical decimal: a non-empty run of ASCII digits that fits in
    /// `usize`, with no leading zero unless the label is `"0"`. Signs and
    /// whitespace are rejected too. This never fails loudly.
    ///
    /// # Examples
    ///
    /// ```
    /// use celltensor_core::Label;
    ///
    /// assert_eq!(Label::from("10").as_index(), Some(10));
    /// assert_eq!(Label::from("0").as_index(), Some(0));
    /// assert_eq!(Label::from("007").as_index(), None);
    /// assert_eq!(Label::from("-1").as_index(), None);
    /// assert_eq!(Label::from("").as_index(), None);
    /// assert_eq!(Label::from(3usize).as_index(), Some(3));
    /// ```
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Label::Index(index) => Some(*index),
            Label::Name(name) => parse_index(name),
        }
    }

    /// The label as a string key, rendering indices in decimal.
    pub fn as_name(&self) -> Cow<'_, str> {
        match self {
            Label::Name(name) => Cow::Borrowed(name),
            Label::Index(index) => Cow::Owned(index.to_string()),
        }
    }

    /// Whether this label is an integer index
    pub fn is_index(&self) -> bool {
        matches!(self, Label::Index(_))
    }
}

/// Parse a string label as a non-negative decimal index.
///
/// Only the canonical spelling parses, so every index has exactly one
/// string label.
pub fn parse_index(label: &str) -> Option<usize> {
    if label.is_empty() || !label.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if label.len() > 1 && label.starts_with('0') {
        return None;
    }
    label.parse().ok()
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Name(name) => f.write_str(name),
            Label::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Label::Name(name.to_string())
    }
}

impl From<String> for Label {
    fn from(name: String) -> Self {
        Label::Name(name)
    }
}

impl From<usize> for Label {
    fn from(index: usize) -> Self {
        Label::Index(index)
    }
}

/// Immutable cell address: one label per dimension, in type order.
///
/// Addresses compare and hash by value, so they serve directly as map keys.
/// An address is only meaningful relative to the tensor type it was built
/// for.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    labels: Labels,
}

impl Address {
    /// Create an address from labels in dimension order
    pub fn new<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Label>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an address made only of integer indices
    ///
    /// # Examples
    ///
    /// ```
    /// use celltensor_core::{Address, Label};
    ///
    /// let addr = Address::from_indices(&[1, 2]);
    /// assert_eq!(addr.labels(), &[Label::Index(1), Label::Index(2)]);
    /// ```
    pub fn from_indices(indices: &[usize]) -> Self {
        Self {
            labels: indices.iter().copied().map(Label::Index).collect(),
        }
    }

    /// The address of the single cell of a rank-0 tensor
    pub fn empty() -> Self {
        Self::default()
    }

    /// Labels in dimension order
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Number of labels
    pub fn rank(&self) -> usize {
        self.labels.len()
    }

    /// Label at position `dim`
    pub fn get(&self, dim: usize) -> Option<&Label> {
        self.labels.get(dim)
    }

    /// Resolve every label to an index, or `None` if any label is not numeric
    pub fn to_indices(&self) -> Option<SmallVec<[usize; 4]>> {
        self.labels.iter().map(Label::as_index).collect()
    }

    /// Same address with every label rendered as a string
    pub fn to_names(&self) -> Self {
        Self {
            labels: self
                .labels
                .iter()
                .map(|label| Label::Name(label.as_name().into_owned()))
                .collect(),
        }
    }
}

impl FromIterator<Label> for Address {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", label)?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_index_rejects_non_digits() {
        assert_eq!(parse_index("12"), Some(12));
        assert_eq!(parse_index("+1"), None);
        assert_eq!(parse_index(" 1"), None);
        assert_eq!(parse_index("1.0"), None);
        assert_eq!(parse_index("abc"), None);
    }

    #[test]
    fn test_parse_index_rejects_leading_zeros() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("10"), Some(10));
        assert_eq!(parse_index("08"), None);
        assert_eq!(parse_index("00"), None);
        assert_eq!(Label::from("09").as_index(), None);
    }

    #[test]
    fn test_parse_index_overflow() {
        let huge = format!("{}0", usize::MAX);
        assert_eq!(parse_index(&huge), None);
    }

    #[test]
    fn test_address_as_map_key() {
        let mut cells = HashMap::new();
        cells.insert(Address::new(["8", "9"]), 11.0);
        assert_eq!(cells.get(&Address::new(["8", "9"])), Some(&11.0));
        assert_eq!(cells.get(&Address::new(["9", "8"])), None);
    }

    #[test]
    fn test_name_and_index_labels_are_distinct_keys() {
        assert_ne!(Address::new(["8"]), Address::from_indices(&[8]));
        assert_eq!(Address::from_indices(&[8]).to_names(), Address::new(["8"]));
    }

    #[test]
    fn test_to_indices() {
        assert_eq!(
            Address::new(["3", "4"]).to_indices().map(|v| v.to_vec()),
            Some(vec![3, 4])
        );
        assert!(Address::new(["3", "x"]).to_indices().is_none());
    }

    #[test]
    fn test_display() {
        let addr = Address::new([Label::from("a"), Label::from(2usize)]);
        assert_eq!(addr.to_string(), "(a,2)");
    }
}
