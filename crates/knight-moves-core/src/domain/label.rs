//! Cell labels.

use std::fmt;

/// The letter painted on a grid cell.
///
/// Each label is mapped to a weight by a [`WeightAssignment`](super::WeightAssignment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Label {
    A,
    B,
    C,
}

impl Label {
    /// All labels in alphabet order.
    pub const ALL: [Label; 3] = [Label::A, Label::B, Label::C];

    /// Parses a label from its letter. Lowercase letters are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use knight_moves_core::Label;
    ///
    /// assert_eq!(Label::from_char('B'), Some(Label::B));
    /// assert_eq!(Label::from_char('c'), Some(Label::C));
    /// assert_eq!(Label::from_char('D'), None);
    /// ```
    pub const fn from_char(c: char) -> Option<Label> {
        match c {
            'A' | 'a' => Some(Label::A),
            'B' | 'b' => Some(Label::B),
            'C' | 'c' => Some(Label::C),
            _ => None,
        }
    }

    /// Returns the uppercase letter of this label.
    pub const fn as_char(self) -> char {
        match self {
            Label::A => 'A',
            Label::B => 'B',
            Label::C => 'C',
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
