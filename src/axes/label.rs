//! Axis labels
//!
//! Datasets may carry any number of axes. Five of them have a canonical
//! meaning; every other axis is unknown and has to be folded into one of
//! the five before the layout can be written.

use std::fmt;

/// One of the five canonical axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X,
    Y,
    Z,
    Channel,
    Time,
}

impl Axis {
    /// Canonical axes in preference order
    pub const ALL: [Axis; 5] = [Axis::X, Axis::Y, Axis::Z, Axis::Channel, Axis::Time];

    /// Position in `ALL`
    pub fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
            Axis::Channel => 3,
            Axis::Time => 4,
        }
    }

    /// Single-letter code used in dimension order strings
    pub fn letter(&self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
            Axis::Channel => 'C',
            Axis::Time => 'T',
        }
    }

    pub fn from_letter(letter: char) -> Option<Axis> {
        match letter.to_ascii_uppercase() {
            'X' => Some(Axis::X),
            'Y' => Some(Axis::Y),
            'Z' => Some(Axis::Z),
            'C' => Some(Axis::Channel),
            'T' => Some(Axis::Time),
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Axis tag as found in a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisLabel {
    X,
    Y,
    Z,
    Channel,
    Time,
    Unknown,
}

impl AxisLabel {
    /// Classify a free-form axis name by its first letter
    ///
    /// `"x"`, `"Channel"` and `"time"` are canonical; `"lifetime"`, `"U"` or
    /// an empty name are unknown.
    pub fn from_label(label: &str) -> AxisLabel {
        match label.trim().chars().next().and_then(Axis::from_letter) {
            Some(axis) => AxisLabel::from(axis),
            None => AxisLabel::Unknown,
        }
    }

    /// Canonical axis this label names, if any
    pub fn canonical(&self) -> Option<Axis> {
        match self {
            AxisLabel::X => Some(Axis::X),
            AxisLabel::Y => Some(Axis::Y),
            AxisLabel::Z => Some(Axis::Z),
            AxisLabel::Channel => Some(Axis::Channel),
            AxisLabel::Time => Some(Axis::Time),
            AxisLabel::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, AxisLabel::Unknown)
    }
}

impl From<Axis> for AxisLabel {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::X => AxisLabel::X,
            Axis::Y => AxisLabel::Y,
            Axis::Z => AxisLabel::Z,
            Axis::Channel => AxisLabel::Channel,
            Axis::Time => AxisLabel::Time,
        }
    }
}

impl fmt::Display for AxisLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.canonical() {
            Some(axis) => write!(f, "{}", axis),
            None => f.write_str("U"),
        }
    }
}
