use std::fmt;

use crate::error::AlignError;

// set up enums and structs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    X,
    Y,
    Z,
}

impl Direction {
    pub fn to_usize(&self) -> usize {
        match self {
            Direction::X => 0,
            Direction::Y => 1,
            Direction::Z => 2,
        }
    }

    /// Maps a commandline axis number to a direction.
    pub fn from_index(val: usize) -> Result<Self, AlignError> {
        match val {
            0 => Ok(Direction::X),
            1 => Ok(Direction::Y),
            2 => Ok(Direction::Z),
            _ => Err(AlignError::InvalidAxis { axis: val }),
        }
    }

    /// The two axes left free when slicing along `self`, in ascending order.
    ///
    /// The first one ends up as the vertical axis of the displayed slice and
    /// the second as the horizontal axis.
    pub fn display_axes(&self) -> (usize, usize) {
        match self {
            Direction::X => (1, 2),
            Direction::Y => (0, 2),
            Direction::Z => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::X => write!(f, "0"),
            Direction::Y => write!(f, "1"),
            Direction::Z => write!(f, "2"),
        }
    }
}
