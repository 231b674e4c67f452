use std::{error, fmt};

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with an integer minimum corner and positive
/// extents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Exclusive right edge.
    pub fn max_x(self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn max_y(self) -> i32 {
        self.y + self.height
    }

    pub fn area(self) -> i64 {
        self.width as i64 * self.height as i64
    }

    /// True when the intersection has non-zero area; touching edges do not
    /// count as overlap.
    pub fn overlaps(self, other: &Self) -> bool {
        self.x < other.max_x()
            && other.x < self.max_x()
            && self.y < other.max_y()
            && other.y < self.max_y()
    }

    pub fn contains_region(self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }
}

/// Describes why a partition request was rejected before any work began.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionError {
    /// A minimum dimension or root extent was zero or negative.
    InvalidArgument { message: String },
}

impl fmt::Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { message } => {
                write!(f, "invalid partition argument: {message}")
            }
        }
    }
}

impl error::Error for PartitionError {}
