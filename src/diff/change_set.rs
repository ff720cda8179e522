//! Changes between two coordinate sets

use crate::coordinate::CoordinateSet;

/// Direction of a change, written as the `value` column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    /// Present in the first snapshot only
    Disappeared,
    /// Present in the second snapshot only
    Appeared,
}

impl ChangeDirection {
    /// Tag written for rows of this direction
    pub fn tag(&self) -> &'static str {
        match self {
            ChangeDirection::Disappeared => "-1",
            ChangeDirection::Appeared => "+1",
        }
    }

    /// Parse a tag back into a direction
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "-1" => Some(ChangeDirection::Disappeared),
            "+1" => Some(ChangeDirection::Appeared),
            _ => None,
        }
    }
}

/// Coordinates that left or joined the target value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    /// In the first set only
    pub disappeared: CoordinateSet,
    /// In the second set only
    pub appeared: CoordinateSet,
}

impl ChangeSet {
    /// Whether both snapshots hold the target at the same positions
    pub fn is_unchanged(&self) -> bool {
        self.disappeared.is_empty() && self.appeared.is_empty()
    }

    /// Number of changed coordinates
    pub fn total(&self) -> usize {
        self.disappeared.len() + self.appeared.len()
    }

    /// Coordinates for one direction
    pub fn for_direction(&self, direction: ChangeDirection) -> &CoordinateSet {
        match direction {
            ChangeDirection::Disappeared => &self.disappeared,
            ChangeDirection::Appeared => &self.appeared,
        }
    }
}

/// Set difference in both directions: `(before - after, after - before)`
pub fn diff(before: &CoordinateSet, after: &CoordinateSet) -> ChangeSet {
    ChangeSet {
        disappeared: before.difference(after).copied().collect(),
        appeared: after.difference(before).copied().collect(),
    }
}
