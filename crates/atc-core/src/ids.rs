//! Strongly typed aircraft identifier.

use std::fmt;

/// Index of an aircraft in the simulation.  The driver flies exactly two,
/// `AgentId(0)` and `AgentId(1)`; traces print them one-based.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// One-based label ("Plane 1", "Plane 2").
    #[inline]
    pub fn label(self) -> u32 {
        self.0 + 1
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}
