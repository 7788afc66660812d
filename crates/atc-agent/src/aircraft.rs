//! The state of one aircraft.

use atc_core::{AgentId, Direction, GridPos};

use crate::{AgentError, AgentResult};

/// One aircraft and its flight controller state.
///
/// `destination` is fixed at construction.  `position` and `heading` are
/// mutated in place by the simulation driver once per tick; behavior models
/// only ever read them.
///
/// The heading starts unset.  Reading it before assignment is a caller error
/// and fails with [`AgentError::HeadingUnset`] instead of defaulting to some
/// direction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aircraft {
    id:          AgentId,
    position:    GridPos,
    destination: GridPos,
    heading:     Option<Direction>,
}

impl Aircraft {
    /// Place aircraft `id` at `start`, bound for `destination`, heading unset.
    pub fn new(id: AgentId, start: GridPos, destination: GridPos) -> Self {
        Self {
            id,
            position: start,
            destination,
            heading: None,
        }
    }

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> GridPos {
        self.position
    }

    #[inline]
    pub fn destination(&self) -> GridPos {
        self.destination
    }

    /// Current heading.
    ///
    /// # Errors
    /// [`AgentError::HeadingUnset`] if no heading has been assigned yet.
    #[inline]
    pub fn heading(&self) -> AgentResult<Direction> {
        self.heading.ok_or(AgentError::HeadingUnset(self.id))
    }

    /// Current heading, or `None` before the first assignment.
    #[inline]
    pub fn heading_opt(&self) -> Option<Direction> {
        self.heading
    }

    /// `true` once the aircraft sits on its destination cell.
    #[inline]
    pub fn has_arrived(&self) -> bool {
        self.position == self.destination
    }

    pub fn set_heading(&mut self, heading: Direction) {
        self.heading = Some(heading);
    }

    /// Teleport to `position`.  The driver moves aircraft with
    /// [`advance`](Self::advance); this is for scenario setup and tests.
    pub fn set_position(&mut self, position: GridPos) {
        self.position = position;
    }

    /// Where the aircraft would be after one step along `heading`, or
    /// `None` if that cell is off the grid.  Does not touch `self`.
    #[inline]
    pub fn tentative_position(&self, heading: Direction) -> Option<GridPos> {
        self.position.checked_step(heading)
    }

    /// Move one cell along the current heading and return the new position.
    ///
    /// Does not check arrival; the driver is responsible for grounding
    /// aircraft that have reached their destination.
    ///
    /// # Errors
    /// `HeadingUnset` without a heading, `OffGrid` if the step would leave
    /// the grid.  The position is unchanged on error.
    pub fn advance(&mut self) -> AgentResult<GridPos> {
        let heading = self.heading()?;
        self.position = self
            .tentative_position(heading)
            .ok_or(AgentError::OffGrid(self.id, self.position, heading))?;
        Ok(self.position)
    }
}
