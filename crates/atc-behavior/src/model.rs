//! The `BehaviorModel` trait — the decision seam the driver calls into.

use atc_agent::{AgentResult, Aircraft};
use atc_core::Direction;

use crate::{Resolution, SimContext};

/// Pluggable heading selection.
///
/// The driver calls [`resolve`](Self::resolve) when both aircraft are en
/// route and within communication range, and [`route`](Self::route) for each
/// en-route aircraft otherwise.  Both receive the pre-tick state; neither may
/// assume the other aircraft has already moved.
///
/// Implementations return headings only.  Assigning them and moving the
/// aircraft is the driver's job.
///
/// # Example
///
/// ```rust,ignore
/// struct HoldCourse;
///
/// impl BehaviorModel for HoldCourse {
///     fn route(&self, a: &Aircraft, _ctx: &SimContext<'_>) -> AgentResult<Direction> {
///         a.heading()
///     }
///
///     fn resolve(&self, a: &Aircraft, b: &Aircraft, _ctx: &SimContext<'_>) -> AgentResult<Resolution> {
///         Ok(Resolution {
///             headings:  [a.heading()?, b.heading()?],
///             pair:      CANDIDATE_PAIRS[3],
///             candidate: 3,
///             resolved:  true,
///         })
///     }
/// }
/// ```
pub trait BehaviorModel {
    /// Heading for one aircraft with no other aircraft in range.
    fn route(
        &self,
        aircraft: &Aircraft,
        ctx:      &SimContext<'_>,
    ) -> AgentResult<Direction>;

    /// Headings for both aircraft while they are in communication range.
    fn resolve(
        &self,
        first:  &Aircraft,
        second: &Aircraft,
        ctx:    &SimContext<'_>,
    ) -> AgentResult<Resolution>;
}

impl<M: BehaviorModel + ?Sized> BehaviorModel for Box<M> {
    fn route(&self, aircraft: &Aircraft, ctx: &SimContext<'_>) -> AgentResult<Direction> {
        (**self).route(aircraft, ctx)
    }

    fn resolve(
        &self,
        first:  &Aircraft,
        second: &Aircraft,
        ctx:    &SimContext<'_>,
    ) -> AgentResult<Resolution> {
        (**self).resolve(first, second, ctx)
    }
}
