//! The standard behavior model.

use atc_agent::{AgentResult, Aircraft};
use atc_core::Direction;

use crate::{BehaviorModel, Resolution, SimContext, resolve_pair_within, route_toward_destination};

/// Greedy quadrant routing out of range, fixed-order paired turn search in
/// range.
///
/// The avoidance search uses `ctx.config.collision_radius`.
#[derive(Copy, Clone, Debug, Default)]
pub struct GreedyAvoidance;

impl BehaviorModel for GreedyAvoidance {
    fn route(&self, aircraft: &Aircraft, _ctx: &SimContext<'_>) -> AgentResult<Direction> {
        route_toward_destination(aircraft)
    }

    fn resolve(
        &self,
        first:  &Aircraft,
        second: &Aircraft,
        ctx:    &SimContext<'_>,
    ) -> AgentResult<Resolution> {
        resolve_pair_within(first, second, ctx.config.collision_radius)
    }
}
