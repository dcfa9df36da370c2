//! Uniform cost search, also known as Dijkstra's Algorithm

use super::priority::PathCost;
use super::SearchAlgorithm;
use crate::errors::Result;
use crate::frontier::PriorityQueue;
use crate::plan::Plan;
use crate::traits::Problem;

/// Search algorithm which always expands the cheapest path found so far.
pub type UniformCostSearch<'p, P> = SearchAlgorithm<
    'p,
    P,
    PriorityQueue<<P as Problem>::State, <P as Problem>::Action, <P as Problem>::Cost>,
    PathCost,
>;

/// Build a uniform cost searcher
pub fn build<P>(problem: &P) -> UniformCostSearch<'_, P>
where
    P: Problem,
{
    SearchAlgorithm::new("ucs", problem, PathCost)
}

/// Perform a uniform cost search.
///
/// Uniform cost search behaves like a breadth first search, but always
/// expands the cheapest path even when steps have varying costs. With
/// non-negative step costs the returned plan is optimal.
pub fn ucs<P>(problem: &P) -> Result<Plan<P::Action>>
where
    P: Problem,
{
    build(problem).run().map(|s| s.plan)
}
