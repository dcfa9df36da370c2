//! A* search

use super::priority::Estimated;
use super::SearchAlgorithm;
use crate::errors::Result;
use crate::frontier::PriorityQueue;
use crate::plan::Plan;
use crate::traits::{Heuristic, Problem};

/// Search algorithm which expands the path with the lowest
/// cost plus estimated remaining cost.
pub type AStarSearcher<'p, 'h, P, H> = SearchAlgorithm<
    'p,
    P,
    PriorityQueue<<P as Problem>::State, <P as Problem>::Action, <P as Problem>::Cost>,
    Estimated<'h, H>,
>;

/// Build an A* searcher
pub fn build<'p, 'h, P, H>(problem: &'p P, heuristic: &'h H) -> AStarSearcher<'p, 'h, P, H>
where
    P: Problem,
    H: Heuristic<P> + ?Sized,
{
    SearchAlgorithm::new("astar", problem, Estimated::new(heuristic))
}

/// Perform an A* search, guided by a heuristic.
///
/// Pass [NullHeuristic](crate::NullHeuristic) to search without one,
/// which makes A* behave like uniform cost search. With an admissible
/// and consistent heuristic the returned plan is optimal. The
/// heuristic is trusted: an inadmissible one quietly produces a plan
/// which may cost more than necessary.
pub fn astar<P, H>(problem: &P, heuristic: &H) -> Result<Plan<P::Action>>
where
    P: Problem,
    H: Heuristic<P> + ?Sized,
{
    build(problem, heuristic).run().map(|s| s.plan)
}
