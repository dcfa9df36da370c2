//! Rules for ranking new frontier entries.

use num_traits::ops::saturating::SaturatingAdd;

use crate::errors::{Result, SearchError};
use crate::traits::{Heuristic, Problem};

/// Defines how a search ranks a newly discovered state.
pub trait Priority<P>
where
    P: Problem,
{
    /// Priority of reaching `state` by following `path` from the start.
    fn priority(&self, problem: &P, state: &P::State, path: &[P::Action]) -> Result<P::Cost>;
}

/// Cost of a path, treating a rejected path as a broken problem.
pub(crate) fn path_cost<P>(problem: &P, path: &[P::Action]) -> Result<P::Cost>
where
    P: Problem,
{
    problem.cost_of_actions(path).ok_or_else(|| {
        SearchError::MalformedProblem(format!(
            "the problem rejected a path built from its own successors: {:?}",
            path
        ))
    })
}

/// No ranking at all, the frontier order is all that matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unordered;

impl<P> Priority<P> for Unordered
where
    P: Problem,
{
    fn priority(&self, _problem: &P, _state: &P::State, _path: &[P::Action]) -> Result<P::Cost> {
        Ok(P::Cost::default())
    }
}

/// Rank by the total cost of the path so far.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathCost;

impl<P> Priority<P> for PathCost
where
    P: Problem,
{
    fn priority(&self, problem: &P, _state: &P::State, path: &[P::Action]) -> Result<P::Cost> {
        path_cost(problem, path)
    }
}

/// Rank by the total cost of the path so far, plus a heuristic
/// estimate of the cost remaining.
#[derive(Debug)]
pub struct Estimated<'h, H>
where
    H: ?Sized,
{
    heuristic: &'h H,
}

impl<'h, H> Estimated<'h, H>
where
    H: ?Sized,
{
    pub fn new(heuristic: &'h H) -> Self {
        Self { heuristic }
    }
}

impl<'h, P, H> Priority<P> for Estimated<'h, H>
where
    P: Problem,
    H: Heuristic<P> + ?Sized,
{
    fn priority(&self, problem: &P, state: &P::State, path: &[P::Action]) -> Result<P::Cost> {
        let estimate = self.heuristic.estimate(state, problem);
        if estimate < P::Cost::default() {
            return Err(SearchError::MalformedProblem(format!(
                "negative heuristic estimate {:?} at {:?}",
                estimate, state
            )));
        }
        let cost = path_cost(problem, path)?;
        Ok(SaturatingAdd::saturating_add(&cost, &estimate))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::{Successor, Successors};

    /// Each action is its own cost, every path is legal.
    #[derive(Debug)]
    struct Tally;

    impl Problem for Tally {
        type State = i32;
        type Action = i32;
        type Cost = i32;

        fn start(&self) -> i32 {
            0
        }

        fn is_goal(&self, _state: &i32) -> bool {
            false
        }

        fn successors(&self, state: &i32) -> Successors<Self> {
            vec![Successor::new(state + 1, 1, 1)]
        }

        fn cost_of_actions(&self, actions: &[i32]) -> Option<i32> {
            Some(actions.iter().sum())
        }
    }

    #[test]
    fn rules() {
        let path = &[2, 3][..];

        assert_eq!(Unordered.priority(&Tally, &5, path), Ok(0));
        assert_eq!(PathCost.priority(&Tally, &5, path), Ok(5));

        let h = |state: &i32, _: &Tally| 10 - *state;
        assert_eq!(Estimated::new(&h).priority(&Tally, &5, path), Ok(10));
    }

    #[test]
    fn huge_estimate() {
        let h = |_: &i32, _: &Tally| i32::MAX;
        assert_eq!(
            Estimated::new(&h).priority(&Tally, &5, &[2, 3][..]),
            Ok(i32::MAX)
        );
    }

    #[test]
    fn negative_estimate() {
        let h = |_: &i32, _: &Tally| -> i32 { -1 };
        assert!(matches!(
            Estimated::new(&h).priority(&Tally, &0, &[1][..0]),
            Err(SearchError::MalformedProblem(_))
        ));
    }
}
