use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

use num_traits::ops::saturating::SaturatingAdd;

/// Numeric values which can be used as path costs.
///
/// Costs must be totally ordered so that frontiers can rank them,
/// and `Default::default()` must be the zero cost. Priorities are
/// summed with saturating addition, so a huge heuristic estimate
/// ranks last instead of overflowing.
pub trait SearchCost: Debug + Copy + Ord + Add<Output = Self> + SaturatingAdd + Default {}

impl<C> SearchCost for C where C: Debug + Copy + Ord + Add<Output = C> + SaturatingAdd + Default {}

/// A single transition out of a state, as produced by
/// [Problem::successors].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor<S, A, C> {
    /// The state reached by taking this transition.
    pub state: S,

    /// The action which produces the transition.
    pub action: A,

    /// Cost of this single step.
    pub cost: C,
}

impl<S, A, C> Successor<S, A, C> {
    pub fn new(state: S, action: A, cost: C) -> Self {
        Self {
            state,
            action,
            cost,
        }
    }
}

impl<S, A, C> From<(S, A, C)> for Successor<S, A, C> {
    fn from(triple: (S, A, C)) -> Self {
        Successor::new(triple.0, triple.1, triple.2)
    }
}

/// Successor records for a given problem type.
pub type Successors<P> =
    Vec<Successor<<P as Problem>::State, <P as Problem>::Action, <P as Problem>::Cost>>;

/// Provides an interface for conducting searches.
///
/// A problem describes the search space: where to start, when to
/// stop, and how states connect to each other. The search algorithms
/// never look inside of a state, they only use it as a key to track
/// what has already been explored.
pub trait Problem {
    type State: Debug + Clone + Eq + Hash;
    type Action: Debug + Clone;
    type Cost: SearchCost;

    /// The state where the search begins.
    fn start(&self) -> Self::State;

    /// Is this state a goal? Must always give the same answer
    /// for the same state.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Enumerate transitions out of a state. The order matters for
    /// tie-breaking, so it should be the same on every call.
    fn successors(&self, state: &Self::State) -> Successors<Self>;

    /// Total cost of a sequence of actions taken from the start state.
    ///
    /// Returns `None` when the sequence is not a legal path.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> Option<Self::Cost>;
}

/// An estimate of the remaining cost from a state to the nearest goal.
///
/// The estimate should never be negative. For A* to return an optimal
/// plan, the estimate should never overestimate the true remaining cost.
pub trait Heuristic<P>
where
    P: Problem + ?Sized,
{
    fn estimate(&self, state: &P::State, problem: &P) -> P::Cost;
}

impl<P, F> Heuristic<P> for F
where
    P: Problem + ?Sized,
    F: Fn(&P::State, &P) -> P::Cost,
{
    fn estimate(&self, state: &P::State, problem: &P) -> P::Cost {
        self(state, problem)
    }
}

/// The trivial heuristic, which estimates zero everywhere.
///
/// With this heuristic, A* behaves exactly like uniform cost search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullHeuristic;

impl<P> Heuristic<P> for NullHeuristic
where
    P: Problem + ?Sized,
{
    fn estimate(&self, _state: &P::State, _problem: &P) -> P::Cost {
        P::Cost::default()
    }
}
