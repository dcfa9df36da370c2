//! The result of a successful search.

use std::ops::Deref;

/// An ordered sequence of actions leading from the start state to a goal.
///
/// An empty plan means the start state was already a goal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Plan<A> {
    actions: Vec<A>,
}

impl<A> Plan<A> {
    /// Number of actions in this plan.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Consume the plan, returning the underlying actions.
    pub fn into_actions(self) -> Vec<A> {
        self.actions
    }
}

impl<A> From<Vec<A>> for Plan<A> {
    fn from(actions: Vec<A>) -> Self {
        Self { actions }
    }
}

impl<A> Deref for Plan<A> {
    type Target = [A];

    fn deref(&self) -> &Self::Target {
        &self.actions
    }
}

impl<A> IntoIterator for Plan<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}

/// A plan along with some bookkeeping about the search which found it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<A, C> {
    pub plan: Plan<A>,

    /// Cost of the plan, as reported by the problem.
    pub cost: C,

    /// Number of states whose successors were enumerated.
    pub expanded: usize,
}
