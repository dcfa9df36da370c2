//! Provides the building blocks for search algorithms

use std::collections::HashSet;

use tracing::{debug, debug_span, info, trace};

use self::priority::Priority;
use crate::errors::{Result, SearchError};
use crate::frontier::{Entry, Frontier};
use crate::plan::Solution;
use crate::traits::Problem;

pub mod astar;
pub mod basic;
pub mod dijkstra;
pub mod priority;

/// A frontier entry for a given problem type.
pub type EntryOf<P> = Entry<<P as Problem>::State, <P as Problem>::Action, <P as Problem>::Cost>;

/// The solution type produced by searching a given problem type.
pub type SolutionOf<P> = Solution<<P as Problem>::Action, <P as Problem>::Cost>;

/// Tuning knobs which apply to every search algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Give up after expanding this many states.
    pub limit: Option<usize>,

    /// Log progress every time this many states have been expanded.
    pub progress: Option<usize>,
}

#[derive(Debug)]
struct StepLimit {
    current: usize,
    maximum: usize,
}

impl StepLimit {
    fn new(limit: usize) -> Self {
        Self {
            current: 0,
            maximum: limit,
        }
    }

    fn increment(&mut self) -> Result<()> {
        self.current += 1;

        if self.current > self.maximum {
            Err(SearchError::StepLimitExhausted(self.maximum))
        } else {
            Ok(())
        }
    }
}

/// Implementation of search, using generic components.
///
/// Uses a generic frontier (F) to decide which state to look at next,
/// and a generic priority rule (R) to rank new frontier entries. Every
/// strategy shares the same visited-set and path bookkeeping.
///
/// A state is marked visited the first time it is expanded and is never
/// expanded again, even if a cheaper path to it turns up later. For
/// uniform cost search with non-negative step costs, and A* with a
/// consistent heuristic, the first expansion of a state is always along
/// a cheapest path, so nothing is lost. Inconsistent heuristics can
/// produce plans which are not optimal.
#[derive(Debug)]
pub struct SearchAlgorithm<'p, P, F, R>
where
    P: Problem,
    F: Frontier<Item = EntryOf<P>>,
    R: Priority<P>,
{
    name: &'static str,
    problem: &'p P,
    rule: R,
    frontier: F,
    visited: HashSet<P::State>,
    options: SearchOptions,
}

impl<'p, P, F, R> SearchAlgorithm<'p, P, F, R>
where
    P: Problem,
    F: Frontier<Item = EntryOf<P>>,
    R: Priority<P>,
{
    pub(crate) fn new(name: &'static str, problem: &'p P, rule: R) -> Self {
        Self {
            name,
            problem,
            rule,
            frontier: F::default(),
            visited: HashSet::new(),
            options: SearchOptions::default(),
        }
    }

    /// Replace the options used by this search.
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Set a step limit for this search algorithm.
    ///
    /// When this many states have been expanded,
    /// the search algorithm will return an error.
    pub fn set_limit(&mut self, limit: usize) {
        self.options.limit = Some(limit)
    }

    /// Enumerate the successors of a state, and add any which
    /// haven't been visited to the frontier.
    fn expand(&mut self, state: &P::State, path: &[P::Action]) -> Result<()> {
        for successor in self.problem.successors(state) {
            if successor.cost < P::Cost::default() {
                return Err(SearchError::MalformedProblem(format!(
                    "negative step cost {:?} from {:?} via {:?}",
                    successor.cost, state, successor.action
                )));
            }

            if self.visited.contains(&successor.state) {
                continue;
            }

            let mut next = Vec::with_capacity(path.len() + 1);
            next.extend_from_slice(path);
            next.push(successor.action);

            let priority = self.rule.priority(self.problem, &successor.state, &next)?;
            self.frontier
                .push(Entry::new(successor.state, next, priority));
        }
        Ok(())
    }

    /// Run the search to completion.
    pub fn run(mut self) -> Result<SolutionOf<P>> {
        let span = debug_span!("search", strategy = self.name);
        let _enter = span.enter();

        let mut counter = self.options.limit.map(StepLimit::new);
        let progress = self.options.progress.filter(|&n| n > 0);
        let mut expanded = 0;

        let start = self.problem.start();
        debug!(?start, "starting search");
        self.frontier
            .push(Entry::new(start, Vec::new(), P::Cost::default()));

        while !self.frontier.is_empty() {
            let Entry { state, path, .. } = self.frontier.extract()?;

            if self.problem.is_goal(&state) {
                let cost = priority::path_cost(self.problem, &path)?;
                debug!(
                    goal = ?state,
                    steps = path.len(),
                    ?cost,
                    expanded,
                    "found solution"
                );
                return Ok(Solution {
                    plan: path.into(),
                    cost,
                    expanded,
                });
            }

            if self.visited.contains(&state) {
                continue;
            }

            if let Some(c) = counter.as_mut() {
                c.increment()?;
            }

            trace!(?state, depth = path.len(), "expanding");
            self.visited.insert(state.clone());
            self.expand(&state, &path)?;
            expanded += 1;

            if let Some(n) = progress {
                if expanded % n == 0 {
                    info!(
                        expanded,
                        frontier = self.frontier.len(),
                        visited = self.visited.len(),
                        "search progress"
                    );
                }
            }
        }

        debug!(expanded, "search space exhausted");
        Err(SearchError::NoSolution)
    }
}
