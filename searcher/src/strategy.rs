//! Select a search algorithm by name.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::algorithm::{astar, basic, dijkstra, SearchOptions, SolutionOf};
use crate::errors::Result;
use crate::traits::{Heuristic, Problem};

/// The search algorithms available in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Dfs,
    Bfs,
    Ucs,
    AStar,
}

impl Strategy {
    pub fn all() -> impl Iterator<Item = Self> {
        [Strategy::Dfs, Strategy::Bfs, Strategy::Ucs, Strategy::AStar]
            .iter()
            .cloned()
    }

    /// Short name for this strategy.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Dfs => "dfs",
            Strategy::Bfs => "bfs",
            Strategy::Ucs => "ucs",
            Strategy::AStar => "astar",
        }
    }

    /// Does this strategy make use of a heuristic?
    pub fn is_informed(self) -> bool {
        self == Strategy::AStar
    }

    /// Run this strategy against a problem.
    ///
    /// The heuristic is ignored by every strategy other than A*.
    pub fn solve<P, H>(
        self,
        problem: &P,
        heuristic: &H,
        options: SearchOptions,
    ) -> Result<SolutionOf<P>>
    where
        P: Problem,
        H: Heuristic<P> + ?Sized,
    {
        match self {
            Strategy::Dfs => basic::dfs::build(problem).with_options(options).run(),
            Strategy::Bfs => basic::bfs::build(problem).with_options(options).run(),
            Strategy::Ucs => dijkstra::build(problem).with_options(options).run(),
            Strategy::AStar => astar::build(problem, heuristic)
                .with_options(options)
                .run(),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error when parsing a strategy from a string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown search strategy: {0}")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "dfs" | "depthFirstSearch" => Ok(Strategy::Dfs),
            "bfs" | "breadthFirstSearch" => Ok(Strategy::Bfs),
            "ucs" | "uniformCostSearch" => Ok(Strategy::Ucs),
            "astar" | "aStarSearch" => Ok(Strategy::AStar),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}
