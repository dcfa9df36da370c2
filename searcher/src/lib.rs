//! Generalized search algorithms for finding a plan through a state space.
//!
//! To use these search algorithms, implement the trait [Problem], which
//! describes the start state, the goal test, how states connect, and what
//! a sequence of actions costs. Then pick one of [dfs], [bfs], [ucs] or
//! [astar], or choose at runtime with a [Strategy].
//!
//! Each search returns a [Plan]: the actions which lead from the start
//! state to a goal. When no goal can be reached, the search fails with
//! [SearchError::NoSolution].

pub mod algorithm;
mod errors;
pub mod frontier;
mod plan;
mod strategy;
mod traits;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use plan::{Plan, Solution};
pub use strategy::{ParseStrategyError, Strategy};
pub use traits::{Heuristic, NullHeuristic, Problem, SearchCost, Successor, Successors};

pub use algorithm::astar::{self, astar};
pub use algorithm::basic::{bfs, dfs};
pub use algorithm::dijkstra::{self, ucs};
pub use algorithm::SearchOptions;
