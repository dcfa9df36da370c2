pub use bfs::bfs;
pub use dfs::dfs;

pub mod bfs {
    use crate::algorithm::priority::Unordered;
    use crate::algorithm::{EntryOf, SearchAlgorithm};
    use crate::errors::Result;
    use crate::frontier::Queue;
    use crate::plan::Plan;
    use crate::traits::Problem;

    pub type BreadthFirstSearcher<'p, P> = SearchAlgorithm<'p, P, Queue<EntryOf<P>>, Unordered>;

    pub fn build<P>(problem: &P) -> BreadthFirstSearcher<'_, P>
    where
        P: Problem,
    {
        SearchAlgorithm::new("bfs", problem, Unordered)
    }

    /// Breadth-first search, which expands the shallowest states first.
    ///
    /// When every step costs the same, the plan has as few actions
    /// as possible.
    pub fn bfs<P>(problem: &P) -> Result<Plan<P::Action>>
    where
        P: Problem,
    {
        build(problem).run().map(|s| s.plan)
    }
}

pub mod dfs {
    use crate::algorithm::priority::Unordered;
    use crate::algorithm::{EntryOf, SearchAlgorithm};
    use crate::errors::Result;
    use crate::frontier::Stack;
    use crate::plan::Plan;
    use crate::traits::Problem;

    pub type DepthFirstSearcher<'p, P> = SearchAlgorithm<'p, P, Stack<EntryOf<P>>, Unordered>;

    pub fn build<P>(problem: &P) -> DepthFirstSearcher<'_, P>
    where
        P: Problem,
    {
        SearchAlgorithm::new("dfs", problem, Unordered)
    }

    /// Depth-first search, which follows the most recently discovered
    /// successor until it hits a dead end, then backtracks.
    pub fn dfs<P>(problem: &P) -> Result<Plan<P::Action>>
    where
        P: Problem,
    {
        build(problem).run().map(|s| s.plan)
    }
}
