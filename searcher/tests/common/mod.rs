//! Small explicit graphs for exercising the search algorithms.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use searcher::{Problem, Successor, Successors};

/// A directed graph with labeled, weighted edges.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub start: u32,
    pub goals: HashSet<u32>,
    edges: HashMap<u32, Vec<(u32, String, u32)>>,
}

impl Graph {
    pub fn new(start: u32, goals: &[u32]) -> Self {
        Self {
            start,
            goals: goals.iter().cloned().collect(),
            edges: HashMap::new(),
        }
    }

    pub fn edge(mut self, from: u32, to: u32, action: &str, cost: u32) -> Self {
        self.add_edge(from, to, action, cost);
        self
    }

    pub fn add_edge(&mut self, from: u32, to: u32, action: &str, cost: u32) {
        self.edges
            .entry(from)
            .or_default()
            .push((to, action.to_string(), cost));
    }

    /// Follow actions from the start, returning the state reached.
    pub fn follow(&self, actions: &[String]) -> Option<u32> {
        let mut here = self.start;
        for action in actions {
            let (to, _, _) = self
                .edges
                .get(&here)?
                .iter()
                .find(|(_, a, _)| a == action)?;
            here = *to;
        }
        Some(here)
    }

    /// Cheapest cost to any goal, found by brute force relaxation.
    pub fn optimal_cost(&self) -> Option<u32> {
        let mut best: HashMap<u32, u32> = HashMap::new();
        best.insert(self.start, 0);
        loop {
            let mut changed = false;
            for (from, edges) in &self.edges {
                let here = match best.get(from) {
                    Some(c) => *c,
                    None => continue,
                };
                for (to, _, cost) in edges {
                    let candidate = here + cost;
                    if best.get(to).map(|c| candidate < *c).unwrap_or(true) {
                        best.insert(*to, candidate);
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }
        self.goals.iter().filter_map(|g| best.get(g)).min().cloned()
    }

    /// Cheapest cost from every state to its nearest goal.
    pub fn distances_to_goal(&self) -> HashMap<u32, u32> {
        let mut best: HashMap<u32, u32> = self.goals.iter().map(|g| (*g, 0)).collect();
        loop {
            let mut changed = false;
            for (from, edges) in &self.edges {
                for (to, _, cost) in edges {
                    let there = match best.get(to) {
                        Some(c) => *c,
                        None => continue,
                    };
                    let candidate = there + cost;
                    if best.get(from).map(|c| candidate < *c).unwrap_or(true) {
                        best.insert(*from, candidate);
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }
        best
    }

    /// Fewest edges to any goal.
    pub fn shallowest(&self) -> Option<usize> {
        let mut depth: HashMap<u32, usize> = HashMap::new();
        let mut queue = std::collections::VecDeque::new();
        depth.insert(self.start, 0);
        queue.push_back(self.start);
        while let Some(here) = queue.pop_front() {
            if self.goals.contains(&here) {
                return depth.get(&here).cloned();
            }
            let d = depth[&here];
            for (to, _, _) in self.edges.get(&here).into_iter().flatten() {
                if !depth.contains_key(to) {
                    depth.insert(*to, d + 1);
                    queue.push_back(*to);
                }
            }
        }
        None
    }
}

impl Problem for Graph {
    type State = u32;
    type Action = String;
    type Cost = u32;

    fn start(&self) -> u32 {
        self.start
    }

    fn is_goal(&self, state: &u32) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &u32) -> Successors<Self> {
        self.edges
            .get(state)
            .into_iter()
            .flatten()
            .map(|(to, action, cost)| Successor::new(*to, action.clone(), *cost))
            .collect()
    }

    fn cost_of_actions(&self, actions: &[String]) -> Option<u32> {
        let mut here = self.start;
        let mut total = 0;
        for action in actions {
            let (to, _, cost) = self
                .edges
                .get(&here)?
                .iter()
                .find(|(_, a, _)| a == action)?;
            here = *to;
            total += cost;
        }
        Some(total)
    }
}

/// S0 -> S1 -> S2 -> S3 -> S4, with S4 the goal.
pub fn chain() -> Graph {
    Graph::new(0, &[4])
        .edge(0, 1, "FORWARD", 1)
        .edge(1, 2, "FORWARD", 1)
        .edge(2, 3, "FORWARD", 1)
        .edge(3, 4, "FORWARD", 1)
}

/// Two routes to the goal: one expensive hop, or three cheap ones.
pub fn two_paths() -> Graph {
    Graph::new(0, &[9])
        .edge(0, 9, "JUMP", 10)
        .edge(0, 1, "STEP", 1)
        .edge(1, 2, "STEP", 1)
        .edge(2, 9, "STEP", 1)
}
