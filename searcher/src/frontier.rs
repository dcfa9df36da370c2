//! Frontiers hold the states which have been discovered but not yet
//! expanded, and decide which one the search looks at next.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use crate::errors::{Result, SearchError};

/// A state waiting on the frontier, along with the actions
/// which lead to it from the start state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<S, A, C> {
    pub state: S,
    pub path: Vec<A>,
    pub priority: C,
}

impl<S, A, C> Entry<S, A, C> {
    pub fn new(state: S, path: Vec<A>, priority: C) -> Self {
        Self {
            state,
            path,
            priority,
        }
    }
}

/// Trait used to implement queues of search entries
/// which should be checked for completion.
pub trait Frontier: Default {
    type Item;

    fn pop(&mut self) -> Option<Self::Item>;

    fn push(&mut self, item: Self::Item);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pop the next item, treating an empty frontier as an error.
    fn extract(&mut self) -> Result<Self::Item> {
        self.pop().ok_or(SearchError::EmptyFrontier)
    }
}

/// Last in, first out. Drives depth-first search.
#[derive(Debug)]
pub struct Stack<T> {
    stack: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack { stack: Vec::new() }
    }
}

impl<T> Frontier for Stack<T> {
    type Item = T;

    fn pop(&mut self) -> Option<Self::Item> {
        self.stack.pop()
    }

    fn push(&mut self, item: Self::Item) {
        self.stack.push(item);
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// First in, first out. Drives breadth-first search.
#[derive(Debug)]
pub struct Queue<T> {
    queue: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue {
            queue: VecDeque::new(),
        }
    }
}

impl<T> Frontier for Queue<T> {
    type Item = T;

    fn pop(&mut self) -> Option<Self::Item> {
        self.queue.pop_front()
    }

    fn push(&mut self, item: Self::Item) {
        self.queue.push_back(item);
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Wrapper which sorts entries by priority, and then by the order
/// in which they were inserted.
#[derive(Debug)]
struct Ranked<S, A, C> {
    key: Reverse<(C, usize)>,
    entry: Entry<S, A, C>,
}

impl<S, A, C> PartialEq for Ranked<S, A, C>
where
    C: Ord,
{
    fn eq(&self, other: &Self) -> bool {
        self.key.eq(&other.key)
    }
}

impl<S, A, C> Eq for Ranked<S, A, C> where C: Ord {}

impl<S, A, C> Ord for Ranked<S, A, C>
where
    C: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<S, A, C> PartialOrd for Ranked<S, A, C>
where
    C: Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lowest priority first. Drives uniform cost and A* search.
///
/// Entries with equal priority come out in the order they went in,
/// so searches are reproducible.
#[derive(Debug)]
pub struct PriorityQueue<S, A, C>
where
    C: Ord + Copy,
{
    queue: BinaryHeap<Ranked<S, A, C>>,
    inserted: usize,
}

impl<S, A, C> Default for PriorityQueue<S, A, C>
where
    C: Ord + Copy,
{
    fn default() -> Self {
        PriorityQueue {
            queue: BinaryHeap::new(),
            inserted: 0,
        }
    }
}

impl<S, A, C> Frontier for PriorityQueue<S, A, C>
where
    C: Ord + Copy,
{
    type Item = Entry<S, A, C>;

    fn pop(&mut self) -> Option<Self::Item> {
        self.queue.pop().map(|r| r.entry)
    }

    fn push(&mut self, item: Self::Item) {
        let key = Reverse((item.priority, self.inserted));
        self.inserted += 1;
        self.queue.push(Ranked { key, entry: item });
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
