//! Shared breadth-first / depth-first traversal engine
//!
//! Both searches run the same loop and differ only in the frontier's
//! removal order: FIFO for breadth-first, LIFO for depth-first.

use std::collections::{HashSet, VecDeque};

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::observer::ObserverSet;
use crate::graph::store::{Adjacency, VertexId};

/// Frontier removal order for the traversal engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Discipline {
    /// First-in-first-out frontier (queue).
    BreadthFirst,
    /// Last-in-first-out frontier (stack).
    DepthFirst,
}

/// Pending vertex candidates awaiting processing.
///
/// May contain duplicates: neighbors are pushed without a membership check,
/// and deduplication happens against the visited set only at removal.
enum Frontier<V> {
    Fifo(VecDeque<V>),
    Lifo(Vec<V>),
}

impl<V> Frontier<V> {
    fn new(discipline: Discipline) -> Self {
        match discipline {
            Discipline::BreadthFirst => Frontier::Fifo(VecDeque::new()),
            Discipline::DepthFirst => Frontier::Lifo(Vec::new()),
        }
    }

    fn push(&mut self, vertex: V) {
        match self {
            Frontier::Fifo(queue) => queue.push_back(vertex),
            Frontier::Lifo(stack) => stack.push(vertex),
        }
    }

    fn pop(&mut self) -> Option<V> {
        match self {
            Frontier::Fifo(queue) => queue.pop_front(),
            Frontier::Lifo(stack) => stack.pop(),
        }
    }
}

/// Search from `start`, concluding as soon as `target` is visited.
///
/// Emits `search_started`, then `vertex_visited` per distinct vertex in
/// visit order, then `search_concluded` immediately after the target's
/// visit. If the frontier empties first the search ends silently with
/// `Ok(false)`: no conclusion event is emitted and the caller treats the
/// absence as "target unreachable".
///
/// Neighbors are pushed in ascending vertex order, so visit order is
/// deterministic for a fixed graph.
#[tracing::instrument(
    skip(adjacency, observers),
    fields(start = ?start, target = ?target, discipline = ?discipline)
)]
pub(crate) fn traverse<V: VertexId>(
    adjacency: &Adjacency<V>,
    observers: &mut ObserverSet<V>,
    start: &V,
    target: &V,
    discipline: Discipline,
) -> Result<bool> {
    if !adjacency.contains_key(start) {
        return Err(GraphError::unknown_vertex(start));
    }
    if !adjacency.contains_key(target) {
        return Err(GraphError::unknown_vertex(target));
    }

    observers.search_started(discipline)?;

    let mut visited: HashSet<V> = HashSet::new();
    let mut frontier = Frontier::new(discipline);
    frontier.push(start.clone());

    while let Some(candidate) = frontier.pop() {
        if visited.contains(&candidate) {
            continue;
        }
        observers.vertex_visited(&candidate)?;

        if candidate == *target {
            observers.search_concluded()?;
            tracing::debug!(visited = visited.len() + 1, "target reached");
            return Ok(true);
        }

        visited.insert(candidate.clone());
        if let Some(outgoing) = adjacency.get(&candidate) {
            for neighbor in outgoing.keys() {
                if !visited.contains(neighbor) {
                    frontier.push(neighbor.clone());
                }
            }
        }
    }

    tracing::debug!(visited = visited.len(), "frontier exhausted, target not reached");
    Ok(false)
}
