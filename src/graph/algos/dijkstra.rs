//! Label-setting (Dijkstra) shortest-path engine
//!
//! Finalizes every vertex of the graph in non-decreasing cost order, then
//! reconstructs the least-cost path from the predecessor table. Requires
//! non-negative weights, which the store enforces at insertion.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::observer::ObserverSet;
use crate::graph::store::{Adjacency, VertexId, Weight};

/// Min-heap entry for the label-setting loop (used under [`Reverse`]).
///
/// Field order matters: the derived `Ord` compares `cost` first and falls
/// back to the vertex, so among equal-cost candidates the least vertex
/// under `Ord` finalizes first. That is the documented deterministic
/// tie-break rule.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct HeapEntry<V> {
    cost: Weight,
    vertex: V,
}

/// Least-cost route reported by [`shortest_path`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath<V> {
    /// Vertex sequence reading start → end.
    pub vertices: Vec<V>,
    /// Total weight of consecutive edges along the sequence.
    pub cost: Weight,
}

impl<V> ShortestPath<V> {
    /// Number of edges on the route.
    pub fn len(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// True when start equals end and the route has no edges.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compute the least-cost path from `start` to `end`.
///
/// Emits `shortest_path_started`, then `vertex_finalized` once per vertex
/// in non-decreasing cost order (vertices unreachable from `start` come
/// last with cost `None`), then `path_computed` once every vertex is
/// finalized. The computation never stops early at `end`.
///
/// Fails with [`GraphError::UnreachableTarget`] when the predecessor chain
/// from `end` does not connect back to `start`; no `path_computed` event is
/// emitted in that case.
#[tracing::instrument(
    skip(adjacency, observers),
    fields(start = ?start, end = ?end, vertices = adjacency.len())
)]
pub(crate) fn shortest_path<V: VertexId>(
    adjacency: &Adjacency<V>,
    observers: &mut ObserverSet<V>,
    start: &V,
    end: &V,
) -> Result<ShortestPath<V>> {
    if !adjacency.contains_key(start) {
        return Err(GraphError::unknown_vertex(start));
    }
    if !adjacency.contains_key(end) {
        return Err(GraphError::unknown_vertex(end));
    }

    observers.shortest_path_started()?;

    // Tentative costs; a vertex absent from the map is at the infinite
    // sentinel. Predecessors stay unset until the first relaxation.
    let mut cost: HashMap<V, Weight> = HashMap::new();
    let mut predecessor: HashMap<V, V> = HashMap::new();
    let mut finalized: HashSet<V> = HashSet::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry<V>>> = BinaryHeap::new();

    cost.insert(start.clone(), 0);
    heap.push(Reverse(HeapEntry {
        cost: 0,
        vertex: start.clone(),
    }));

    while let Some(Reverse(HeapEntry {
        cost: current_cost,
        vertex,
    })) = heap.pop()
    {
        // A vertex relaxed more than once leaves stale entries behind; the
        // cheapest one finalized it already.
        if finalized.contains(&vertex) {
            continue;
        }
        finalized.insert(vertex.clone());
        observers.vertex_finalized(&vertex, Some(current_cost))?;

        if let Some(outgoing) = adjacency.get(&vertex) {
            for (neighbor, weight) in outgoing {
                if finalized.contains(neighbor) {
                    continue;
                }
                let relaxed = current_cost + weight;
                let improves = match cost.get(neighbor) {
                    Some(&known) => relaxed < known,
                    None => true,
                };
                if improves {
                    cost.insert(neighbor.clone(), relaxed);
                    predecessor.insert(neighbor.clone(), vertex.clone());
                    heap.push(Reverse(HeapEntry {
                        cost: relaxed,
                        vertex: neighbor.clone(),
                    }));
                }
            }
        }
    }

    // Vertices the heap never reached stay at the infinite cost. Finalize
    // them after all reachable ones, in ascending vertex order, so the
    // event stream still covers every vertex in non-decreasing cost order.
    for vertex in adjacency.keys() {
        if !finalized.contains(vertex) {
            observers.vertex_finalized(vertex, None)?;
        }
    }

    let vertices = reconstruct(start, end, &predecessor)?;
    let total = cost
        .get(end)
        .copied()
        .ok_or_else(|| GraphError::unreachable_target(start, end))?;

    observers.path_computed(&vertices)?;
    tracing::debug!(cost = total, edges = vertices.len() - 1, "shortest path computed");

    Ok(ShortestPath {
        vertices,
        cost: total,
    })
}

/// Walk predecessor references from `end` back to `start`, then reverse so
/// the sequence reads start → end.
///
/// A vertex other than `start` with no predecessor means the chain is
/// broken and `end` is unreachable.
fn reconstruct<V: VertexId>(
    start: &V,
    end: &V,
    predecessor: &HashMap<V, V>,
) -> Result<Vec<V>> {
    let mut path = vec![end.clone()];
    let mut current = end;
    while current != start {
        match predecessor.get(current) {
            Some(pred) => {
                path.push(pred.clone());
                current = pred;
            }
            None => return Err(GraphError::unreachable_target(start, end)),
        }
    }
    path.reverse();
    Ok(path)
}
