//! Maze-to-graph construction
//!
//! Converts a rectangular grid of junctures into graph vertices and
//! weighted directed edges, reading adjacency and weights from a
//! [`MazeSource`]. The builder uses only the store's vertex and edge
//! insertion operations; everything about the maze itself stays behind the
//! trait.

use serde::Serialize;

use crate::error::Result;
use crate::graph::Graph;

/// A maze grid cell, identified by its coordinates with `(0, 0)` the upper
/// left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Juncture {
    pub x: u32,
    pub y: u32,
}

impl Juncture {
    pub fn new(x: u32, y: u32) -> Self {
        Juncture { x, y }
    }

    /// The adjacent juncture in the given direction, or `None` at the grid
    /// edge.
    fn step(self, direction: Direction, width: u32, height: u32) -> Option<Juncture> {
        match direction {
            Direction::Up if self.y > 0 => Some(Juncture::new(self.x, self.y - 1)),
            Direction::Down if self.y + 1 < height => Some(Juncture::new(self.x, self.y + 1)),
            Direction::Left if self.x > 0 => Some(Juncture::new(self.x - 1, self.y)),
            Direction::Right if self.x + 1 < width => Some(Juncture::new(self.x + 1, self.y)),
            _ => None,
        }
    }
}

/// The four cardinal moves through a maze. `Up` decreases `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The reverse move; a passage open both ways pairs a direction with
    /// its opposite on the neighboring cell.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Grid data source for maze construction.
///
/// One query per cell and direction covers both obstruction and weight:
/// `None` means the move is blocked by a wall, `Some(w)` carries the weight
/// of the passage in that direction. A passage open in both directions is
/// reported from both sides, which yields the two directed edges.
pub trait MazeSource {
    /// Number of juncture columns.
    fn width(&self) -> u32;

    /// Number of juncture rows.
    fn height(&self) -> u32;

    /// Weight of the passage leaving `juncture` toward `direction`, or
    /// `None` when a wall blocks it. Only called for in-bounds moves.
    fn passage_weight(&self, juncture: Juncture, direction: Direction) -> Option<i64>;
}

/// Build a graph from a maze: one vertex per juncture, one directed edge
/// per open passage, weights as reported by the source.
pub fn build_maze_graph<M: MazeSource>(maze: &M) -> Result<Graph<Juncture>> {
    let mut graph = Graph::new();

    for x in 0..maze.width() {
        for y in 0..maze.height() {
            graph.insert_vertex(Juncture::new(x, y))?;
        }
    }

    for x in 0..maze.width() {
        for y in 0..maze.height() {
            let juncture = Juncture::new(x, y);
            for direction in Direction::ALL {
                let Some(neighbor) = juncture.step(direction, maze.width(), maze.height()) else {
                    continue;
                };
                if let Some(weight) = maze.passage_weight(juncture, direction) {
                    graph.insert_edge(&juncture, &neighbor, weight)?;
                }
            }
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests;
