use std::collections::HashMap;

use super::*;

/// Grid fixture: every passage is walled unless explicitly opened.
struct GridMaze {
    width: u32,
    height: u32,
    passages: HashMap<(Juncture, Direction), i64>,
}

impl GridMaze {
    fn walled(width: u32, height: u32) -> Self {
        GridMaze {
            width,
            height,
            passages: HashMap::new(),
        }
    }

    fn open_one_way(&mut self, x: u32, y: u32, direction: Direction, weight: i64) {
        self.passages
            .insert((Juncture::new(x, y), direction), weight);
    }

    fn open_both_ways(&mut self, x: u32, y: u32, direction: Direction, weight: i64) {
        let juncture = Juncture::new(x, y);
        self.open_one_way(x, y, direction, weight);
        let neighbor = juncture
            .step(direction, self.width, self.height)
            .expect("passage opened out of bounds");
        self.passages
            .insert((neighbor, direction.opposite()), weight);
    }
}

impl MazeSource for GridMaze {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn passage_weight(&self, juncture: Juncture, direction: Direction) -> Option<i64> {
        self.passages.get(&(juncture, direction)).copied()
    }
}

#[test]
fn every_juncture_becomes_a_vertex() {
    let maze = GridMaze::walled(3, 2);
    let graph = build_maze_graph(&maze).unwrap();

    assert_eq!(graph.vertex_count(), 6);
    assert!(graph.contains_vertex(&Juncture::new(2, 1)));
    assert!(!graph.contains_vertex(&Juncture::new(3, 0)));
}

#[test]
fn fully_walled_maze_has_no_edges() {
    let maze = GridMaze::walled(2, 2);
    let graph = build_maze_graph(&maze).unwrap();

    for from in [Juncture::new(0, 0), Juncture::new(1, 0)] {
        for to in [Juncture::new(0, 1), Juncture::new(1, 1)] {
            assert_eq!(graph.weight(&from, &to).unwrap(), None);
        }
    }
}

#[test]
fn open_passage_yields_both_directed_edges() {
    let mut maze = GridMaze::walled(2, 1);
    maze.open_both_ways(0, 0, Direction::Right, 3);
    let graph = build_maze_graph(&maze).unwrap();

    let a = Juncture::new(0, 0);
    let b = Juncture::new(1, 0);
    assert_eq!(graph.weight(&a, &b).unwrap(), Some(3));
    assert_eq!(graph.weight(&b, &a).unwrap(), Some(3));
}

/// Per-direction weights are independent: a one-way report produces only
/// the one directed edge.
#[test]
fn one_way_passage_yields_one_edge() {
    let mut maze = GridMaze::walled(1, 2);
    maze.open_one_way(0, 0, Direction::Down, 2);
    let graph = build_maze_graph(&maze).unwrap();

    let top = Juncture::new(0, 0);
    let bottom = Juncture::new(0, 1);
    assert_eq!(graph.weight(&top, &bottom).unwrap(), Some(2));
    assert_eq!(graph.weight(&bottom, &top).unwrap(), None);
}

#[test]
fn up_decreases_y_from_the_upper_left_origin() {
    let mut maze = GridMaze::walled(1, 2);
    maze.open_one_way(0, 1, Direction::Up, 1);
    let graph = build_maze_graph(&maze).unwrap();

    assert_eq!(
        graph
            .weight(&Juncture::new(0, 1), &Juncture::new(0, 0))
            .unwrap(),
        Some(1)
    );
}

#[test]
fn step_stops_at_the_grid_edge() {
    let corner = Juncture::new(0, 0);
    assert_eq!(corner.step(Direction::Up, 2, 2), None);
    assert_eq!(corner.step(Direction::Left, 2, 2), None);
    assert_eq!(corner.step(Direction::Right, 2, 2), Some(Juncture::new(1, 0)));
    assert_eq!(corner.step(Direction::Down, 2, 2), Some(Juncture::new(0, 1)));

    let far = Juncture::new(1, 1);
    assert_eq!(far.step(Direction::Right, 2, 2), None);
    assert_eq!(far.step(Direction::Down, 2, 2), None);
}

#[test]
fn opposite_directions_pair_up() {
    for direction in Direction::ALL {
        assert_eq!(direction.opposite().opposite(), direction);
    }
}
