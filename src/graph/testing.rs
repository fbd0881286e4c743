//! Shared test fixtures: an event-recording observer, a failing observer,
//! and the scenario graphs the specs exercise.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ObserverError;
use crate::graph::algos::traversal::Discipline;
use crate::graph::observer::GraphObserver;
use crate::graph::store::{Graph, VertexId, Weight};

/// One observed event, in delivery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event<V> {
    SearchStarted(Discipline),
    Visited(V),
    Concluded,
    ShortestPathStarted,
    Finalized(V, Option<Weight>),
    PathComputed(Vec<V>),
}

pub(crate) type EventLog<V> = Rc<RefCell<Vec<Event<V>>>>;

/// Observer that appends every event to a shared log.
pub(crate) struct Recorder<V> {
    log: EventLog<V>,
}

impl<V> Recorder<V> {
    pub(crate) fn new() -> (Self, EventLog<V>) {
        let log: EventLog<V> = Rc::new(RefCell::new(Vec::new()));
        (Recorder { log: Rc::clone(&log) }, log)
    }

    /// A second recorder appending to an existing log; used to observe
    /// duplicate registration and delivery order.
    pub(crate) fn sharing(log: &EventLog<V>) -> Self {
        Recorder {
            log: Rc::clone(log),
        }
    }
}

impl<V: VertexId> GraphObserver<V> for Recorder<V> {
    fn search_started(&mut self, discipline: Discipline) -> Result<(), ObserverError> {
        self.log.borrow_mut().push(Event::SearchStarted(discipline));
        Ok(())
    }

    fn vertex_visited(&mut self, vertex: &V) -> Result<(), ObserverError> {
        self.log.borrow_mut().push(Event::Visited(vertex.clone()));
        Ok(())
    }

    fn search_concluded(&mut self) -> Result<(), ObserverError> {
        self.log.borrow_mut().push(Event::Concluded);
        Ok(())
    }

    fn shortest_path_started(&mut self) -> Result<(), ObserverError> {
        self.log.borrow_mut().push(Event::ShortestPathStarted);
        Ok(())
    }

    fn vertex_finalized(&mut self, vertex: &V, cost: Option<Weight>) -> Result<(), ObserverError> {
        self.log
            .borrow_mut()
            .push(Event::Finalized(vertex.clone(), cost));
        Ok(())
    }

    fn path_computed(&mut self, path: &[V]) -> Result<(), ObserverError> {
        self.log.borrow_mut().push(Event::PathComputed(path.to_vec()));
        Ok(())
    }
}

/// Observer that refuses the named event and accepts everything else.
pub(crate) struct FailOn(pub(crate) &'static str);

impl FailOn {
    fn check(&self, event: &'static str) -> Result<(), ObserverError> {
        if self.0 == event {
            Err(ObserverError::new("refused by test observer"))
        } else {
            Ok(())
        }
    }
}

impl<V: VertexId> GraphObserver<V> for FailOn {
    fn search_started(&mut self, _discipline: Discipline) -> Result<(), ObserverError> {
        self.check("search_started")
    }

    fn vertex_visited(&mut self, _vertex: &V) -> Result<(), ObserverError> {
        self.check("vertex_visited")
    }

    fn search_concluded(&mut self) -> Result<(), ObserverError> {
        self.check("search_concluded")
    }

    fn shortest_path_started(&mut self) -> Result<(), ObserverError> {
        self.check("shortest_path_started")
    }

    fn vertex_finalized(&mut self, _vertex: &V, _cost: Option<Weight>) -> Result<(), ObserverError> {
        self.check("vertex_finalized")
    }

    fn path_computed(&mut self, _path: &[V]) -> Result<(), ObserverError> {
        self.check("path_computed")
    }
}

/// The diamond scenario: vertices {A, B, C, D}, edges A→B(1), B→D(1),
/// A→C(4), C→D(1).
pub(crate) fn diamond() -> Graph<&'static str> {
    let mut graph = Graph::new();
    for v in ["A", "B", "C", "D"] {
        graph.insert_vertex(v).unwrap();
    }
    graph.insert_edge(&"A", &"B", 1).unwrap();
    graph.insert_edge(&"B", &"D", 1).unwrap();
    graph.insert_edge(&"A", &"C", 4).unwrap();
    graph.insert_edge(&"C", &"D", 1).unwrap();
    graph
}

/// Two isolated vertices {A, B} with no edges.
pub(crate) fn disconnected_pair() -> Graph<&'static str> {
    let mut graph = Graph::new();
    graph.insert_vertex("A").unwrap();
    graph.insert_vertex("B").unwrap();
    graph
}
