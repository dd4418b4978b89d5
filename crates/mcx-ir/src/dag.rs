//! Wire-dependency DAG for depth and layer analysis.

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex as PetNodeIndex};
use petgraph::visit::EdgeRef;
use rustc_hash::FxHashMap;

use crate::gate::ElementaryGate;
use crate::wire::WireId;

/// Node index type for the gate DAG.
pub type NodeIndex = PetNodeIndex<u32>;

/// Dependency graph of a gate list.
///
/// One node per gate, in sequence order; one edge per wire from the
/// previous gate on that wire to the next. Nodes are inserted in sequence
/// order, which is already a topological order, so depth passes walk
/// `node_indices()` directly.
#[derive(Debug, Clone)]
pub struct GateDag {
    /// The underlying graph. Edge weights name the shared wire.
    graph: DiGraph<ElementaryGate, WireId, u32>,
}

impl GateDag {
    /// Build the DAG of a gate list.
    pub fn from_gates<'a>(gates: impl IntoIterator<Item = &'a ElementaryGate>) -> Self {
        let mut graph = DiGraph::default();
        // Wire front: last node seen on each wire.
        let mut wire_front: FxHashMap<WireId, NodeIndex> = FxHashMap::default();

        for gate in gates {
            let node = graph.add_node(*gate);
            for wire in gate.wires() {
                if let Some(prev) = wire_front.insert(wire, node) {
                    graph.add_edge(prev, node, wire);
                }
            }
        }

        Self { graph }
    }

    /// Number of gates.
    #[inline]
    pub fn num_gates(&self) -> usize {
        self.graph.node_count()
    }

    /// Circuit depth: every gate takes one time step.
    pub fn depth(&self) -> usize {
        self.depth_by(|_| 1)
    }

    /// Depth counting only Toffoli-class gates.
    pub fn toffoli_depth(&self) -> usize {
        self.depth_by(|g| usize::from(g.is_toffoli_class()))
    }

    /// Longest weighted path through the DAG.
    pub fn depth_by(&self, weight: impl Fn(&ElementaryGate) -> usize) -> usize {
        self.levels_by(weight).into_iter().max().unwrap_or(0)
    }

    /// Gate indices grouped by ASAP time step (unit weight).
    ///
    /// Gates inside one layer act on pairwise disjoint wires.
    pub fn layers(&self) -> Vec<Vec<usize>> {
        let levels = self.levels_by(|_| 1);
        let depth = levels.iter().copied().max().unwrap_or(0);
        let mut layers = vec![Vec::new(); depth];
        for (gate, level) in levels.into_iter().enumerate() {
            layers[level - 1].push(gate);
        }
        layers
    }

    /// Indices of the gates that must run directly before `gate`.
    pub fn predecessors(&self, gate: usize) -> Vec<usize> {
        let mut preds: Vec<usize> = self
            .graph
            .edges_directed(NodeIndex::new(gate), Direction::Incoming)
            .map(|e| e.source().index())
            .collect();
        preds.sort_unstable();
        preds.dedup();
        preds
    }

    /// Get a reference to the underlying graph.
    pub fn graph(&self) -> &DiGraph<ElementaryGate, WireId, u32> {
        &self.graph
    }

    /// Finishing level of every gate, indexed by sequence position.
    fn levels_by(&self, weight: impl Fn(&ElementaryGate) -> usize) -> Vec<usize> {
        let mut levels = vec![0usize; self.graph.node_count()];
        for node in self.graph.node_indices() {
            let start = self
                .graph
                .edges_directed(node, Direction::Incoming)
                .map(|e| levels[e.source().index()])
                .max()
                .unwrap_or(0);
            levels[node.index()] = start + weight(&self.graph[node]);
        }
        levels
    }
}
