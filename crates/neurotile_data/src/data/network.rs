use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A single unit of a layered network.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Node {
    /// Value accumulated during the current propagation.
    pub current: f64,
    /// Value the node returns to on reset.
    pub default: f64,
    /// Optional label. Labels are not required to be unique.
    pub name: Option<String>,
}

impl Node {
    #[must_use]
    pub fn new(default: f64) -> Self {
        Self {
            current: default,
            default,
            name: None,
        }
    }

    /// True when this node carries exactly the given label.
    /// Unnamed nodes never match.
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }

    pub fn reset(&mut self) {
        self.current = self.default;
    }
}

/// A one-way connection from a node to a node in the following layer.
///
/// `source` and `dest` are positions within their own layers, never
/// arena indices.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Edge {
    /// Index of the source node within the owning layer.
    pub source: usize,
    /// Index of the destination layer.
    pub dest_layer: usize,
    /// Index of the destination node within `dest_layer`.
    pub dest: usize,
    /// Horizontal scale applied to the source value.
    pub weight: f64,
    /// Horizontal shift applied to the source value.
    pub bias: f64,
}

/// A contiguous slice of the node arena plus the edges leaving it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Layer {
    /// Node range in [`Network::nodes`].
    pub nodes: Range<usize>,
    /// Edge range in [`Network::edges`]. Empty for the output layer.
    pub edges: Range<usize>,
    /// Whether this is the terminal layer of the network.
    pub is_output: bool,
}

impl Layer {
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A strictly layered, fully connected feedforward network.
///
/// Nodes and edges live in flat arenas; layers hold ranges into them. Edges
/// of layer `i` always point into layer `i + 1`, so the graph is acyclic by
/// construction.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Network {
    /// Node arena, ordered input layer first.
    pub nodes: Vec<Node>,
    /// Edge arena, grouped by source layer.
    pub edges: Vec<Edge>,
    /// Layers in data-flow order; index 0 is the input layer.
    pub layers: Vec<Layer>,
}

impl Network {
    /// Sizes of every layer, input first.
    #[must_use]
    pub fn layer_sizes(&self) -> Vec<usize> {
        self.layers.iter().map(Layer::len).collect()
    }
}
