pub mod forward;
pub mod inheritance;
pub mod topology;

use crate::error::NetworkError;
pub use neurotile_data::{Edge, Layer, Network, Node};
use rand::Rng;

pub use topology::create_network_random_with_rng;

/// Trait defining the core logic for layered feedforward networks.
pub trait NetworkLogic: Sized {
    /// Builds a fully connected network with randomised node defaults and
    /// edge weights/biases in `[-1, 1]`.
    fn new_random_with_rng<R: Rng>(
        num_layers: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, NetworkError>;

    /// Structurally identical copy with every node default and every edge
    /// weight/bias offset by an independent draw in
    /// `[-max_variance, +max_variance]`.
    fn inherit<R: Rng>(&self, max_variance: f64, rng: &mut R) -> Result<Self, NetworkError>;

    /// As [`NetworkLogic::inherit`], failing when no parent is given.
    fn try_inherit<R: Rng>(
        parent: Option<&Self>,
        max_variance: f64,
        rng: &mut R,
    ) -> Result<Self, NetworkError>;

    fn num_layers(&self) -> usize;
    fn input_layer(&self) -> LayerView<'_>;
    fn output_layer(&self) -> LayerView<'_>;
    fn layer_at(&self, index: usize) -> Option<LayerView<'_>>;
    fn input_layer_mut(&mut self) -> LayerViewMut<'_>;
    fn layer_at_mut(&mut self, index: usize) -> Option<LayerViewMut<'_>>;

    /// Restores every node's current value to its default.
    fn reset(&mut self);

    /// One forward pass. Contributions accumulate onto destination nodes;
    /// callers reset between fresh passes when they need clean sums.
    fn propagate(&mut self);

    fn output_value(&self, index: usize) -> Option<f64>;
    fn output_by_name(&self, name: &str) -> Option<f64>;
    fn node_count(&self) -> usize;
    fn edge_count(&self) -> usize;
}

impl NetworkLogic for Network {
    fn new_random_with_rng<R: Rng>(
        num_layers: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, NetworkError> {
        topology::create_network_random_with_rng(num_layers, layer_sizes, rng)
    }

    fn inherit<R: Rng>(&self, max_variance: f64, rng: &mut R) -> Result<Self, NetworkError> {
        inheritance::inherit_with_rng(self, max_variance, rng)
    }

    fn try_inherit<R: Rng>(
        parent: Option<&Self>,
        max_variance: f64,
        rng: &mut R,
    ) -> Result<Self, NetworkError> {
        let parent = parent.ok_or(NetworkError::MissingParent)?;
        inheritance::inherit_with_rng(parent, max_variance, rng)
    }

    fn num_layers(&self) -> usize {
        self.layers.len()
    }

    fn input_layer(&self) -> LayerView<'_> {
        view(self, 0)
    }

    fn output_layer(&self) -> LayerView<'_> {
        view(self, self.layers.len() - 1)
    }

    fn layer_at(&self, index: usize) -> Option<LayerView<'_>> {
        (index < self.layers.len()).then(|| view(self, index))
    }

    fn input_layer_mut(&mut self) -> LayerViewMut<'_> {
        view_mut(self, 0)
    }

    fn layer_at_mut(&mut self, index: usize) -> Option<LayerViewMut<'_>> {
        if index < self.layers.len() {
            Some(view_mut(self, index))
        } else {
            None
        }
    }

    fn reset(&mut self) {
        for node in &mut self.nodes {
            node.reset();
        }
    }

    fn propagate(&mut self) {
        forward::propagate(self)
    }

    fn output_value(&self, index: usize) -> Option<f64> {
        self.output_layer().node(index).map(|n| n.current)
    }

    fn output_by_name(&self, name: &str) -> Option<f64> {
        self.output_layer().node_by_name(name).map(|n| n.current)
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

fn view(network: &Network, index: usize) -> LayerView<'_> {
    let layer = &network.layers[index];
    LayerView {
        index,
        is_output: layer.is_output,
        nodes: &network.nodes[layer.nodes.clone()],
        edges: &network.edges[layer.edges.clone()],
    }
}

fn view_mut(network: &mut Network, index: usize) -> LayerViewMut<'_> {
    let layer = &network.layers[index];
    LayerViewMut {
        index,
        is_output: layer.is_output,
        nodes: &mut network.nodes[layer.nodes.clone()],
    }
}

/// Read-only window onto one layer.
#[derive(Debug, Clone, Copy)]
pub struct LayerView<'a> {
    index: usize,
    is_output: bool,
    nodes: &'a [Node],
    edges: &'a [Edge],
}

impl<'a> LayerView<'a> {
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn is_output(&self) -> bool {
        self.is_output
    }

    #[must_use]
    pub fn node(&self, index: usize) -> Option<&'a Node> {
        self.nodes.get(index)
    }

    /// First node carrying `name`. Layers are small, so a scan is enough.
    #[must_use]
    pub fn node_by_name(&self, name: &str) -> Option<&'a Node> {
        self.nodes.iter().find(|n| n.has_name(name))
    }

    #[must_use]
    pub fn nodes(&self) -> &'a [Node] {
        self.nodes
    }

    /// Outgoing edges, grouped by source node.
    #[must_use]
    pub fn edges(&self) -> &'a [Edge] {
        self.edges
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + 'a {
        self.nodes.iter().map(|n| n.current)
    }
}

/// Mutable window onto one layer's nodes.
#[derive(Debug)]
pub struct LayerViewMut<'a> {
    index: usize,
    is_output: bool,
    nodes: &'a mut [Node],
}

impl LayerViewMut<'_> {
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn is_output(&self) -> bool {
        self.is_output
    }

    /// Overwrites every node's current value, in order.
    pub fn set_inputs(&mut self, values: &[f64]) -> Result<(), NetworkError> {
        if values.len() != self.nodes.len() {
            return Err(NetworkError::InputLength {
                expected: self.nodes.len(),
                actual: values.len(),
            });
        }
        for (node, &value) in self.nodes.iter_mut().zip(values) {
            node.current = value;
        }
        Ok(())
    }

    /// Returns false when `index` is past the end of the layer.
    pub fn set_value(&mut self, index: usize, value: f64) -> bool {
        match self.nodes.get_mut(index) {
            Some(node) => {
                node.current = value;
                true
            }
            None => false,
        }
    }

    pub fn set_name(&mut self, index: usize, name: impl Into<String>) -> bool {
        match self.nodes.get_mut(index) {
            Some(node) => {
                node.name = Some(name.into());
                true
            }
            None => false,
        }
    }

    pub fn node_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.nodes.get_mut(index)
    }

    pub fn reset(&mut self) {
        for node in self.nodes.iter_mut() {
            node.reset();
        }
    }
}
