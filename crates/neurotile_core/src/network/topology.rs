use crate::error::NetworkError;
use neurotile_data::{Edge, Layer, Network, Node};
use rand::Rng;

pub fn create_network_random_with_rng<R: Rng>(
    num_layers: usize,
    layer_sizes: &[usize],
    rng: &mut R,
) -> Result<Network, NetworkError> {
    validate_topology(num_layers, layer_sizes)?;

    // Built output-first so each layer can wire its fan-out to the already
    // built next layer.
    let mut built = Vec::with_capacity(num_layers);
    for index in (0..num_layers).rev() {
        let size = layer_sizes[index];
        let nodes: Vec<Node> = (0..size)
            .map(|_| Node::new(rng.gen_range(-1.0..=1.0)))
            .collect();
        let edges = match layer_sizes.get(index + 1) {
            Some(&next_size) => fan_out(index, size, next_size, rng),
            None => Vec::new(),
        };
        built.push((nodes, edges));
    }
    built.reverse();

    Ok(assemble(built))
}

pub fn validate_topology(num_layers: usize, layer_sizes: &[usize]) -> Result<(), NetworkError> {
    if num_layers < 2 {
        return Err(NetworkError::InvalidTopology(format!(
            "Must have at least 2 layers, got {num_layers}"
        )));
    }
    if layer_sizes.len() != num_layers {
        return Err(NetworkError::InvalidTopology(format!(
            "Number of layers ({num_layers}) must match layer_sizes length ({})",
            layer_sizes.len()
        )));
    }
    if let Some(index) = layer_sizes.iter().position(|&s| s < 1) {
        return Err(NetworkError::InvalidTopology(format!(
            "Layer {index} is empty; layer sizes must be at least one"
        )));
    }
    Ok(())
}

/// Complete bipartite edge set from layer `index` to layer `index + 1`,
/// grouped by source node.
fn fan_out<R: Rng>(index: usize, size: usize, next_size: usize, rng: &mut R) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(size * next_size);
    for source in 0..size {
        for dest in 0..next_size {
            edges.push(Edge {
                source,
                dest_layer: index + 1,
                dest,
                weight: rng.gen_range(-1.0..=1.0),
                bias: rng.gen_range(-1.0..=1.0),
            });
        }
    }
    edges
}

/// Flattens per-layer node and edge lists (input first) into arenas.
fn assemble(built: Vec<(Vec<Node>, Vec<Edge>)>) -> Network {
    let last = built.len() - 1;
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    let mut layers = Vec::with_capacity(built.len());

    for (index, (layer_nodes, layer_edges)) in built.into_iter().enumerate() {
        let node_start = nodes.len();
        let edge_start = edges.len();
        nodes.extend(layer_nodes);
        edges.extend(layer_edges);
        layers.push(Layer {
            nodes: node_start..nodes.len(),
            edges: edge_start..edges.len(),
            is_output: index == last,
        });
    }

    Network {
        nodes,
        edges,
        layers,
    }
}
