use crate::math::sigmoid;
use neurotile_data::Network;

/// Pushes every non-output layer's current values through its edges, in
/// layer order. Each edge adds `sigmoid(source, weight, 1, bias, 0)` onto its
/// destination; nothing is cleared between edges or between passes.
///
/// # Panics
/// If a layer before the last one is flagged as an output layer.
pub fn propagate(network: &mut Network) {
    let last = network.layers.len().saturating_sub(1);
    for layer_idx in 0..last {
        let layer = &network.layers[layer_idx];
        assert!(
            !layer.is_output,
            "propagate reached output layer {layer_idx} before the end of a {}-layer network",
            network.layers.len()
        );

        let source_start = layer.nodes.start;
        for edge_idx in layer.edges.clone() {
            let edge = &network.edges[edge_idx];
            let value = network.nodes[source_start + edge.source].current;
            let dest = network.layers[edge.dest_layer].nodes.start + edge.dest;
            network.nodes[dest].current += sigmoid(value, edge.weight, 1.0, edge.bias, 0.0);
        }
    }
}
