use crate::error::NetworkError;
use crate::math::jitter;
use neurotile_data::Network;
use rand::Rng;

/// Copies `parent` with bounded uniform noise on every node default and
/// every edge weight and bias. Node names and structure carry over
/// unchanged; current values start at the new defaults.
pub fn inherit_with_rng<R: Rng>(
    parent: &Network,
    max_variance: f64,
    rng: &mut R,
) -> Result<Network, NetworkError> {
    if !max_variance.is_finite() || max_variance < 0.0 {
        return Err(NetworkError::InvalidVariance(max_variance));
    }

    let mut child = parent.clone();
    for node in &mut child.nodes {
        node.default += jitter(rng, max_variance);
        node.current = node.default;
    }
    for edge in &mut child.edges {
        edge.weight += jitter(rng, max_variance);
        edge.bias += jitter(rng, max_variance);
    }
    Ok(child)
}
