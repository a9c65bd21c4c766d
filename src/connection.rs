use rand::Rng;

/// A weighted link from one neuron to a single neuron of the next layer.
///
/// Stored on the upstream neuron and only ever changed through
/// [`Neuron::update_input_weights`](crate::Neuron::update_input_weights)
/// called by its downstream target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub weight: f64,
    /// Last change applied to `weight`, feeds the momentum term
    pub delta_weight: f64,
}

impl Connection {
    /// Create a connection with a weight drawn uniformly from [0, 1)
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Connection {
            weight: rng.random::<f64>(),
            delta_weight: 0.0,
        }
    }
}
