use crate::config::{self, NetworkConfig};
use crate::data::TrainingSet;
use crate::error::{NetworkError, Result, VectorKind};
use crate::Layer;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A fully connected feedforward network trained with momentum
#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<Layer>,
    topology: Vec<usize>,
    config: NetworkConfig,
    error: f64,
    recent_average_error: f64,
}

impl Network {
    /// Build a network with the default hyperparameters
    pub fn new(topology: &[usize]) -> Result<Self> {
        Self::with_config(topology, NetworkConfig::default())
    }

    /// Build a network, seeding weight initialization when the config asks for it
    pub fn with_config(topology: &[usize], config: NetworkConfig) -> Result<Self> {
        match config.seed {
            Some(seed) => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                Self::with_rng(topology, config, &mut rng)
            }
            None => Self::with_rng(topology, config, &mut rand::rng()),
        }
    }

    /// Build a network drawing initial weights from `rng`
    pub fn with_rng<R: Rng + ?Sized>(
        topology: &[usize],
        config: NetworkConfig,
        rng: &mut R,
    ) -> Result<Self> {
        validate_topology(topology)?;
        config.validate()?;

        let layers: Vec<Layer> = topology
            .iter()
            .enumerate()
            .map(|(i, &size)| {
                let num_outputs = topology.get(i + 1).copied().unwrap_or(0);
                Layer::new(size, num_outputs, rng)
            })
            .collect();

        let network = Network {
            layers,
            topology: topology.to_vec(),
            config,
            error: 0.0,
            recent_average_error: 0.0,
        };

        tracing::debug!(
            topology = ?network.topology,
            connections = network.num_connections(),
            seeded = network.config.seed.is_some(),
            "Built network"
        );

        Ok(network)
    }

    /// Get the number of layers in the network
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Total number of connections, bias connections included
    pub fn num_connections(&self) -> usize {
        self.layers
            .iter()
            .flat_map(|layer| layer.neurons())
            .map(|neuron| neuron.connections().len())
            .sum()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn topology(&self) -> &[usize] {
        &self.topology
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn eta(&self) -> f64 {
        self.config.eta
    }

    pub fn alpha(&self) -> f64 {
        self.config.alpha
    }

    /// Change the learning rate for subsequent training steps
    pub fn set_eta(&mut self, eta: f64) -> Result<()> {
        config::check_eta(eta)?;
        self.config.eta = eta;
        Ok(())
    }

    /// Change the momentum factor for subsequent training steps
    pub fn set_alpha(&mut self, alpha: f64) -> Result<()> {
        config::check_alpha(alpha)?;
        self.config.alpha = alpha;
        Ok(())
    }

    /// RMS output error of the last `back_prop`
    pub fn error(&self) -> f64 {
        self.error
    }

    /// Exponentially smoothed RMS error
    pub fn recent_average_error(&self) -> f64 {
        self.recent_average_error
    }

    /// Forward pass through the network
    pub fn feed_forward(&mut self, input_vals: &[f64]) -> Result<()> {
        check_shape(VectorKind::Input, self.topology[0], input_vals.len())?;

        for (neuron, &val) in self.layers[0].non_bias_mut().iter_mut().zip(input_vals) {
            neuron.set_output_val(val);
        }

        for layer_num in 1..self.layers.len() {
            let (head, tail) = self.layers.split_at_mut(layer_num);
            let prev_layer = &head[layer_num - 1];

            for neuron in tail[0].non_bias_mut() {
                neuron.feed_forward(prev_layer);
            }
        }

        Ok(())
    }

    /// Backward pass: measure the error, compute every gradient, then update weights
    pub fn back_prop(&mut self, target_vals: &[f64]) -> Result<()> {
        let output_size = self.topology[self.topology.len() - 1];
        check_shape(VectorKind::Target, output_size, target_vals.len())?;

        let last = self.layers.len() - 1;

        // RMS of the output neuron errors
        let sum_sq: f64 = self.layers[last]
            .non_bias()
            .iter()
            .zip(target_vals)
            .map(|(neuron, &target)| {
                let delta = target - neuron.output_val();
                delta * delta
            })
            .sum();
        self.error = (sum_sq / output_size as f64).sqrt();

        let smoothing = self.config.smoothing_factor;
        self.recent_average_error =
            (self.recent_average_error * smoothing + self.error) / (smoothing + 1.0);

        for (neuron, &target) in self.layers[last].non_bias_mut().iter_mut().zip(target_vals) {
            neuron.calc_output_gradients(target);
        }

        // Hidden gradients read next-layer weights, so they all go before any update
        for layer_num in (1..last).rev() {
            let (head, tail) = self.layers.split_at_mut(layer_num + 1);
            let next_layer = &tail[0];

            for neuron in head[layer_num].neurons_mut() {
                neuron.calc_hidden_gradients(next_layer);
            }
        }

        let (eta, alpha) = (self.config.eta, self.config.alpha);
        for layer_num in (1..=last).rev() {
            let (head, tail) = self.layers.split_at_mut(layer_num);
            let prev_layer = &mut head[layer_num - 1];

            for neuron in tail[0].non_bias() {
                neuron.update_input_weights(prev_layer, eta, alpha);
            }
        }

        tracing::trace!(
            error = self.error,
            recent_average_error = self.recent_average_error,
            "Back propagation step"
        );

        Ok(())
    }

    /// Output values of the output layer, bias excluded
    pub fn results(&self) -> Vec<f64> {
        self.layers[self.layers.len() - 1].outputs()
    }

    /// One online training step, returning the RMS error before the update
    pub fn train(&mut self, input_vals: &[f64], target_vals: &[f64]) -> Result<f64> {
        // Check both shapes up front so a bad target can't leave a half-run step behind
        let output_size = self.topology[self.topology.len() - 1];
        check_shape(VectorKind::Input, self.topology[0], input_vals.len())?;
        check_shape(VectorKind::Target, output_size, target_vals.len())?;

        self.feed_forward(input_vals)?;
        self.back_prop(target_vals)?;
        Ok(self.error)
    }

    /// Train once on every sample of `set`, returning the mean RMS error.
    ///
    /// Samples are visited in shuffled order when the set asks for it.
    pub fn train_epoch<R: Rng + ?Sized>(&mut self, set: &TrainingSet, rng: &mut R) -> Result<f64> {
        if set.input_len() != self.topology[0] {
            return Err(shape_error(VectorKind::Input, self.topology[0], set.input_len()));
        }
        let output_size = self.topology[self.topology.len() - 1];
        if set.target_len() != output_size {
            return Err(shape_error(VectorKind::Target, output_size, set.target_len()));
        }
        if set.is_empty() {
            return Ok(0.0);
        }

        let mut order: Vec<usize> = (0..set.len()).collect();
        if set.shuffle() {
            order.shuffle(rng);
        }

        let mut total = 0.0;
        for idx in order {
            let (input, target) = set.sample(idx);
            total += self.train(input, target)?;
        }

        Ok(total / set.len() as f64)
    }
}

fn validate_topology(topology: &[usize]) -> Result<()> {
    if topology.len() < 2 {
        return Err(NetworkError::InvalidTopology(format!(
            "need at least 2 layers, got {}",
            topology.len()
        )));
    }
    if let Some(pos) = topology.iter().position(|&size| size == 0) {
        return Err(NetworkError::InvalidTopology(format!("layer {} has no neurons", pos)));
    }
    Ok(())
}

fn check_shape(kind: VectorKind, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(shape_error(kind, expected, actual));
    }
    Ok(())
}

fn shape_error(kind: VectorKind, expected: usize, actual: usize) -> NetworkError {
    tracing::warn!(%kind, expected, actual, "Rejected vector with wrong length");
    NetworkError::ShapeMismatch { kind, expected, actual }
}
