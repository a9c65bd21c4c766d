use crate::{Connection, Layer};
use rand::Rng;

/// A single tanh unit together with its outgoing connections
#[derive(Debug, Clone)]
pub struct Neuron {
    pub(crate) output_val: f64,
    pub(crate) gradient: f64,
    /// Position within the owning layer
    pub(crate) index: usize,
    /// One entry per non-bias neuron of the next layer
    pub(crate) output_weights: Vec<Connection>,
}

impl Neuron {
    /// Create a neuron with `num_outputs` randomly weighted connections
    pub fn new<R: Rng + ?Sized>(num_outputs: usize, index: usize, rng: &mut R) -> Self {
        let output_weights = (0..num_outputs).map(|_| Connection::random(rng)).collect();

        Neuron {
            output_val: 0.0,
            gradient: 0.0,
            index,
            output_weights,
        }
    }

    /// Create a bias neuron, whose output stays at 1.0 for its whole life
    pub fn bias<R: Rng + ?Sized>(num_outputs: usize, index: usize, rng: &mut R) -> Self {
        let mut neuron = Self::new(num_outputs, index, rng);
        neuron.output_val = 1.0;
        neuron
    }

    pub fn set_output_val(&mut self, val: f64) {
        self.output_val = val;
    }

    pub fn output_val(&self) -> f64 {
        self.output_val
    }

    pub fn gradient(&self) -> f64 {
        self.gradient
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn connections(&self) -> &[Connection] {
        &self.output_weights
    }

    /// Compute this neuron's output from the previous layer, bias included
    pub fn feed_forward(&mut self, prev_layer: &Layer) {
        let sum: f64 = prev_layer
            .neurons()
            .iter()
            .map(|n| n.output_val * n.output_weights[self.index].weight)
            .sum();

        self.output_val = transfer_function(sum);
    }

    /// Gradient of an output neuron against its expected value
    pub fn calc_output_gradients(&mut self, target_val: f64) {
        let delta = target_val - self.output_val;
        self.gradient = delta * transfer_function_derivative(self.output_val);
    }

    /// Gradient of a hidden neuron from the gradients of the next layer
    pub fn calc_hidden_gradients(&mut self, next_layer: &Layer) {
        let dow = self.sum_dow(next_layer);
        self.gradient = dow * transfer_function_derivative(self.output_val);
    }

    /// Adjust the weights of every connection feeding into this neuron.
    ///
    /// Those connections live on the neurons of `prev_layer`, so that layer
    /// is the one being mutated.
    pub fn update_input_weights(&self, prev_layer: &mut Layer, eta: f64, alpha: f64) {
        for neuron in prev_layer.neurons_mut() {
            let output_val = neuron.output_val;
            let conn = &mut neuron.output_weights[self.index];

            let new_delta_weight = eta * output_val * self.gradient + alpha * conn.delta_weight;
            conn.delta_weight = new_delta_weight;
            conn.weight += new_delta_weight;
        }
    }

    /// Sum of the weighted gradients this neuron contributes to.
    /// The next layer's bias is skipped: nothing feeds into it.
    fn sum_dow(&self, next_layer: &Layer) -> f64 {
        next_layer
            .non_bias()
            .iter()
            .enumerate()
            .map(|(n, next)| self.output_weights[n].weight * next.gradient)
            .sum()
    }
}

fn transfer_function(x: f64) -> f64 {
    x.tanh()
}

/// Derivative of tanh written in terms of its output
fn transfer_function_derivative(output: f64) -> f64 {
    1.0 - output * output
}
