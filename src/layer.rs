use crate::Neuron;
use rand::Rng;

/// An ordered group of neurons whose last member is the bias neuron
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Create a layer of `size` regular neurons plus a trailing bias neuron.
    ///
    /// Every neuron gets `num_outputs` connections, one per regular neuron
    /// of the following layer.
    pub fn new<R: Rng + ?Sized>(size: usize, num_outputs: usize, rng: &mut R) -> Self {
        let mut neurons: Vec<Neuron> = (0..size)
            .map(|index| Neuron::new(num_outputs, index, rng))
            .collect();
        neurons.push(Neuron::bias(num_outputs, size, rng));

        Layer { neurons }
    }

    /// Number of neurons, bias included
    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    /// Always false, a layer holds at least its bias neuron
    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    /// Number of neurons excluding the bias
    pub fn size(&self) -> usize {
        self.neurons.len() - 1
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// All neurons except the bias
    pub fn non_bias(&self) -> &[Neuron] {
        &self.neurons[..self.size()]
    }

    pub fn bias(&self) -> &Neuron {
        &self.neurons[self.size()]
    }

    /// Output values of the regular neurons, in order
    pub fn outputs(&self) -> Vec<f64> {
        self.non_bias().iter().map(Neuron::output_val).collect()
    }

    pub(crate) fn neurons_mut(&mut self) -> &mut [Neuron] {
        &mut self.neurons
    }

    /// Mutable access to the regular neurons, the bias stays out of reach
    pub(crate) fn non_bias_mut(&mut self) -> &mut [Neuron] {
        let size = self.size();
        &mut self.neurons[..size]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_layer_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let layer = Layer::new(3, 2, &mut rng);

        assert_eq!(layer.len(), 4);
        assert_eq!(layer.size(), 3);
        assert_eq!(layer.non_bias().len(), 3);
        assert!(!layer.is_empty());
        for (i, neuron) in layer.neurons().iter().enumerate() {
            assert_eq!(neuron.index(), i);
            assert_eq!(neuron.connections().len(), 2);
        }
    }

    #[test]
    fn test_layer_bias() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let layer = Layer::new(2, 0, &mut rng);

        assert_eq!(layer.bias().output_val(), 1.0);
        assert_eq!(layer.bias().index(), 2);
        assert_eq!(layer.outputs(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_non_bias_mut_excludes_bias() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut layer = Layer::new(2, 1, &mut rng);
        for neuron in layer.non_bias_mut() {
            neuron.set_output_val(-3.0);
        }

        assert_eq!(layer.outputs(), vec![-3.0, -3.0]);
        assert_eq!(layer.bias().output_val(), 1.0);
    }
}
