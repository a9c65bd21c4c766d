use crate::error::{NetworkError, Result, VectorKind};

/// Input/target pairs for online training
#[derive(Debug, Clone)]
pub struct TrainingSet {
    inputs: Vec<Vec<f64>>,
    targets: Vec<Vec<f64>>,
    input_len: usize,
    target_len: usize,
    shuffle: bool,
}

impl TrainingSet {
    /// Create an empty set for samples of the given shape
    pub fn new(input_len: usize, target_len: usize) -> Self {
        TrainingSet {
            inputs: Vec::new(),
            targets: Vec::new(),
            input_len,
            target_len,
            shuffle: false,
        }
    }

    /// Visit samples in a fresh random order every epoch
    pub fn shuffled(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Add a sample, rejecting vectors of the wrong length
    pub fn add(&mut self, input: Vec<f64>, target: Vec<f64>) -> Result<()> {
        if input.len() != self.input_len {
            return Err(NetworkError::ShapeMismatch {
                kind: VectorKind::Input,
                expected: self.input_len,
                actual: input.len(),
            });
        }
        if target.len() != self.target_len {
            return Err(NetworkError::ShapeMismatch {
                kind: VectorKind::Target,
                expected: self.target_len,
                actual: target.len(),
            });
        }

        self.inputs.push(input);
        self.targets.push(target);
        Ok(())
    }

    /// Get the number of samples in the set
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn input_len(&self) -> usize {
        self.input_len
    }

    pub fn target_len(&self) -> usize {
        self.target_len
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    /// Get the sample at `idx`
    pub fn sample(&self, idx: usize) -> (&[f64], &[f64]) {
        (&self.inputs[idx], &self.targets[idx])
    }

    /// Iterate over samples in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&[f64], &[f64])> {
        self.inputs
            .iter()
            .zip(&self.targets)
            .map(|(input, target)| (input.as_slice(), target.as_slice()))
    }
}
