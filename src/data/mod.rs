//! Training data for online learning

mod training_set;

pub use training_set::TrainingSet;

/// The four XOR samples, with inputs and targets in {0, 1}
pub fn xor() -> TrainingSet {
    let samples = [
        ([0.0, 0.0], 0.0),
        ([0.0, 1.0], 1.0),
        ([1.0, 0.0], 1.0),
        ([1.0, 1.0], 0.0),
    ];

    let mut set = TrainingSet::new(2, 1);
    for (input, target) in samples {
        // Shapes are fixed above
        let _ = set.add(input.to_vec(), vec![target]);
    }
    set
}
