use momentum_net::{Network, NetworkConfig, data, visualization};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let seed = 2024;
    let epochs = 2000;

    let config = NetworkConfig::new().seed(seed);
    let mut network = Network::with_config(&[2, 4, 1], config)?;
    visualization::visualize_network_structure(&network);

    let set = data::xor().shuffled(true);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut errors = Vec::with_capacity(epochs);
    for epoch in 0..epochs {
        let error = network.train_epoch(&set, &mut rng)?;
        errors.push(error);

        if epoch % 200 == 0 || epoch == epochs - 1 {
            tracing::info!(
                epoch,
                error,
                recent_average_error = network.recent_average_error(),
                "Training progress"
            );
        }
    }

    // Keep the plot readable
    let step = (errors.len() / 60).max(1);
    let sampled: Vec<f64> = errors.iter().step_by(step).copied().collect();
    visualization::plot_error(&sampled);

    println!();
    for (input, target) in set.iter() {
        network.feed_forward(input)?;
        println!(
            "Input: {:?} -> {:.4} (target {})",
            input,
            network.results()[0],
            target[0]
        );
    }

    Ok(())
}
