//! Text visualization of training progress and network shape

use crate::Network;

/// Render an error curve as a text plot
pub fn render_error_curve(errors: &[f64]) -> String {
    let mut out = String::new();
    out.push_str("Training Error Curve:\n");
    out.push_str("---------------------\n");

    if errors.is_empty() {
        out.push_str("No error data available.\n");
        return out;
    }

    let min_err = errors.iter().copied().fold(f64::INFINITY, f64::min);
    let max_err = errors.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // Flat curves get a unit range
    let range = if (max_err - min_err).abs() < 1e-12 { 1.0 } else { max_err - min_err };

    let height = 15;
    let width = errors.len();
    let mut plot = vec![vec![' '; width]; height];

    for (i, &err) in errors.iter().enumerate() {
        let normalized = (err - min_err) / range;
        let row = ((1.0 - normalized) * (height - 1) as f64).round() as usize;
        plot[row.min(height - 1)][i] = '*';
    }

    for row in plot {
        out.push('|');
        out.extend(row);
        out.push_str("|\n");
    }

    out.push('+');
    out.push_str(&"-".repeat(width));
    out.push_str("+\n");

    out.push_str(&format!("Min Error: {:.6}, Max Error: {:.6}\n", min_err, max_err));
    out.push_str(&format!("Epochs: 0 to {}\n", errors.len() - 1));
    if let Some(&final_err) = errors.last() {
        out.push_str(&format!("Final Error: {:.6}\n", final_err));
    }

    out
}

/// Plot training error
pub fn plot_error(errors: &[f64]) {
    print!("{}", render_error_curve(errors));
}

/// Render the layer sizes and connection count of a network
pub fn render_network_structure(network: &Network) -> String {
    let mut out = String::new();
    out.push_str("Network Structure:\n");
    out.push_str("-----------------\n");

    let last = network.num_layers() - 1;
    for (i, layer) in network.layers().iter().enumerate() {
        let role = match i {
            0 => "input",
            _ if i == last => "output",
            _ => "hidden",
        };
        out.push_str(&format!("Layer {} ({}): {} neurons + bias\n", i, role, layer.size()));
    }

    out.push_str(&format!("Total connections: {}\n", network.num_connections()));
    out.push_str(&format!("eta: {}, alpha: {}\n", network.eta(), network.alpha()));
    out
}

/// Visualize network structure
pub fn visualize_network_structure(network: &Network) {
    print!("{}", render_network_structure(network));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NetworkConfig;

    #[test]
    fn test_render_empty_curve() {
        let text = render_error_curve(&[]);
        assert!(text.contains("No error data available."));
    }

    #[test]
    fn test_render_error_curve() {
        let text = render_error_curve(&[1.0, 0.5, 0.25, 0.0]);
        let lines: Vec<&str> = text.lines().collect();

        // Header, 15 plot rows, axis, three summary lines
        assert_eq!(lines.len(), 2 + 15 + 1 + 3);
        assert_eq!(lines[2], "|*   |");
        assert_eq!(lines[16], "|   *|");
        assert!(text.contains("Final Error: 0.000000"));
    }

    #[test]
    fn test_render_flat_curve() {
        let text = render_error_curve(&[0.3, 0.3]);
        assert!(text.contains("|**|"));
    }

    #[test]
    fn test_render_network_structure() {
        let network = Network::with_config(&[2, 3, 1], NetworkConfig::new().seed(1)).unwrap();
        let text = render_network_structure(&network);

        assert!(text.contains("Layer 0 (input): 2 neurons + bias"));
        assert!(text.contains("Layer 1 (hidden): 3 neurons + bias"));
        assert!(text.contains("Layer 2 (output): 1 neurons + bias"));
        assert!(text.contains("Total connections: 13"));
    }
}
