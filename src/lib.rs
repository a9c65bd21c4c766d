//! # Momentum Net
//!
//! A fully connected feedforward neural network trained by backpropagation
//! with momentum.
//!
//! Every layer carries a trailing bias neuron fixed at 1.0. Weights live on
//! the upstream side of each connection and are adjusted by the downstream
//! neuron during the backward pass. Learning rate and momentum are
//! configured per network.
//!
//! ```
//! use momentum_net::{Network, NetworkConfig};
//!
//! let mut net = Network::with_config(&[2, 2, 1], NetworkConfig::new().seed(7)).unwrap();
//! for _ in 0..2000 {
//!     net.feed_forward(&[1.0, 0.0]).unwrap();
//!     net.back_prop(&[1.0]).unwrap();
//! }
//! assert!(net.error() < 0.05);
//! ```

mod connection;
mod neuron;
pub mod layer;
mod network;
pub mod config;
pub mod data;
pub mod error;
pub mod visualization;

// Re-export main types
pub use config::NetworkConfig;
pub use connection::Connection;
pub use error::{NetworkError, Result, VectorKind};
pub use layer::Layer;
pub use network::Network;
pub use neuron::Neuron;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
