// Domain layer - Core automaton state and transition rule
pub mod domain;

// Application layer - Simulation state and tick coordination
pub mod application;

// Infrastructure layer - Configuration, input, rendering
pub mod config;
pub mod input;
pub mod rendering;

// Re-exports for convenience
pub use application::Simulation;
pub use config::{Config, ConfigError};
pub use domain::{Cell, Grid};
