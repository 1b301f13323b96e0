//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases as the temperature cools, allowing the search to escape
//! local optima. Epochs that run out of temperature without converging
//! can be restarted ("reheated") from the current state.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Lundy & Mees (1986), "Convergence of an Annealing Algorithm"

mod config;
mod optimizer;
mod runner;
mod types;

pub use config::{
    BestTracking, CoolingSchedule, Tunables, DEFAULT_CONVERGENCE_WINDOW, DEFAULT_MIN_TEMPERATURE,
};
pub use optimizer::{Optimizer, OptimizerBuilder, SearchState};
pub use runner::{BestState, Termination};
pub use types::{AcceptanceProbability, Energy, Metropolis, Neighbor, TemperatureDecay};
