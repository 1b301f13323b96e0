//! Generic simulated annealing engine.
//!
//! The caller supplies a state type and two hooks, a neighbor generator
//! and an energy function; temperature decay and the acceptance rule are
//! optional and default to `T / 1.05` cooling and the Metropolis
//! criterion. The engine anneals a single trajectory, tracks the reported
//! state, detects stagnation through a convergence window, and can reheat
//! when an epoch ends without converging.
//!
//! ```
//! use rand::{Rng, RngCore};
//! use u_anneal::sa::{BestTracking, Optimizer, Tunables};
//!
//! let mut optimizer = Optimizer::builder()
//!     .with_neighbor(|x: &f64, rng: &mut dyn RngCore| {
//!         (x + rng.random_range(-1.0..1.0)).clamp(-10.0, 10.0)
//!     })
//!     .with_energy(|x: &f64| (x - 3.0).powi(2))
//!     .with_tunables(
//!         Tunables::default()
//!             .with_max_reheats(2)
//!             .with_best_tracking(BestTracking::AllTime)
//!             .with_seed(7),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let best = optimizer.run(10.0, 0.0).unwrap();
//! assert!(best.energy <= 9.0);
//! optimizer.release();
//! ```
//!
//! Progress and epoch events are emitted through `tracing`; install a
//! subscriber to see them.

pub mod error;
pub mod random;
pub mod sa;

pub use error::{Callback, ConfigError, RunError};
