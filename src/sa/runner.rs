//! SA execution loop.
//!
//! # Algorithm
//!
//! 1. Evaluate the initial state; it is the first best state
//! 2. One epoch, while `T > min_temperature`:
//!    a. Generate a candidate and evaluate it
//!    b. Accept it with the configured acceptance probability
//!    c. Count non-improving steps; stop once the convergence window is reached
//!    d. Cool down
//! 3. If the epoch ran out of temperature, reheat to the initial
//!    temperature (keeping the current state) until reheats are exhausted

use rand::{Rng, RngCore};

use super::config::BestTracking;
use super::optimizer::{Optimizer, SearchState};
use crate::error::RunError;
use crate::random::{create_rng, entropy_rng};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The convergence window was reached.
    Converged,
    /// The temperature fell to the minimum and no reheats were configured.
    TemperatureExhausted,
    /// The temperature fell to the minimum after every allowed reheat.
    ReheatsExhausted,
}

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestState<S> {
    /// The reported state, per the optimizer's [`BestTracking`] mode.
    pub state: S,

    /// Energy of `state`.
    pub energy: f64,

    /// Whether the run stopped on the convergence window.
    pub converged: bool,

    /// Why the run stopped.
    pub termination: Termination,

    /// Total inner-loop iterations across all epochs.
    pub iterations: usize,

    /// Number of reheats performed.
    pub reheats: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of candidates with lower energy than the current state.
    pub improving_moves: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,
}

impl<S: Clone> Optimizer<S> {
    /// Runs simulated annealing from `initial_state`.
    ///
    /// Uses a generator seeded from [`Tunables::seed`](super::Tunables::seed),
    /// or from OS entropy when no seed is set.
    ///
    /// # Errors
    ///
    /// [`RunError::NonFiniteEnergy`] if the initial state's energy is NaN or infinite.
    pub fn run(
        &mut self,
        initial_temperature: f64,
        initial_state: S,
    ) -> Result<BestState<S>, RunError> {
        let mut rng = match self.tunables.seed {
            Some(seed) => create_rng(seed),
            None => entropy_rng(),
        };
        self.run_with_rng(initial_temperature, initial_state, &mut rng)
    }

    /// Runs simulated annealing drawing every random number from `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::{Rng, RngCore};
    /// use u_anneal::random::create_rng;
    /// use u_anneal::sa::Optimizer;
    ///
    /// let mut optimizer = Optimizer::builder()
    ///     .with_neighbor(|x: &f64, rng: &mut dyn RngCore| x + rng.random_range(-0.5..0.5))
    ///     .with_energy(|x: &f64| x * x)
    ///     .build()
    ///     .unwrap();
    ///
    /// let best = optimizer.run_with_rng(10.0, 3.0, &mut create_rng(42)).unwrap();
    /// assert!(best.energy.is_finite());
    /// ```
    pub fn run_with_rng<R: RngCore>(
        &mut self,
        initial_temperature: f64,
        initial_state: S,
        rng: &mut R,
    ) -> Result<BestState<S>, RunError> {
        let initial_energy = self.energy.energy(&initial_state);
        if !initial_energy.is_finite() {
            return Err(RunError::NonFiniteEnergy {
                energy: initial_energy,
            });
        }

        let tunables = self.tunables.clone();
        let min_temperature = tunables.min_temperature;

        // NaN compares false here as well, so it is treated as exhausted.
        if !(initial_temperature > min_temperature) {
            tracing::debug!(
                initial_temperature,
                min_temperature,
                "initial temperature at or below minimum, skipping annealing"
            );
            self.search = Some(SearchState {
                current: initial_state.clone(),
                temperature: initial_temperature,
            });
            return Ok(BestState {
                state: initial_state,
                energy: initial_energy,
                converged: false,
                termination: Termination::TemperatureExhausted,
                iterations: 0,
                reheats: 0,
                accepted_moves: 0,
                improving_moves: 0,
                final_temperature: initial_temperature,
            });
        }

        let mut current = initial_state;
        let mut current_energy = initial_energy;
        // Only populated under AllTime tracking; LastAccepted reports `current`.
        let mut best: Option<(S, f64)> = match tunables.best_tracking {
            BestTracking::AllTime => Some((current.clone(), current_energy)),
            BestTracking::LastAccepted => None,
        };

        let mut temperature = initial_temperature;
        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut reheats = 0usize;
        let mut converged = false;

        'epochs: loop {
            let mut no_improvement = 0usize;
            let mut iteration = 0usize;

            while temperature > min_temperature {
                let candidate = self.neighbor.neighbor(&current, rng);
                let candidate_energy = self.energy.energy(&candidate);
                // Non-finite candidates never improve and are never accepted.
                let finite = candidate_energy.is_finite();
                if !finite {
                    tracing::trace!(candidate_energy, iteration, "rejecting non-finite candidate");
                }
                let improved = finite && candidate_energy < current_energy;
                if improved {
                    improving_moves += 1;
                }

                let accepted = finite && {
                    let probability =
                        self.acceptance.probability(candidate_energy, current_energy, temperature);
                    rng.random::<f64>() < probability
                };
                if accepted {
                    current = candidate;
                    current_energy = candidate_energy;
                    accepted_moves += 1;
                    no_improvement = 0;

                    if let Some((best_state, best_energy)) = best.as_mut() {
                        if current_energy < *best_energy {
                            *best_state = current.clone();
                            *best_energy = current_energy;
                        }
                    }
                }

                if !improved {
                    no_improvement += 1;
                    if no_improvement >= tunables.convergence_window {
                        total_iterations += 1;
                        converged = true;
                        break 'epochs;
                    }
                }

                if tunables.should_report(iteration) {
                    let best_energy = best.as_ref().map_or(current_energy, |(_, e)| *e);
                    tracing::info!(
                        temperature,
                        best_energy,
                        iteration,
                        epoch = reheats,
                        "annealing"
                    );
                }

                temperature = self.decay.decay(temperature);
                iteration += 1;
                total_iterations += 1;
            }

            if reheats >= tunables.max_reheats {
                break;
            }
            reheats += 1;
            temperature = initial_temperature;
            tracing::debug!(reheats, iterations = total_iterations, current_energy, "reheating");
        }

        let termination = if converged {
            Termination::Converged
        } else if tunables.max_reheats == 0 {
            Termination::TemperatureExhausted
        } else {
            Termination::ReheatsExhausted
        };

        let (state, energy) = match best {
            Some(best) => best,
            None => (current.clone(), current_energy),
        };

        tracing::debug!(
            ?termination,
            energy,
            iterations = total_iterations,
            reheats,
            "annealing finished"
        );

        self.search = Some(SearchState {
            current,
            temperature,
        });

        Ok(BestState {
            state,
            energy,
            converged,
            termination,
            iterations: total_iterations,
            reheats,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
        })
    }
}
