//! Optimizer construction, tunable setters, and owned search state.

use super::config::{BestTracking, CoolingSchedule, Tunables};
use super::types::{AcceptanceProbability, Energy, Metropolis, Neighbor, TemperatureDecay};
use crate::error::{Callback, ConfigError};

/// Mutable search state owned by the optimizer between `run` and `release`.
#[derive(Debug, Clone)]
pub struct SearchState<S> {
    /// The state the trajectory is currently at.
    pub current: S,
    /// Temperature when the last run stopped.
    pub temperature: f64,
}

/// Builds an [`Optimizer`] from its hooks.
///
/// The neighbor and energy hooks are mandatory; decay and acceptance fall
/// back to [`CoolingSchedule::default`] (`T / 1.05`) and [`Metropolis`].
///
/// # Examples
///
/// ```
/// use rand::{Rng, RngCore};
/// use u_anneal::sa::Optimizer;
///
/// let optimizer = Optimizer::builder()
///     .with_neighbor(|x: &f64, rng: &mut dyn RngCore| x + rng.random_range(-1.0..1.0))
///     .with_energy(|x: &f64| (x - 2.0).powi(2))
///     .build()
///     .unwrap();
/// assert_eq!(optimizer.tunables().convergence_window, 100);
/// ```
pub struct OptimizerBuilder<S> {
    decay: Option<Box<dyn TemperatureDecay>>,
    cooling: Option<CoolingSchedule>,
    neighbor: Option<Box<dyn Neighbor<S>>>,
    acceptance: Option<Box<dyn AcceptanceProbability>>,
    energy: Option<Box<dyn Energy<S>>>,
    tunables: Tunables,
}

impl<S> Default for OptimizerBuilder<S> {
    fn default() -> Self {
        Self {
            decay: None,
            cooling: None,
            neighbor: None,
            acceptance: None,
            energy: None,
            tunables: Tunables::default(),
        }
    }
}

impl<S> OptimizerBuilder<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom temperature decay. Overrides [`with_cooling`](Self::with_cooling).
    pub fn with_decay(mut self, decay: impl TemperatureDecay + 'static) -> Self {
        self.decay = Some(Box::new(decay));
        self.cooling = None;
        self
    }

    /// Selects a built-in cooling schedule. Validated at [`build`](Self::build).
    pub fn with_cooling(mut self, schedule: CoolingSchedule) -> Self {
        self.cooling = Some(schedule);
        self.decay = None;
        self
    }

    pub fn with_neighbor(mut self, neighbor: impl Neighbor<S> + 'static) -> Self {
        self.neighbor = Some(Box::new(neighbor));
        self
    }

    pub fn with_acceptance(mut self, acceptance: impl AcceptanceProbability + 'static) -> Self {
        self.acceptance = Some(Box::new(acceptance));
        self
    }

    pub fn with_energy(mut self, energy: impl Energy<S> + 'static) -> Self {
        self.energy = Some(Box::new(energy));
        self
    }

    pub fn with_tunables(mut self, tunables: Tunables) -> Self {
        self.tunables = tunables;
        self
    }

    /// Finishes configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingCallback`] if the neighbor or energy hook is absent
    /// - [`ConfigError::InvalidCooling`] if a built-in schedule has bad parameters
    /// - [`ConfigError::InvalidTunable`] if the tunables fail validation
    pub fn build(self) -> Result<Optimizer<S>, ConfigError> {
        let neighbor = self
            .neighbor
            .ok_or(ConfigError::MissingCallback(Callback::Neighbor))?;
        let energy = self
            .energy
            .ok_or(ConfigError::MissingCallback(Callback::Energy))?;
        self.tunables.validate()?;

        let decay = match (self.decay, self.cooling) {
            (Some(decay), _) => decay,
            (None, Some(schedule)) => {
                schedule.validate()?;
                Box::new(schedule)
            }
            (None, None) => Box::new(CoolingSchedule::default()),
        };
        let acceptance = self.acceptance.unwrap_or_else(|| Box::new(Metropolis));

        Ok(Optimizer {
            decay,
            neighbor,
            acceptance,
            energy,
            tunables: self.tunables,
            search: None,
        })
    }
}

/// A configured simulated annealing engine over states of type `S`.
///
/// Hooks are fixed at construction; tunables may be changed between runs.
/// The optimizer keeps the trajectory's [`SearchState`] after a run until
/// [`release`](Self::release) is called.
pub struct Optimizer<S> {
    pub(super) decay: Box<dyn TemperatureDecay>,
    pub(super) neighbor: Box<dyn Neighbor<S>>,
    pub(super) acceptance: Box<dyn AcceptanceProbability>,
    pub(super) energy: Box<dyn Energy<S>>,
    pub(super) tunables: Tunables,
    pub(super) search: Option<SearchState<S>>,
}

impl<S> std::fmt::Debug for Optimizer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Optimizer")
            .field("tunables", &self.tunables)
            .field("has_search_state", &self.search.is_some())
            .finish_non_exhaustive()
    }
}

impl<S> Optimizer<S> {
    pub fn builder() -> OptimizerBuilder<S> {
        OptimizerBuilder::new()
    }

    pub fn tunables(&self) -> &Tunables {
        &self.tunables
    }

    /// Enables progress events every `every` iterations (zero means every iteration).
    pub fn set_verbose(&mut self, enabled: bool, every: usize) {
        self.tunables.verbose = enabled;
        self.tunables.verbose_every = every;
    }

    pub fn set_max_reheats(&mut self, n: usize) {
        self.tunables.max_reheats = n;
    }

    pub fn set_convergence_window(&mut self, n: usize) {
        self.tunables.convergence_window = n;
    }

    /// Sets the temperature at which an epoch ends.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidTunable`] if `t` is not finite and positive; the
    /// previous value is kept.
    pub fn set_min_temperature(&mut self, t: f64) -> Result<(), ConfigError> {
        let tunables = self.tunables.clone().with_min_temperature(t);
        tunables.validate()?;
        self.tunables = tunables;
        Ok(())
    }

    pub fn set_best_tracking(&mut self, mode: BestTracking) {
        self.tunables.best_tracking = mode;
    }

    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.tunables.seed = seed;
    }

    /// The search state left behind by the last run, if not yet released.
    pub fn search_state(&self) -> Option<&SearchState<S>> {
        self.search.as_ref()
    }

    /// Drops the owned search state. Safe to call repeatedly or before any run.
    pub fn release(&mut self) {
        if self.search.take().is_some() {
            tracing::trace!("released search state");
        }
    }
}
