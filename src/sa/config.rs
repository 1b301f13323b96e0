//! SA tunables and cooling schedules.

use crate::error::ConfigError;

/// Default lower bound on temperature; an epoch ends once `T` drops to it.
pub const DEFAULT_MIN_TEMPERATURE: f64 = 1e-6;

/// Default number of consecutive non-improving steps before convergence.
pub const DEFAULT_CONVERGENCE_WINDOW: usize = 100;

/// Built-in temperature decay functions.
///
/// # References
///
/// - Geometric: standard textbook approach
/// - LundyMees: Lundy & Mees (1986), with convergence proof
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Geometric cooling: `T_{k+1} = T_k / rate`.
    ///
    /// The default `rate` of 1.05 cools by roughly 5% per step.
    Geometric {
        /// Divisor applied every step. Must be greater than 1.
        rate: f64,
    },

    /// Lundy-Mees cooling: `T_{k+1} = T_k / (1 + beta * T_k)`.
    ///
    /// Cools fast at high T, slow at low T.
    LundyMees {
        /// Cooling parameter. Must be positive.
        beta: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { rate: 1.05 }
    }
}

impl CoolingSchedule {
    /// Applies one cooling step.
    pub fn next(&self, temperature: f64) -> f64 {
        match *self {
            CoolingSchedule::Geometric { rate } => temperature / rate,
            CoolingSchedule::LundyMees { beta } => temperature / (1.0 + beta * temperature),
        }
    }

    /// Validates the schedule parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            CoolingSchedule::Geometric { rate } => {
                if !rate.is_finite() || rate <= 1.0 {
                    return Err(ConfigError::InvalidCooling(format!(
                        "geometric rate must be finite and > 1, got {rate}"
                    )));
                }
            }
            CoolingSchedule::LundyMees { beta } => {
                if !beta.is_finite() || beta <= 0.0 {
                    return Err(ConfigError::InvalidCooling(format!(
                        "lundy-mees beta must be finite and positive, got {beta}"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Which state a run reports as its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BestTracking {
    /// Report the last accepted state, even if an earlier accepted state
    /// had lower energy.
    #[default]
    LastAccepted,

    /// Report the lowest-energy state accepted at any point of the run.
    AllTime,
}

/// Run-time knobs of an [`Optimizer`](super::Optimizer).
///
/// # Examples
///
/// ```
/// use u_anneal::sa::{BestTracking, Tunables};
///
/// let tunables = Tunables::default()
///     .with_max_reheats(3)
///     .with_convergence_window(25)
///     .with_best_tracking(BestTracking::AllTime)
///     .with_seed(42);
/// assert!(tunables.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tunables {
    /// Emit a progress event every `verbose_every` iterations.
    pub verbose: bool,

    /// Progress cadence. Zero is treated as one.
    pub verbose_every: usize,

    /// How many times the temperature may be reset after an epoch ends
    /// without converging.
    pub max_reheats: usize,

    /// Consecutive non-improving steps after which the run stops early.
    pub convergence_window: usize,

    /// The epoch continues only while `T > min_temperature`.
    pub min_temperature: f64,

    /// Which state is reported.
    pub best_tracking: BestTracking,

    /// Random seed for reproducibility. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            verbose: false,
            verbose_every: 0,
            max_reheats: 0,
            convergence_window: DEFAULT_CONVERGENCE_WINDOW,
            min_temperature: DEFAULT_MIN_TEMPERATURE,
            best_tracking: BestTracking::default(),
            seed: None,
        }
    }
}

impl Tunables {
    pub fn with_verbose(mut self, enabled: bool, every: usize) -> Self {
        self.verbose = enabled;
        self.verbose_every = every;
        self
    }

    pub fn with_max_reheats(mut self, n: usize) -> Self {
        self.max_reheats = n;
        self
    }

    pub fn with_convergence_window(mut self, n: usize) -> Self {
        self.convergence_window = n;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_best_tracking(mut self, mode: BestTracking) -> Self {
        self.best_tracking = mode;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the tunables.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_temperature.is_finite() || self.min_temperature <= 0.0 {
            return Err(ConfigError::InvalidTunable(format!(
                "min_temperature must be finite and positive, got {}",
                self.min_temperature
            )));
        }
        Ok(())
    }

    /// Whether a progress event is due at `iteration`.
    pub(crate) fn should_report(&self, iteration: usize) -> bool {
        self.verbose && iteration % self.verbose_every.max(1) == 0
    }
}
