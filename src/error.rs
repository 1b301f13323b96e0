//! Error types.

use thiserror::Error;

/// A mandatory hook that was not supplied to the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Callback {
    /// The neighbor generator.
    Neighbor,
    /// The energy function.
    Energy,
}

impl Callback {
    pub fn name(&self) -> &'static str {
        match self {
            Callback::Neighbor => "neighbor",
            Callback::Energy => "energy",
        }
    }
}

/// Errors raised while configuring an optimizer.
///
/// These are only produced by [`OptimizerBuilder::build`](crate::sa::OptimizerBuilder::build);
/// no partially configured optimizer is ever returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("missing {} callback", .0.name())]
    MissingCallback(Callback),

    #[error("invalid cooling schedule: {0}")]
    InvalidCooling(String),

    #[error("invalid tunable: {0}")]
    InvalidTunable(String),
}

/// Errors raised at the start of a run, before the annealing loop begins.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RunError {
    #[error("initial state has non-finite energy {energy}")]
    NonFiniteEnergy { energy: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_callback_message() {
        let err = ConfigError::MissingCallback(Callback::Energy);
        assert_eq!(err.to_string(), "missing energy callback");
        let err = ConfigError::MissingCallback(Callback::Neighbor);
        assert_eq!(err.to_string(), "missing neighbor callback");
    }

    #[test]
    fn test_non_finite_energy_message() {
        let err = RunError::NonFiniteEnergy { energy: f64::NAN };
        assert!(err.to_string().contains("NaN"));
    }
}
