//! Hook traits through which the caller defines the problem.
//!
//! Every hook is implemented for plain closures of the matching shape, so
//! most callers never name these traits. Hooks are expected to be pure:
//! the engine caches the energy of the current state instead of
//! recomputing it each step.

use rand::RngCore;

use super::config::CoolingSchedule;

/// Maps the current temperature to the next one.
///
/// Must eventually drive the temperature down to the optimizer's
/// `min_temperature`; otherwise the epoch never ends.
pub trait TemperatureDecay: Send + Sync {
    fn decay(&self, temperature: f64) -> f64;
}

impl<F> TemperatureDecay for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn decay(&self, temperature: f64) -> f64 {
        self(temperature)
    }
}

impl TemperatureDecay for CoolingSchedule {
    fn decay(&self, temperature: f64) -> f64 {
        self.next(temperature)
    }
}

/// Probability in `[0, 1]` of moving from a state with energy `current`
/// to a candidate with energy `next` at `temperature`.
pub trait AcceptanceProbability: Send + Sync {
    fn probability(&self, next: f64, current: f64, temperature: f64) -> f64;
}

impl<F> AcceptanceProbability for F
where
    F: Fn(f64, f64, f64) -> f64 + Send + Sync,
{
    fn probability(&self, next: f64, current: f64, temperature: f64) -> f64 {
        self(next, current, temperature)
    }
}

/// Metropolis criterion: improvements are always accepted, worsening
/// moves with probability `exp(-(next - current) / T)`.
///
/// Reference: Metropolis et al. (1953), Kirkpatrick et al. (1983)
#[derive(Debug, Clone, Copy, Default)]
pub struct Metropolis;

impl AcceptanceProbability for Metropolis {
    fn probability(&self, next: f64, current: f64, temperature: f64) -> f64 {
        if next.is_nan() {
            return 0.0;
        }
        if next < current {
            return 1.0;
        }
        (-(next - current) / temperature).exp().min(1.0)
    }
}

/// Produces a candidate state from the current one.
///
/// The candidate should be a small perturbation, but the neighborhood
/// must be connected. Randomness should come from `rng` so that seeded
/// runs stay reproducible.
pub trait Neighbor<S>: Send + Sync {
    fn neighbor(&self, state: &S, rng: &mut dyn RngCore) -> S;
}

impl<S, F> Neighbor<S> for F
where
    F: Fn(&S, &mut dyn RngCore) -> S + Send + Sync,
{
    fn neighbor(&self, state: &S, rng: &mut dyn RngCore) -> S {
        self(state, rng)
    }
}

/// The objective. Lower is better.
pub trait Energy<S>: Send + Sync {
    fn energy(&self, state: &S) -> f64;
}

impl<S, F> Energy<S> for F
where
    F: Fn(&S) -> f64 + Send + Sync,
{
    fn energy(&self, state: &S) -> f64 {
        self(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use rand::Rng;

    #[test]
    fn test_metropolis_accepts_improvement() {
        assert_eq!(Metropolis.probability(1.0, 2.0, 0.5), 1.0);
    }

    #[test]
    fn test_metropolis_equal_energy_is_one() {
        assert_eq!(Metropolis.probability(2.0, 2.0, 0.5), 1.0);
    }

    #[test]
    fn test_metropolis_worsening() {
        let p = Metropolis.probability(3.0, 2.0, 1.0);
        assert!((p - (-1.0f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_metropolis_cold_rejects() {
        let p = Metropolis.probability(3.0, 2.0, 1e-9);
        assert!(p < 1e-12);
    }

    #[test]
    fn test_metropolis_rejects_nan() {
        assert_eq!(Metropolis.probability(f64::NAN, 1.0, 1.0), 0.0);
        assert_eq!(Metropolis.probability(f64::NAN, 1.0, 1e9), 0.0);
    }

    #[test]
    fn test_closure_hooks() {
        let decay = |t: f64| t - 1.0;
        assert_eq!(decay.decay(5.0), 4.0);

        let accept = |_: f64, _: f64, _: f64| 0.25;
        assert_eq!(accept.probability(0.0, 0.0, 1.0), 0.25);

        let energy = |x: &f64| x * x;
        assert_eq!(Energy::energy(&energy, &3.0), 9.0);

        let step = |x: &f64, rng: &mut dyn RngCore| x + rng.random_range(-1.0..1.0);
        let mut rng = create_rng(1);
        let next = step.neighbor(&0.0, &mut rng);
        assert!((-1.0..1.0).contains(&next));
    }

    #[test]
    fn test_cooling_schedule_is_decay() {
        let schedule = CoolingSchedule::Geometric { rate: 2.0 };
        assert_eq!(schedule.decay(8.0), 4.0);
    }
}
