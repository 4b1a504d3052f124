//! Random decisions made by the simulation.
//!
//! The session draws every random choice through [`RandomSource`] so tests can
//! script enemy movement.

use rand::Rng;

use crate::config::game::PATROL_ODDS;
use crate::game::types::Direction;

pub trait RandomSource {
    /// Whether enemies patrol on this tick.
    fn roll_patrol(&mut self) -> bool;

    /// Direction for one enemy's patrol step.
    fn patrol_direction(&mut self) -> Direction;
}

/// [`RandomSource`] backed by any `rand` generator.
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<rand::rngs::ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn roll_patrol(&mut self) -> bool {
        self.rng.random_ratio(1, PATROL_ODDS)
    }

    fn patrol_direction(&mut self) -> Direction {
        Direction::CARDINAL[self.rng.random_range(0..Direction::CARDINAL.len())]
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_rng_source_covers_every_direction() {
        let mut source = RngSource::new(StdRng::seed_from_u64(7));
        let mut seen = Vec::new();
        for _ in 0..200 {
            let direction = source.patrol_direction();
            if !seen.contains(&direction) {
                seen.push(direction);
            }
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_patrol_roll_is_rare() {
        let mut source = RngSource::new(StdRng::seed_from_u64(42));
        let hits = (0..10_000).filter(|_| source.roll_patrol()).count();
        assert!((700..1300).contains(&hits), "hits={}", hits);
    }
}
