use rand::rngs::ThreadRng;
use rand::Rng;

use crate::core::game::{Game, GameSet};
use crate::domain::config::NumberPool;
use crate::domain::error::{SenaGenError, SenaGenResult};

/// Source of draw candidates, the seam deterministic tests plug into
pub trait NumberSource {
    /// Next candidate in `[lowest, highest]`, both ends inclusive
    fn next_candidate(&mut self, lowest: u8, highest: u8) -> u8;
}

/// Uniformly distributed candidates backed by a `rand` generator
pub struct RandomSource<R: Rng> {
    rng: R,
}

impl RandomSource<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomSource<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomSource<R> {
    /// Use a caller-provided generator, e.g. a seeded one
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> NumberSource for RandomSource<R> {
    fn next_candidate(&mut self, lowest: u8, highest: u8) -> u8 {
        self.rng.gen_range(lowest..=highest)
    }
}

/// Game generator drawing unique numbers from a fixed pool
pub struct GameGenerator<S: NumberSource> {
    pool: NumberPool,
    source: S,
}

impl GameGenerator<RandomSource<ThreadRng>> {
    pub fn new(pool: NumberPool) -> Self {
        Self::with_source(pool, RandomSource::new())
    }
}

impl<S: NumberSource> GameGenerator<S> {
    pub fn with_source(pool: NumberPool, source: S) -> Self {
        Self { pool, source }
    }

    /// Generate `quantity` games of `size` unique numbers each.
    ///
    /// Fails fast when `size` exceeds the pool; the rejection loop in
    /// `draw_game` could not terminate otherwise. A quantity of zero
    /// yields an empty set. Games within a set are not guaranteed to
    /// be distinct from each other.
    pub fn generate(&mut self, quantity: u32, size: u8) -> SenaGenResult<GameSet> {
        let available = self.pool.len();
        if size as usize > available {
            return Err(SenaGenError::Draw { size, available });
        }

        let mut games = Vec::with_capacity(quantity as usize);
        for _ in 0..quantity {
            games.push(self.draw_game(size));
        }

        tracing::debug!("Generated {} games of size {}", games.len(), size);
        Ok(GameSet::new(games))
    }

    fn draw_game(&mut self, size: u8) -> Game {
        let mut numbers: Vec<u8> = Vec::with_capacity(size as usize);

        while numbers.len() < size as usize {
            let candidate = self
                .source
                .next_candidate(self.pool.lowest, self.pool.highest);

            if !numbers.contains(&candidate) {
                numbers.push(candidate);
            }
        }

        Game::from_numbers(numbers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::VecDeque;

    /// Replays a fixed candidate sequence
    struct SequenceSource {
        values: VecDeque<u8>,
    }

    impl SequenceSource {
        fn new(values: &[u8]) -> Self {
            Self {
                values: values.iter().copied().collect(),
            }
        }
    }

    impl NumberSource for SequenceSource {
        fn next_candidate(&mut self, _lowest: u8, _highest: u8) -> u8 {
            self.values.pop_front().expect("sequence exhausted")
        }
    }

    #[test]
    fn test_deterministic_sequence_produces_expected_game() {
        let source = SequenceSource::new(&[1, 2, 3, 4, 5, 6]);
        let mut generator = GameGenerator::with_source(NumberPool::default(), source);

        let games = generator.generate(1, 6).unwrap();

        assert_eq!(games.len(), 1);
        assert_eq!(
            games.games()[0].formatted(),
            vec!["01", "02", "03", "04", "05", "06"]
        );
    }

    #[test]
    fn test_repeated_candidates_are_rejected() {
        let source = SequenceSource::new(&[5, 5, 5, 1, 2, 3, 4, 6]);
        let mut generator = GameGenerator::with_source(NumberPool::default(), source);

        let games = generator.generate(1, 6).unwrap();

        assert_eq!(games.games()[0].numbers(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_size_exceeding_pool_fails_fast() {
        let pool = NumberPool {
            lowest: 1,
            highest: 10,
        };
        let mut generator = GameGenerator::new(pool);

        let result = generator.generate(1, 11);

        match result {
            Err(SenaGenError::Draw { size, available }) => {
                assert_eq!(size, 11);
                assert_eq!(available, 10);
            }
            other => panic!("expected draw error, got {:?}", other.map(|g| g.len())),
        }
    }

    #[test]
    fn test_zero_quantity_yields_empty_set() {
        let mut generator = GameGenerator::new(NumberPool::default());
        let games = generator.generate(0, 6).unwrap();

        assert!(games.is_empty());
    }

    #[test]
    fn test_maximum_size_terminates() {
        let mut generator = GameGenerator::new(NumberPool::default());
        let games = generator.generate(10, 15).unwrap();

        for game in &games {
            assert_eq!(game.len(), 15);
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let pool = NumberPool::default();
        let mut first = GameGenerator::with_source(
            pool.clone(),
            RandomSource::with_rng(StdRng::seed_from_u64(42)),
        );
        let mut second = GameGenerator::with_source(
            pool,
            RandomSource::with_rng(StdRng::seed_from_u64(42)),
        );

        assert_eq!(
            first.generate(5, 6).unwrap(),
            second.generate(5, 6).unwrap()
        );
    }

    proptest! {
        #[test]
        fn prop_generated_games_respect_invariants(quantity in 0u32..20, size in 6u8..=15) {
            let mut generator = GameGenerator::new(NumberPool::default());
            let games = generator.generate(quantity, size).unwrap();

            prop_assert_eq!(games.len(), quantity as usize);
            for game in &games {
                prop_assert_eq!(game.len(), size as usize);
                // Strictly ascending implies sorted and duplicate-free
                prop_assert!(game.numbers().windows(2).all(|w| w[0] < w[1]));
                prop_assert!(game.numbers().iter().all(|n| (1..=60).contains(n)));
                prop_assert!(game.formatted().iter().all(|s| s.len() == 2));
            }
        }
    }
}
