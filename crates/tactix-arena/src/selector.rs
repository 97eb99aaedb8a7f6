use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Picks one move out of equally ranked candidates. Injected into any
/// player that ranks moves and can end up with ties.
pub trait EqualMoveSelector {
    /// Select from `candidates`; `None` only when the slice is empty.
    fn select(&mut self, candidates: &[u8]) -> Option<u8>;
}

/// Deterministic tie-break: always the first candidate.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstMoveSelector;

impl EqualMoveSelector for FirstMoveSelector {
    fn select(&mut self, candidates: &[u8]) -> Option<u8> {
        candidates.first().copied()
    }
}

/// Seeded uniform tie-break among the candidates.
#[derive(Debug, Clone)]
pub struct RandomMoveSelector {
    rng: ChaCha8Rng,
}

impl RandomMoveSelector {
    pub fn new(seed: u64) -> Self {
        RandomMoveSelector {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl EqualMoveSelector for RandomMoveSelector {
    fn select(&mut self, candidates: &[u8]) -> Option<u8> {
        if candidates.is_empty() {
            return None;
        }
        candidates.get(self.rng.gen_range(0..candidates.len())).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_selector_takes_the_first_candidate() {
        let mut selector = FirstMoveSelector;
        assert_eq!(selector.select(&[4, 7, 9]), Some(4));
        assert_eq!(selector.select(&[]), None);
    }

    #[test]
    fn random_selector_stays_within_the_candidates() {
        let mut selector = RandomMoveSelector::new(7);
        let candidates = [2, 5, 8];
        for _ in 0..32 {
            let choice = selector.select(&candidates).expect("non-empty");
            assert!(candidates.contains(&choice));
        }
        assert_eq!(selector.select(&[]), None);
    }
}
