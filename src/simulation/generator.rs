//! Random request generation for headless runs

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::types::Request;

/// Produces random valid requests for a building
pub struct RequestGenerator {
    num_floors: usize,
    /// Optional seeded RNG for reproducible runs
    rng: Option<StdRng>,
}

impl RequestGenerator {
    pub fn new(num_floors: usize) -> Self {
        Self {
            num_floors,
            rng: None,
        }
    }

    /// Create a generator with a seeded RNG for reproducible runs
    pub fn new_with_seed(num_floors: usize, seed: u64) -> Self {
        Self {
            num_floors,
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }

    fn random_floor(&mut self) -> usize {
        let range = 0..self.num_floors;
        match &mut self.rng {
            Some(rng) => rng.random_range(range),
            None => rand::rng().random_range(range),
        }
    }

    /// Draw a request with distinct start and end floors
    ///
    /// Returns `None` for a single-floor building, where no such request exists.
    pub fn next_request(&mut self) -> Option<Request> {
        if self.num_floors < 2 {
            return None;
        }
        let start = self.random_floor();
        let mut end = self.random_floor();
        while end == start {
            end = self.random_floor();
        }
        Some(Request::new(start, end))
    }
}
