//! Seeded randomness for reproducible random graphs.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Random source handed to `gen_random_undirected` and friends.
///
/// Built from one `u64`; two handles with the same seed yield the same
/// edge samples, so `--random N --seed S` always draws the same graph.
#[derive(Debug, Clone)]
pub struct RngHandle(StdRng);

impl RngHandle {
    /// Seeds a handle.
    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RngCore for RngHandle {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}
