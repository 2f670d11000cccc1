//! Shared helpers for the xguid benches

use rand::{Rng, SeedableRng};
use xguid::Guid;

/// Deterministic guid fixtures so runs are comparable.
pub fn sample_guids(count: usize) -> Vec<Guid> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5eed);
    (0..count).map(|_| Guid::new(rng.gen())).collect()
}

/// Canonical renderings of `sample_guids(count)`.
pub fn sample_strings(count: usize) -> Vec<String> {
    sample_guids(count).iter().map(Guid::to_string).collect()
}
