/*!
 * Seeded Random Source
 *
 * Deterministic generator for tests that need randomness but must be
 * reproducible when they fail.
 *
 * # Algorithm
 *
 * PCG-64 (XSL-RR 128/64, `rand_pcg::Pcg64`) seeded through
 * `SeedableRng::seed_from_u64`. Both are value-stable across platforms and
 * crate releases, so a seed copied from a CI log replays bit-for-bit locally.
 *
 * # Usage Constraint
 *
 * `random()` takes `&mut self`; share an instance across threads only behind
 * a lock. One instance per test is the intended pattern.
 */

use super::config::RandomConfig;
use super::traits::RandomSource;
use crate::core::limits::RANDOM_SEED_ENV;
use crate::monitoring::init_test_tracing;
use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

/// Random number generator which logs its seed when created
///
/// To replay a run, set `TEST_RANDOM_SEED` to the logged seed.
#[derive(Debug)]
pub struct SeededRandomSource {
    seed: i32,
    generator: Pcg64,
}

impl SeededRandomSource {
    /// Seed from `TEST_RANDOM_SEED`, or from OS entropy when it is unset
    ///
    /// A malformed override is reported and ignored; construction never fails.
    pub fn new() -> Self {
        ensure_subscriber();
        let config = RandomConfig::from_env().unwrap_or_else(|err| {
            warn!(error = %err, "ignoring malformed seed override");
            RandomConfig::default()
        });
        Self::from_config(&config)
    }

    /// Seed explicitly
    pub fn with_seed(seed: i32) -> Self {
        Self::from_config(&RandomConfig::with_seed(seed))
    }

    /// Seed from a configuration, drawing entropy if it carries no seed
    ///
    /// Installs the test subscriber if nothing else has, so the seed line is
    /// never dropped.
    pub fn from_config(config: &RandomConfig) -> Self {
        ensure_subscriber();

        let seed = config.seed.unwrap_or_else(entropy_seed);
        info!(
            seed,
            replay_with = RANDOM_SEED_ENV,
            "test random generator seeded"
        );

        Self {
            seed,
            generator: Pcg64::seed_from_u64(u64::from(seed as u32)),
        }
    }

    /// The seed this instance was created with
    #[inline]
    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Next value of the deterministic sequence
    #[inline]
    pub fn random(&mut self) -> u64 {
        self.generator.next_u64()
    }
}

impl Default for SeededRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SeededRandomSource {
    #[inline]
    fn random(&mut self) -> u64 {
        SeededRandomSource::random(self)
    }

    #[inline]
    fn seed(&self) -> i32 {
        self.seed
    }
}

// Lets rand distributions and `Rng` adapters draw from the same sequence
impl RngCore for SeededRandomSource {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.generator.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.generator.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.generator.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.generator.try_fill_bytes(dest)
    }
}

/// Make sure seed reports reach some subscriber
fn ensure_subscriber() {
    if !tracing::dispatcher::has_been_set() {
        init_test_tracing();
    }
}

/// Draw a seed from the OS, falling back to the wall clock
fn entropy_seed() -> i32 {
    let mut bytes = [0u8; 4];
    match OsRng.try_fill_bytes(&mut bytes) {
        Ok(()) => i32::from_ne_bytes(bytes),
        Err(err) => {
            warn!(error = %err, "OS entropy unavailable, seeding from clock");
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() as i32 ^ d.as_secs() as i32)
                .unwrap_or_default()
        }
    }
}
