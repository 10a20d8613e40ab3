//! Simulated gesture detector.
//!
//! Stands in for a camera and classifier: every sample picks one candidate
//! uniformly at random (optionally including "no gesture") with a
//! confidence drawn from [0.5, 1.0).

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use gestureflow_common::{FeedConfig, GestureDetection};

/// Lower bound of the simulated confidence range (inclusive).
pub const MIN_CONFIDENCE: f64 = 0.5;

/// Upper bound of the simulated confidence range (exclusive).
pub const MAX_CONFIDENCE: f64 = 1.0;

/// Random source for simulated detections.
pub struct DetectionSimulator {
    /// Random number generator.
    rng: SmallRng,
    /// Candidate outcomes; `None` is a "no gesture" sample.
    candidates: Vec<Option<String>>,
}

impl DetectionSimulator {
    /// Create a simulator seeded from system entropy.
    pub fn new(candidates: Vec<Option<String>>) -> Self {
        Self::with_rng(SmallRng::from_os_rng(), candidates)
    }

    /// Create a simulator with a fixed seed (reproducible sequence).
    pub fn seeded(seed: u64, candidates: Vec<Option<String>>) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed), candidates)
    }

    fn with_rng(rng: SmallRng, candidates: Vec<Option<String>>) -> Self {
        Self { rng, candidates }
    }

    /// Create a simulator from the feed configuration.
    pub fn from_config(config: &FeedConfig) -> Self {
        let mut candidates: Vec<Option<String>> =
            config.candidates.iter().cloned().map(Some).collect();
        if config.include_none {
            candidates.push(None);
        }

        match config.seed {
            Some(seed) => Self::seeded(seed, candidates),
            None => Self::new(candidates),
        }
    }

    /// Candidate outcomes in selection order.
    pub fn candidates(&self) -> &[Option<String>] {
        &self.candidates
    }

    /// Draw one detection stamped with `timestamp`.
    pub fn sample(&mut self, timestamp: i64) -> GestureDetection {
        let gesture_id = if self.candidates.is_empty() {
            None
        } else {
            let index = self.rng.random_range(0..self.candidates.len());
            self.candidates[index].clone()
        };
        let confidence = self.rng.random_range(MIN_CONFIDENCE..MAX_CONFIDENCE);

        GestureDetection::new(gesture_id, confidence, timestamp)
    }
}

impl Default for DetectionSimulator {
    fn default() -> Self {
        Self::from_config(&FeedConfig::default())
    }
}
