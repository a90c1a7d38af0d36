// src/delay.rs

//! Per-character delay sampling for the typewriter animations.
use rand::Rng;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_MIN_TYPE_DELAY_MS: u64 = 80;
pub const DEFAULT_MAX_TYPE_DELAY_MS: u64 = 120;
pub const DEFAULT_MIN_DELETE_DELAY_MS: u64 = 120;
pub const DEFAULT_MAX_DELETE_DELAY_MS: u64 = 240;

/// Bounds for a randomized per-character wait, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DelayRange {
    pub min: u64,
    pub max: u64,
}

/// How a [`DelayRange`] turns into a concrete wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelaySampling {
    /// Uniform in `[min, max)`.
    #[default]
    Uniform,
    /// `floor(r * (min - max)) + min`, the arithmetic the page originally shipped.
    /// With `min < max` this lands in `[2*min - max, min]`, clamped at zero.
    Legacy,
}

impl DelayRange {
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub const fn typing() -> Self {
        Self::new(DEFAULT_MIN_TYPE_DELAY_MS, DEFAULT_MAX_TYPE_DELAY_MS)
    }

    pub const fn deleting() -> Self {
        Self::new(DEFAULT_MIN_DELETE_DELAY_MS, DEFAULT_MAX_DELETE_DELAY_MS)
    }

    pub fn is_degenerate(&self) -> bool {
        self.min >= self.max
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, mode: DelaySampling) -> Duration {
        let ms = match mode {
            DelaySampling::Uniform => {
                if self.is_degenerate() {
                    self.min
                } else {
                    rng.gen_range(self.min..self.max)
                }
            }
            DelaySampling::Legacy => {
                let r: f64 = rng.gen();
                let span = self.min as f64 - self.max as f64;
                let value = (r * span).floor() as i64 + self.min as i64;
                value.max(0) as u64
            }
        };
        Duration::from_millis(ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = DelayRange::deleting();

        for _ in 0..1000 {
            let ms = range.sample(&mut rng, DelaySampling::Uniform).as_millis() as u64;
            assert!(ms >= 120 && ms < 240, "out of range: {}", ms);
        }
    }

    #[test]
    fn test_degenerate_range_uses_min() {
        let mut rng = StdRng::seed_from_u64(1);

        let reversed = DelayRange::new(200, 100);
        assert_eq!(reversed.sample(&mut rng, DelaySampling::Uniform), Duration::from_millis(200));

        let empty = DelayRange::new(50, 50);
        assert_eq!(empty.sample(&mut rng, DelaySampling::Uniform), Duration::from_millis(50));
    }

    #[test]
    fn test_legacy_reaches_below_min() {
        let mut rng = StdRng::seed_from_u64(42);
        let range = DelayRange::typing();

        let samples: Vec<u64> = (0..1000)
            .map(|_| range.sample(&mut rng, DelaySampling::Legacy).as_millis() as u64)
            .collect();

        // 80 + floor(r * -40) lies in [40, 80]
        assert!(samples.iter().all(|&ms| ms >= 40 && ms <= 80));
        assert!(samples.iter().any(|&ms| ms < 80));
    }

    #[test]
    fn test_legacy_never_negative() {
        let mut rng = StdRng::seed_from_u64(3);
        // 10 + floor(r * -490) goes far below zero before clamping
        let range = DelayRange::new(10, 500);

        for _ in 0..200 {
            let ms = range.sample(&mut rng, DelaySampling::Legacy).as_millis();
            assert!(ms <= 10);
        }
    }

    #[test]
    fn test_sampling_mode_from_yaml() {
        let mode: DelaySampling = serde_yaml::from_str("legacy").unwrap();
        assert_eq!(mode, DelaySampling::Legacy);
    }
}
