//! Simulated temperature source.
//!
//! A [`Sampler`] draws one reading per call; [`spawn_sampler`] wraps it in a
//! background Tokio task that ticks on a fixed interval and forwards each
//! reading through the returned channel.

use chrono::Local;
use floe_core::reading::{Reading, TIMESTAMP_FORMAT};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time;

/// Generates simulated readings within a fixed temperature range.
#[derive(Debug)]
pub struct Sampler {
    rng: StdRng,
    range: RangeInclusive<f64>,
}

impl Sampler {
    /// Sampler over `[min, max]` °C, seeded from OS entropy.
    pub fn new(min: f64, max: f64) -> Self {
        Self::with_rng(StdRng::from_entropy(), min, max)
    }

    /// Deterministic sampler for tests.
    pub fn seeded(seed: u64, min: f64, max: f64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), min, max)
    }

    fn with_rng(rng: StdRng, min: f64, max: f64) -> Self {
        // Normalise an inverted range rather than panicking in gen_range.
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        Self { rng, range: lo..=hi }
    }

    /// Produce one reading: a uniform draw rounded to one decimal, stamped
    /// with the current local time. Total — cannot fail.
    pub fn sample(&mut self) -> Reading {
        let raw: f64 = self.rng.gen_range(self.range.clone());
        let temperature = (raw * 10.0).round() / 10.0;
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        Reading::new(temperature, timestamp)
    }
}

/// Spawn a background Tokio task that generates one [`Reading`] every
/// `interval` and forwards it through the returned channel.
///
/// Exactly one reading is minted per tick. The task stops automatically when
/// the receiver is dropped.
pub fn spawn_sampler(interval: Duration, min: f64, max: f64) -> mpsc::Receiver<Reading> {
    let (tx, rx) = mpsc::channel(4);

    tokio::spawn(async move {
        let mut sampler = Sampler::new(min, max);
        // The first tick fires immediately, so the dashboard isn't blank
        // for a full interval after launch.
        let mut ticker = time::interval(interval);

        loop {
            ticker.tick().await;
            if tx.send(sampler.sample()).await.is_err() {
                tracing::debug!("sampler receiver dropped; stopping");
                break;
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn samples_stay_inside_the_range() {
        let mut sampler = Sampler::seeded(7, -18.0, -16.0);
        for _ in 0..200 {
            let r = sampler.sample();
            assert!((-18.0..=-16.0).contains(&r.temperature), "{}", r.temperature);
        }
    }

    #[test]
    fn samples_are_rounded_to_one_decimal() {
        let mut sampler = Sampler::seeded(7, -18.0, -16.0);
        for _ in 0..50 {
            let t = sampler.sample().temperature;
            assert!((t * 10.0 - (t * 10.0).round()).abs() < 1e-9, "{t}");
        }
    }

    #[test]
    fn timestamps_parse_back_with_the_wire_format() {
        let mut sampler = Sampler::seeded(7, -18.0, -16.0);
        let r = sampler.sample();
        assert!(NaiveDateTime::parse_from_str(&r.timestamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn seeded_samplers_are_deterministic() {
        let mut a = Sampler::seeded(42, -18.0, -16.0);
        let mut b = Sampler::seeded(42, -18.0, -16.0);
        for _ in 0..10 {
            assert_eq!(a.sample().temperature, b.sample().temperature);
        }
    }

    #[test]
    fn inverted_range_is_normalised() {
        let mut sampler = Sampler::seeded(7, -16.0, -18.0);
        let r = sampler.sample();
        assert!((-18.0..=-16.0).contains(&r.temperature));
    }
}
