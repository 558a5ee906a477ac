//! Synthetic patient vitals.
//!
//! Presentational flavor only: vitals are never scored. During the
//! Emergency phase the simulator redraws heart rate and oxygen saturation
//! on a fixed cadence of *simulated* seconds, decoupled from how often the
//! host delivers the time signal. All other fields keep their last value.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::schema::{VitalsBaseline, VitalsConfig};

/// A patient vitals snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Vitals {
    /// Heart rate in beats per minute
    pub heart_rate: u16,
    /// Blood pressure display string, e.g. "120/80"
    pub blood_pressure: String,
    /// Respiration rate in breaths per minute
    pub respiration: u16,
    /// Body temperature in degrees Fahrenheit
    pub temperature: f64,
    /// Oxygen saturation percentage
    pub oxygen_saturation: u16,
}

impl Vitals {
    /// Builds the initial snapshot from a configured baseline.
    #[must_use]
    pub fn from_baseline(baseline: &VitalsBaseline) -> Self {
        Self {
            heart_rate: baseline.heart_rate,
            blood_pressure: baseline.blood_pressure.clone(),
            respiration: baseline.respiration,
            temperature: baseline.temperature,
            oxygen_saturation: baseline.oxygen_saturation,
        }
    }
}

/// Cadence-tracked vitals refresher.
///
/// Armed when the Emergency phase is entered; each call to [`advance`]
/// performs one redraw per full cadence interval crossed since the last
/// refresh, so a large jump in the time signal yields the appropriate
/// number of redraws.
///
/// [`advance`]: VitalsSimulator::advance
#[derive(Debug, Clone)]
pub struct VitalsSimulator {
    config: VitalsConfig,
    /// Simulated second at which the next redraw is due, when armed.
    next_refresh_at: Option<f64>,
}

impl VitalsSimulator {
    /// Creates a disarmed simulator.
    #[must_use]
    pub const fn new(config: VitalsConfig) -> Self {
        Self {
            config,
            next_refresh_at: None,
        }
    }

    /// Starts the refresh cadence, anchored at `elapsed` simulated seconds.
    pub fn arm(&mut self, elapsed: f64) {
        self.next_refresh_at = Some(elapsed + self.config.refresh_seconds);
    }

    /// Stops the refresh cadence.
    pub fn disarm(&mut self) {
        self.next_refresh_at = None;
    }

    /// Advances simulated time, redrawing `vitals` once per cadence
    /// interval crossed. Returns the number of redraws performed.
    ///
    /// A non-positive or non-finite cadence performs no redraws; the catch-up
    /// loop requires a strictly advancing due time to terminate.
    pub fn advance<R: Rng>(&mut self, elapsed: f64, vitals: &mut Vitals, rng: &mut R) -> usize {
        let cadence = self.config.refresh_seconds;
        if !cadence.is_finite() || cadence <= 0.0 {
            return 0;
        }
        let Some(mut due) = self.next_refresh_at else {
            return 0;
        };

        let mut refreshes = 0;
        while elapsed >= due {
            self.redraw(vitals, rng);
            due += self.config.refresh_seconds;
            refreshes += 1;
        }

        self.next_refresh_at = Some(due);
        refreshes
    }

    fn redraw<R: Rng>(&self, vitals: &mut Vitals, rng: &mut R) {
        let hr = self.config.heart_rate_range;
        let spo2 = self.config.oxygen_saturation_range;
        vitals.heart_rate = rng.random_range(hr.min..=hr.max);
        vitals.oxygen_saturation = rng.random_range(spo2.min..=spo2.max);
    }
}
