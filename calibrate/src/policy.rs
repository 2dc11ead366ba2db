//! Gain adjustment policy.
//!
//! A strict waterfall over the amplitude statistics of the recorded
//! waveforms, ordered most recent first:
//!
//! 1. no active recordings -> hold
//! 2. latest recording clips -> step down (or advise at the floor)
//! 3. latest recording is weak -> step up (or advise at the ceiling)
//! 4. median RMS over all active recordings decides, within headroom
//!
//! Each rule short-circuits the rest, and only single-step adjustments
//! are ever proposed; calibration is applied iteratively across runs.

use audio_stats::AudioStats;
use sensor_config::GainLadder;
use std::cmp::Ordering;

/// Amplitude thresholds driving the policy. Passed in explicitly so
/// tests can run with alternate values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// RMS above which a recording counts as active.
    pub activity_rms: f64,

    /// Peak amplitude above which a recording counts as clipped.
    pub clipping_peak: f64,

    /// RMS below which the latest recording counts as weak.
    pub weak_rms: f64,

    /// Acceptable band for the median RMS, inclusive on both ends.
    pub median_low: f64,
    pub median_high: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            activity_rms: 0.01,
            clipping_peak: 0.95,
            weak_rms: 0.05,
            median_low: 0.05,
            median_high: 0.5,
        }
    }
}

/// Statistics of one waveform file together with its origin, used in
/// adjustment reasons.
#[derive(Debug, Clone)]
pub struct StatsRecord {
    pub stats: AudioStats,
    pub source: String,
}

/// Outcome of one policy evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// Move the sensor to `gain`, one ladder step away from the
    /// current setting.
    Adjust { gain: u32, reason: String },

    /// Leave the gain alone.
    Hold { reason: String },
}

impl Decision {
    pub fn reason(&self) -> &str {
        match self {
            Decision::Adjust { reason, .. } | Decision::Hold { reason } => reason,
        }
    }
}

/// Evaluates the waterfall for `records` sorted most recent first.
///
/// `current_gain` must be a member of `ladder`; the caller validates
/// that before evaluating.
pub fn evaluate(
    records: &[StatsRecord],
    current_gain: u32,
    ladder: &GainLadder,
    thresholds: &Thresholds,
) -> Decision {
    let active: Vec<&StatsRecord> = records
        .iter()
        .filter(|r| r.stats.is_active(thresholds.activity_rms))
        .collect();

    let Some(latest) = active.first() else {
        return Decision::Hold {
            reason: "No active periods detected.".to_string(),
        };
    };

    if latest
        .stats
        .peak_amplitude()
        .is_some_and(|peak| peak > thresholds.clipping_peak)
    {
        return match ladder.step_down(current_gain) {
            Some(gain) => Decision::Adjust {
                gain,
                reason: format!("Clipping detected in {}.", latest.source),
            },
            None => Decision::Hold {
                reason: "Clipping detected at minimum gain. Check the sensor attachment."
                    .to_string(),
            },
        };
    }

    // active implies the RMS field is present
    let latest_rms = latest.stats.rms_amplitude.unwrap_or_default();
    if latest_rms < thresholds.weak_rms {
        return match ladder.step_up(current_gain) {
            Some(gain) => Decision::Adjust {
                gain,
                reason: format!("Weak signal in {}.", latest.source),
            },
            None => Decision::Hold {
                reason: "Weak signal at maximum gain. Check the sensor attachment."
                    .to_string(),
            },
        };
    }

    let mut rms_values: Vec<f64> = active
        .iter()
        .filter_map(|r| r.stats.rms_amplitude)
        .collect();
    let median = median(&mut rms_values);

    if median >= thresholds.median_low && median <= thresholds.median_high {
        Decision::Hold {
            reason: "Gain is appropriate.".to_string(),
        }
    } else if median < thresholds.median_low {
        match ladder.step_up(current_gain) {
            Some(gain) => Decision::Adjust {
                gain,
                reason: format!("Median RMS amplitude {median:.3} is below the target range."),
            },
            None => Decision::Hold {
                reason: "Gain is maintained.".to_string(),
            },
        }
    } else {
        match ladder.step_down(current_gain) {
            Some(gain) => Decision::Adjust {
                gain,
                reason: format!("Median RMS amplitude {median:.3} is above the target range."),
            },
            None => Decision::Hold {
                reason: "Gain is maintained.".to_string(),
            },
        }
    }
}

fn median(values: &mut [f64]) -> f64 {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) / 2.0
    }
}
