use once_cell::sync::Lazy;
use regex::Regex;

static RMS_AMPLITUDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"RMS\s+amplitude:\s+(-?\d+\.\d+)").unwrap());

static MAX_AMPLITUDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Maximum\s+amplitude:\s+(-?\d+\.\d+)").unwrap());

static MIN_AMPLITUDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Minimum\s+amplitude:\s+(-?\d+\.\d+)").unwrap());

/// Amplitude statistics of one analyzed waveform file.
///
/// Fields the analysis tool did not report are `None`; a record with a
/// missing RMS amplitude can never be considered active.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AudioStats {
    pub rms_amplitude: Option<f64>,
    pub max_amplitude: Option<f64>,
    pub min_amplitude: Option<f64>,
}

impl AudioStats {
    /// Parses the textual report of `sox <file> -n stat`.
    ///
    /// Lines that do not match any known statistic are ignored, so a
    /// partial report yields a partial record.
    pub fn from_stat_report(report: &str) -> Self {
        let field = |re: &Regex| {
            re.captures(report)
                .and_then(|caps| caps[1].parse::<f64>().ok())
        };

        Self {
            rms_amplitude: field(&RMS_AMPLITUDE),
            max_amplitude: field(&MAX_AMPLITUDE),
            min_amplitude: field(&MIN_AMPLITUDE),
        }
    }

    /// Whether the waveform carries a real signal rather than noise.
    pub fn is_active(&self, activity_threshold: f64) -> bool {
        self.rms_amplitude
            .is_some_and(|rms| rms > activity_threshold)
    }

    /// Largest absolute excursion over the reported amplitude extremes.
    pub fn peak_amplitude(&self) -> Option<f64> {
        match (self.max_amplitude, self.min_amplitude) {
            (None, None) => None,
            (max, min) => Some(
                max.map_or(0.0, f64::abs)
                    .max(min.map_or(0.0, f64::abs)),
            ),
        }
    }
}
