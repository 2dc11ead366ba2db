/// Amplifier gain settings the acquisition hardware supports, in
/// ascending order.
pub const AVAILABLE_GAINS: [u32; 8] = [0, 1, 2, 5, 10, 20, 50, 100];

/// Ordered set of discrete amplifier gain settings.
///
/// "One step up/down" always means the adjacent entry; stepping past
/// either end yields `None`, never a clamp to a different value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GainLadder(Vec<u32>);

impl Default for GainLadder {
    fn default() -> Self {
        Self(AVAILABLE_GAINS.to_vec())
    }
}

impl GainLadder {
    /// Builds a ladder from an explicit ascending sequence.
    pub fn new(gains: Vec<u32>) -> Self {
        Self(gains)
    }

    pub fn contains(&self, gain: u32) -> bool {
        self.0.contains(&gain)
    }

    /// Lowest gain setting on the ladder.
    pub fn floor(&self) -> Option<u32> {
        self.0.first().copied()
    }

    /// Highest gain setting on the ladder.
    pub fn ceiling(&self) -> Option<u32> {
        self.0.last().copied()
    }

    /// Next lower gain setting, or `None` at the floor or for a gain
    /// that is not on the ladder.
    pub fn step_down(&self, gain: u32) -> Option<u32> {
        let index = self.0.iter().position(|&g| g == gain)?;
        index.checked_sub(1).map(|i| self.0[i])
    }

    /// Next higher gain setting, or `None` at the ceiling or for a
    /// gain that is not on the ladder.
    pub fn step_up(&self, gain: u32) -> Option<u32> {
        let index = self.0.iter().position(|&g| g == gain)?;
        self.0.get(index + 1).copied()
    }
}
