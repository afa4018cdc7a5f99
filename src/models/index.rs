use serde::Serialize;

/// Greed & Fear index derived from the stored scores.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct GreedFearIndex {
    /// Sum of all positive scores.
    pub greed: f64,
    /// Absolute value of the sum of all negative scores.
    pub fear: f64,
    pub greed_percent: f64,
    pub fear_percent: f64,
}

impl GreedFearIndex {
    /// Signed distance of the greed share from the 50% midpoint.
    pub fn delta(&self) -> f64 {
        self.greed_percent - 50.0
    }
}

impl Default for GreedFearIndex {
    fn default() -> Self {
        Self {
            greed: 0.0,
            fear: 0.0,
            greed_percent: 50.0,
            fear_percent: 50.0,
        }
    }
}
