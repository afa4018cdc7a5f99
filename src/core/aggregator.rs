use crate::models::index::GreedFearIndex;
use crate::models::observation::Observation;

/// Greed = sum of positive scores, Fear = |sum of negative scores|.
///
/// With no signed scores at all the index sits at the 50/50 midpoint.
pub fn compute_index(observations: &[Observation]) -> GreedFearIndex {
    let greed: f64 = observations
        .iter()
        .filter(|o| o.score > 0.0)
        .map(|o| o.score)
        .sum();

    let fear: f64 = observations
        .iter()
        .filter(|o| o.score < 0.0)
        .map(|o| o.score)
        .sum::<f64>()
        .abs();

    let total = greed + fear;
    if total == 0.0 {
        return GreedFearIndex {
            greed,
            fear,
            ..GreedFearIndex::default()
        };
    }

    let greed_percent = greed / total * 100.0;

    GreedFearIndex {
        greed,
        fear,
        greed_percent,
        fear_percent: 100.0 - greed_percent,
    }
}

/// Oldest first, ties broken by id; rows without a timestamp lead.
/// Used by the trend chart.
pub fn chronological(observations: &[Observation]) -> Vec<Observation> {
    let mut out = observations.to_vec();
    out.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then(a.id.cmp(&b.id)));
    out
}
