/// Collapses a declared salary range into a single estimate.
///
/// A bound of zero counts as absent. When only one bound is declared the
/// estimate is skewed towards it: stated minimums tend to underestimate
/// actual pay by about 20%, stated maximums to overestimate by the same
/// margin. With both bounds present the estimate is the integer midpoint.
pub fn estimate_salary(from: Option<i64>, to: Option<i64>) -> Option<f64> {
    let from = from.filter(|v| *v != 0);
    let to = to.filter(|v| *v != 0);

    match (from, to) {
        (Some(from), Some(to)) => Some(((from + to) / 2) as f64),
        (Some(from), None) => Some(from as f64 * 1.2),
        (None, Some(to)) => Some(to as f64 * 0.8),
        (None, None) => None,
    }
}
