//! Salary estimation shared by all job boards.
//!
//! Bounds equal to zero are treated like missing bounds.

fn known(bound: Option<f64>) -> Option<f64> {
    bound.filter(|value| *value != 0.0)
}

/// Estimate a single monthly salary from a lower and an upper bound
pub fn estimate(from: Option<f64>, to: Option<f64>) -> Option<f64> {
    match (known(from), known(to)) {
        (Some(from), Some(to)) => Some((from + to) / 2.0),
        (Some(from), None) => Some(from * 1.2),
        (None, Some(to)) => Some(to * 0.8),
        (None, None) => None,
    }
}
