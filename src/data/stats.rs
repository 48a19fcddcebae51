use super::model::QuantileSummary;

/// Quantile of an ascending-sorted slice by linear interpolation between the
/// two nearest ranks (R-7): `pos = p * (n - 1)`.
///
/// Returns `None` for an empty slice. `p` is clamped to `[0, 1]`.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let pos = p.clamp(0.0, 1.0) * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

impl QuantileSummary {
    /// Five-number summary of `values` (any order). `None` when empty.
    pub fn from_values(mut values: Vec<f64>) -> Option<Self> {
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    pub fn from_sorted(sorted: &[f64]) -> Option<Self> {
        Some(QuantileSummary {
            min: *sorted.first()?,
            q1: quantile_sorted(sorted, 0.25)?,
            median: quantile_sorted(sorted, 0.5)?,
            q3: quantile_sorted(sorted, 0.75)?,
            max: *sorted.last()?,
        })
    }
}
