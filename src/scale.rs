use chrono::{Datelike, NaiveDate};

// ---------------------------------------------------------------------------
// Band scale – categorical label → interval of a continuous range
// ---------------------------------------------------------------------------

/// Splits a continuous range into equal-width bands, one per label.
///
/// `padding` is the fraction of a step left empty, used both between bands
/// and (as a multiple of the step) at both ends. Leftover space is split
/// evenly on each side.
#[derive(Debug, Clone)]
pub struct BandScale {
    domain: Vec<String>,
    range: (f64, f64),
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let padding = padding.clamp(0.0, 1.0);
        let (r0, r1) = range;
        let n = domain.len() as f64;

        let step = (r1 - r0) / (n - padding + 2.0 * padding).max(1.0);
        let start = r0 + (r1 - r0 - step * (n - padding)) * 0.5;

        BandScale {
            domain,
            range,
            start,
            step,
            bandwidth: step * (1.0 - padding),
        }
    }

    /// A scale whose band centers fall on 0, 1, 2, … (step of exactly 1).
    pub fn unit(domain: Vec<String>, padding: f64) -> Self {
        let padding = padding.clamp(0.0, 1.0);
        let n = domain.len() as f64;
        let r0 = -(1.0 + padding) / 2.0;
        Self::new(domain, (r0, r0 + n + padding), padding)
    }

    /// Left edge of the band for `label`.
    pub fn start(&self, label: &str) -> Option<f64> {
        self.index_of(label)
            .map(|i| self.start + self.step * i as f64)
    }

    pub fn center(&self, label: &str) -> Option<f64> {
        self.start(label).map(|s| s + self.bandwidth / 2.0)
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.domain.iter().position(|d| d == label)
    }

    /// Label whose band center is at `coordinate`, within `tolerance`.
    pub fn label_at(&self, coordinate: f64, tolerance: f64) -> Option<&str> {
        self.domain
            .iter()
            .find(|d| {
                self.center(d)
                    .is_some_and(|c| (c - coordinate).abs() <= tolerance)
            })
            .map(String::as_str)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Both ends of the continuous range, outer padding included.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    #[cfg(test)]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[cfg(test)]
    pub fn domain(&self) -> &[String] {
        &self.domain
    }
}

// ---------------------------------------------------------------------------
// Date axis – calendar day ↔ plot coordinate
// ---------------------------------------------------------------------------

/// Plot x coordinate of a calendar day (days from the common era).
pub fn date_to_coordinate(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

/// Calendar day at plot x coordinate, rounded to the nearest day.
pub fn coordinate_to_date(x: f64) -> Option<NaiveDate> {
    if !x.is_finite() || x.abs() > f64::from(i32::MAX) {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
}

/// Short `M/D` axis label for a calendar day.
pub fn date_label(date: NaiveDate) -> String {
    format!("{}/{}", date.month(), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_band_scale_without_padding() {
        let scale = BandScale::new(labels(&["a", "b", "c", "d"]), (0.0, 100.0), 0.0);
        assert!(approx(scale.step(), 25.0));
        assert!(approx(scale.bandwidth(), 25.0));
        assert!(approx(scale.start("a").unwrap(), 0.0));
        assert!(approx(scale.start("d").unwrap(), 75.0));
        assert_eq!(scale.range(), (0.0, 100.0));
    }

    #[test]
    fn test_band_scale_with_padding() {
        // step = 120 / (3 - 0.2 + 0.4) = 37.5
        let scale = BandScale::new(labels(&["a", "b", "c"]), (0.0, 120.0), 0.2);
        assert!(approx(scale.step(), 37.5));
        assert!(approx(scale.bandwidth(), 30.0));
        assert!(approx(scale.start("a").unwrap(), 7.5));
        assert!(approx(scale.start("c").unwrap(), 82.5));
        assert_eq!(scale.start("z"), None);
    }

    #[test]
    fn test_unit_scale_centers_on_integers() {
        let scale = BandScale::unit(labels(&["18-24", "25-34", "35-44", "45-54"]), 0.3);
        assert!(approx(scale.step(), 1.0));
        assert!(approx(scale.bandwidth(), 0.7));
        for (i, label) in scale.domain().iter().enumerate() {
            assert!(approx(scale.center(label).unwrap(), i as f64));
        }
        assert_eq!(scale.label_at(2.0, 1e-6), Some("35-44"));
        assert_eq!(scale.label_at(2.5, 1e-6), None);

        // half a step plus half the padding beyond the outer centers
        let (lo, hi) = scale.range();
        assert!(approx(lo, -0.65));
        assert!(approx(hi, 3.65));
    }

    #[test]
    fn test_empty_band_scale() {
        let scale = BandScale::new(Vec::new(), (0.0, 10.0), 0.1);
        assert!(scale.domain().is_empty());
        assert_eq!(scale.center("a"), None);
    }

    #[test]
    fn test_date_coordinate_roundtrip() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let x = date_to_coordinate(day);
        assert_eq!(coordinate_to_date(x), Some(day));
        assert_eq!(coordinate_to_date(x + 0.4), Some(day));
        assert_eq!(coordinate_to_date(f64::NAN), None);
        assert_eq!(date_label(day), "3/7");
    }
}
