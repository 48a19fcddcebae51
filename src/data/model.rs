use chrono::NaiveDate;

use super::group::Grouped;

// ---------------------------------------------------------------------------
// Rows – one typed record per CSV line
// ---------------------------------------------------------------------------

/// A post's like count tagged with the poster's age bracket.
#[derive(Debug, Clone, PartialEq)]
pub struct AgeLikes {
    pub age_group: String,
    pub likes: f64,
}

/// A post's like count tagged with platform and post type.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformLikes {
    pub platform: String,
    pub post_type: String,
    pub likes: f64,
}

/// A post's like count tagged with the calendar day it was posted.
#[derive(Debug, Clone, PartialEq)]
pub struct DatedLikes {
    pub date: NaiveDate,
    pub likes: f64,
}

// ---------------------------------------------------------------------------
// Summaries – what the aggregators produce
// ---------------------------------------------------------------------------

/// Five-number summary of one category.
///
/// Always satisfies `min <= q1 <= median <= q3 <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantileSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Mean measure of one (primary, optional secondary) key.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMean {
    pub primary_key: String,
    pub secondary_key: Option<String>,
    pub mean: f64,
}

/// Mean measure of one calendar day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub mean: f64,
}

// ---------------------------------------------------------------------------
// Chart-ready bundles handed to the plotting layer
// ---------------------------------------------------------------------------

/// Likes-by-age boxplot input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoxplotData {
    /// Distinct age groups in first-occurrence order (x domain).
    pub categories: Vec<String>,
    pub summaries: Grouped<String, QuantileSummary>,
}

/// Average likes by platform and post type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedBarData {
    /// Distinct platforms in first-occurrence order (outer band domain).
    pub platforms: Vec<String>,
    /// Distinct post types in first-occurrence order (inner band and colour domain).
    pub post_types: Vec<String>,
    /// platform → post type → mean likes.
    pub means: Grouped<String, Grouped<String, f64>>,
    /// `means` flattened in group discovery order.
    pub bars: Vec<CategoryMean>,
}

impl GroupedBarData {
    /// Largest mean across all bars, `0.0` when there are none.
    pub fn max_mean(&self) -> f64 {
        self.bars.iter().map(|b| b.mean).fold(0.0, f64::max)
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// Average likes per day, ascending by date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeriesData {
    pub points: Vec<TimeSeriesPoint>,
}

impl TimeSeriesData {
    /// Earliest and latest date, if any.
    pub fn extent(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.points.first()?.date, self.points.last()?.date))
    }

    pub fn max_mean(&self) -> f64 {
        self.points.iter().map(|p| p.mean).fold(0.0, f64::max)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl BoxplotData {
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}
