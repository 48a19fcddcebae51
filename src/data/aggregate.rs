use chrono::NaiveDate;

use super::group::{Grouped, distinct_in_order};
use super::model::{
    AgeLikes, BoxplotData, CategoryMean, DatedLikes, GroupedBarData, PlatformLikes,
    QuantileSummary, TimeSeriesData, TimeSeriesPoint,
};
use super::stats::mean;

// ---------------------------------------------------------------------------
// Quantiles per category
// ---------------------------------------------------------------------------

/// Five-number summary of likes for every age group.
pub fn quantiles_by_age_group(rows: &[AgeLikes]) -> Grouped<String, QuantileSummary> {
    Grouped::from_rows(rows, |r| r.age_group.clone(), |r| r.likes).map_values(summarize)
}

fn summarize(values: Vec<f64>) -> QuantileSummary {
    QuantileSummary::from_values(values).expect("Grouped::from_rows never yields an empty bucket")
}

pub fn boxplot_data(rows: &[AgeLikes]) -> BoxplotData {
    BoxplotData {
        categories: distinct_in_order(rows, |r| r.age_group.clone()),
        summaries: quantiles_by_age_group(rows),
    }
}

// ---------------------------------------------------------------------------
// Means per (platform, post type)
// ---------------------------------------------------------------------------

/// platform → post type → mean likes, both levels in first-seen order.
pub fn mean_by_platform_and_type(rows: &[PlatformLikes]) -> Grouped<String, Grouped<String, f64>> {
    Grouped::from_rows(rows, |r| r.platform.clone(), |r| *r).map_values(|group| {
        Grouped::from_rows(group, |r| r.post_type.clone(), |r| r.likes).map_values(mean_of_group)
    })
}

/// Flatten a nested mean mapping into one record per (primary, secondary) pair.
pub fn flatten_means(nested: &Grouped<String, Grouped<String, f64>>) -> Vec<CategoryMean> {
    nested
        .iter()
        .flat_map(|(primary, inner)| {
            inner.iter().map(move |(secondary, &mean)| CategoryMean {
                primary_key: primary.clone(),
                secondary_key: Some(secondary.clone()),
                mean,
            })
        })
        .collect()
}

pub fn grouped_bar_data(rows: &[PlatformLikes]) -> GroupedBarData {
    let means = mean_by_platform_and_type(rows);
    GroupedBarData {
        platforms: distinct_in_order(rows, |r| r.platform.clone()),
        post_types: distinct_in_order(rows, |r| r.post_type.clone()),
        bars: flatten_means(&means),
        means,
    }
}

// ---------------------------------------------------------------------------
// Means per calendar day
// ---------------------------------------------------------------------------

/// Mean likes per day, ascending by date with one point per distinct day.
pub fn mean_by_date(rows: &[DatedLikes]) -> Vec<TimeSeriesPoint> {
    let mut points: Vec<TimeSeriesPoint> =
        Grouped::<NaiveDate, Vec<f64>>::from_rows(rows, |r| r.date, |r| r.likes)
            .map_values(mean_of_group)
            .into_entries()
            .into_iter()
            .map(|(date, mean)| TimeSeriesPoint { date, mean })
            .collect();
    points.sort_by_key(|p| p.date);
    points
}

pub fn time_series_data(rows: &[DatedLikes]) -> TimeSeriesData {
    TimeSeriesData {
        points: mean_by_date(rows),
    }
}

fn mean_of_group(values: Vec<f64>) -> f64 {
    mean(&values).expect("Grouped::from_rows never yields an empty bucket")
}
