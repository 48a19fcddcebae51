use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::ChartConfig;
use crate::data::aggregate::{boxplot_data, grouped_bar_data, time_series_data};
use crate::data::loader::{load_age_likes, load_dated_likes, load_platform_likes};
use crate::data::model::{BoxplotData, GroupedBarData, TimeSeriesData};

// ---------------------------------------------------------------------------
// Which chart is on screen
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Boxplot,
    GroupedBars,
    TimeSeries,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [
        ChartKind::Boxplot,
        ChartKind::GroupedBars,
        ChartKind::TimeSeries,
    ];
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Boxplot => write!(f, "Likes by Age Group"),
            ChartKind::GroupedBars => write!(f, "Likes by Platform"),
            ChartKind::TimeSeries => write!(f, "Likes over Time"),
        }
    }
}

// ---------------------------------------------------------------------------
// One pipeline's outcome
// ---------------------------------------------------------------------------

/// Source file and result of the last load for one chart.
#[derive(Debug, Clone)]
pub struct ChartSlot<T> {
    pub path: Option<PathBuf>,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> Default for ChartSlot<T> {
    fn default() -> Self {
        Self {
            path: None,
            data: None,
            error: None,
        }
    }
}

impl<T> ChartSlot<T> {
    /// Run `pipeline` on `path` and keep either its data or its error.
    /// A failure clears previously loaded data.
    pub fn load<F>(&mut self, path: &Path, pipeline: F)
    where
        F: FnOnce(&Path) -> Result<T>,
    {
        self.path = Some(path.to_path_buf());
        match pipeline(path) {
            Ok(data) => {
                log::info!("Loaded {}", path.display());
                self.data = Some(data);
                self.error = None;
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.data = None;
                self.error = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Like [`ChartSlot::load`], but a missing file empties the slot instead
    /// of reporting an error.
    pub fn load_if_present<F>(&mut self, path: &Path, pipeline: F)
    where
        F: FnOnce(&Path) -> Result<T>,
    {
        if path.is_file() {
            self.load(path, pipeline);
        } else {
            log::warn!("{} not found, chart left empty", path.display());
            *self = Self::default();
        }
    }
}

// ---------------------------------------------------------------------------
// Pipelines: file → chart-ready data
// ---------------------------------------------------------------------------

pub fn boxplot_pipeline(path: &Path) -> Result<BoxplotData> {
    Ok(boxplot_data(&load_age_likes(path)?))
}

pub fn grouped_bar_pipeline(path: &Path) -> Result<GroupedBarData> {
    Ok(grouped_bar_data(&load_platform_likes(path)?))
}

pub fn time_series_pipeline(path: &Path) -> Result<TimeSeriesData> {
    Ok(time_series_data(&load_dated_likes(path)?))
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: ChartConfig,
    pub active: ChartKind,
    pub boxplot: ChartSlot<BoxplotData>,
    pub grouped_bars: ChartSlot<GroupedBarData>,
    pub time_series: ChartSlot<TimeSeriesData>,
}

impl AppState {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            active: ChartKind::default(),
            boxplot: ChartSlot::default(),
            grouped_bars: ChartSlot::default(),
            time_series: ChartSlot::default(),
        }
    }

    /// Load whichever of the configured default files exist.
    pub fn load_defaults(&mut self) {
        let config = self.config.clone();
        self.boxplot
            .load_if_present(&config.boxplot_path(), boxplot_pipeline);
        self.grouped_bars
            .load_if_present(&config.bar_path(), grouped_bar_pipeline);
        self.time_series
            .load_if_present(&config.line_path(), time_series_pipeline);
    }

    /// (Re)load one chart from `path`; the other charts are not touched.
    pub fn load_chart(&mut self, kind: ChartKind, path: &Path) {
        match kind {
            ChartKind::Boxplot => self.boxplot.load(path, boxplot_pipeline),
            ChartKind::GroupedBars => self.grouped_bars.load(path, grouped_bar_pipeline),
            ChartKind::TimeSeries => self.time_series.load(path, time_series_pipeline),
        }
        self.active = kind;
    }

    /// Error message of the active chart, if its last load failed.
    pub fn active_error(&self) -> Option<&str> {
        match self.active {
            ChartKind::Boxplot => self.boxplot.error.as_deref(),
            ChartKind::GroupedBars => self.grouped_bars.error.as_deref(),
            ChartKind::TimeSeries => self.time_series.error.as_deref(),
        }
    }

    pub fn active_path(&self) -> Option<&Path> {
        match self.active {
            ChartKind::Boxplot => self.boxplot.path.as_deref(),
            ChartKind::GroupedBars => self.grouped_bars.path.as_deref(),
            ChartKind::TimeSeries => self.time_series.path.as_deref(),
        }
    }
}
