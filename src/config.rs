use std::path::PathBuf;

use eframe::egui::Color32;

/// Environment variable naming the directory the CSV files are read from.
pub const DATA_DIR_ENV: &str = "SOCIAL_PLOTS_DATA_DIR";

/// File names, scale constants and colours for the three charts.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub data_dir: PathBuf,
    pub boxplot_file: String,
    pub bar_file: String,
    pub line_file: String,

    /// Boxplot y axis is fixed to `[0, boxplot_y_max]`.
    pub boxplot_y_max: f64,
    pub boxplot_padding: f64,
    pub platform_padding: f64,
    pub post_type_padding: f64,
    /// Extra room above the tallest bar for the legend, as a fraction of it.
    pub legend_headroom: f64,
    /// Polyline resolution of the time series curve.
    pub curve_samples: usize,

    pub background: Color32,
    pub box_fill: Color32,
    pub median_color: Color32,
    pub median_width: f32,
    pub line_color: Color32,
    pub line_width: f32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            boxplot_file: "data.csv".to_string(),
            bar_file: "datacopy1.csv".to_string(),
            line_file: "datacopy2.csv".to_string(),
            boxplot_y_max: 1000.0,
            boxplot_padding: 0.3,
            platform_padding: 0.2,
            post_type_padding: 0.1,
            legend_headroom: 0.2,
            curve_samples: 16,
            background: Color32::from_rgb(0xff, 0xff, 0xe0),
            box_fill: Color32::from_rgb(0x01, 0x77, 0xb7),
            median_color: Color32::WHITE,
            median_width: 2.0,
            line_color: Color32::from_rgb(0x01, 0x77, 0xb7),
            line_width: 2.0,
        }
    }
}

impl ChartConfig {
    /// Defaults, with the data directory taken from [`DATA_DIR_ENV`] when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
            config.data_dir = PathBuf::from(dir);
        }
        log::debug!("data directory: {}", config.data_dir.display());
        config
    }

    pub fn boxplot_path(&self) -> PathBuf {
        self.data_dir.join(&self.boxplot_file)
    }

    pub fn bar_path(&self) -> PathBuf {
        self.data_dir.join(&self.bar_file)
    }

    pub fn line_path(&self) -> PathBuf {
        self.data_dir.join(&self.line_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = ChartConfig {
            data_dir: PathBuf::from("/srv/likes"),
            ..Default::default()
        };
        assert_eq!(config.boxplot_path(), PathBuf::from("/srv/likes/data.csv"));
        assert_eq!(config.bar_path(), PathBuf::from("/srv/likes/datacopy1.csv"));
        assert_eq!(config.line_path(), PathBuf::from("/srv/likes/datacopy2.csv"));
    }
}
