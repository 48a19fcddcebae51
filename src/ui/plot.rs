use std::ops::RangeInclusive;

use eframe::egui::{self, Align2, Color32, Stroke, Ui};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, GridMark, Line, Plot, PlotPoint, PlotPoints, Text,
    uniform_grid_spacer,
};

use crate::color::CategoryColors;
use crate::config::ChartConfig;
use crate::curve::natural_curve;
use crate::data::model::{BoxplotData, GroupedBarData, TimeSeriesData};
use crate::scale::{BandScale, coordinate_to_date, date_label, date_to_coordinate};
use crate::state::{AppState, ChartKind};

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Render the active chart, or a hint when it has nothing to show.
pub fn chart_panel(ui: &mut Ui, state: &AppState) {
    let config = &state.config;
    let drawn = match state.active {
        ChartKind::Boxplot => state
            .boxplot
            .data
            .as_ref()
            .map(|data| likes_boxplot(ui, data, config)),
        ChartKind::GroupedBars => state
            .grouped_bars
            .data
            .as_ref()
            .map(|data| likes_bar_chart(ui, data, config)),
        ChartKind::TimeSeries => state
            .time_series
            .data
            .as_ref()
            .map(|data| likes_line_chart(ui, data, config)),
    };

    if drawn.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| match state.active_error() {
            Some(msg) => {
                ui.label(egui::RichText::new(msg).color(Color32::RED));
            }
            None => {
                ui.heading("Open a file to view this chart  (File → Open…)");
            }
        });
    }
}

/// A plot with every interaction switched off.
fn static_plot(id: &'static str) -> Plot {
    Plot::new(id)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show_x(false)
        .show_y(false)
        .show_background(false)
}

/// Axis labels for categories placed on integer coordinates by `scale`.
fn band_axis(plot: Plot, scale: BandScale) -> Plot {
    plot.x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            scale
                .label_at(mark.value, 1e-6)
                .map(str::to_string)
                .unwrap_or_default()
        })
}

fn with_background(ui: &mut Ui, config: &ChartConfig, add_contents: impl FnOnce(&mut Ui)) {
    egui::Frame::default()
        .fill(config.background)
        .show(ui, add_contents);
}

// ---------------------------------------------------------------------------
// Boxplot: likes by age group
// ---------------------------------------------------------------------------

pub fn likes_boxplot(ui: &mut Ui, data: &BoxplotData, config: &ChartConfig) {
    let scale = BandScale::unit(data.categories.clone(), config.boxplot_padding);
    let stroke = Stroke::new(1.0, Color32::BLACK);

    let boxes: Vec<BoxElem> = data
        .summaries
        .iter()
        .filter_map(|(group, s)| {
            let x = scale.center(group)?;
            Some(
                BoxElem::new(x, BoxSpread::new(s.min, s.q1, s.median, s.q3, s.max))
                    .name(group)
                    .box_width(scale.bandwidth())
                    .whisker_width(0.0)
                    .fill(config.box_fill)
                    .stroke(stroke),
            )
        })
        .collect();

    let medians = median_segments(data, &scale);

    let plot = band_axis(static_plot("likes_boxplot"), scale)
        .x_axis_label("Age Group")
        .y_axis_label("Likes")
        .include_y(0.0)
        .include_y(config.boxplot_y_max);

    with_background(ui, config, |ui| {
        plot.show(ui, |plot_ui| {
            plot_ui.box_plot(BoxPlot::new(boxes).name("Likes"));
            for segment in medians {
                plot_ui.line(
                    Line::new(PlotPoints::from(segment.to_vec()))
                        .color(config.median_color)
                        .width(config.median_width),
                );
            }
        });
    });
}

/// Horizontal segment across each box at its median.
fn median_segments(data: &BoxplotData, scale: &BandScale) -> Vec<[[f64; 2]; 2]> {
    let half = scale.bandwidth() / 2.0;
    data.summaries
        .iter()
        .filter_map(|(group, s)| {
            let x = scale.center(group)?;
            Some([[x - half, s.median], [x + half, s.median]])
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Grouped bars: average likes by platform and post type
// ---------------------------------------------------------------------------

pub fn likes_bar_chart(ui: &mut Ui, data: &GroupedBarData, config: &ChartConfig) {
    let outer = BandScale::unit(data.platforms.clone(), config.platform_padding);
    let inner = BandScale::new(
        data.post_types.clone(),
        (0.0, outer.bandwidth()),
        config.post_type_padding,
    );
    let colors = CategoryColors::new(&data.post_types);

    let charts: Vec<BarChart> = data
        .post_types
        .iter()
        .map(|post_type| {
            let bars: Vec<Bar> = data
                .platforms
                .iter()
                .filter_map(|platform| {
                    let mean = *data.means.get(platform.as_str())?.get(post_type.as_str())?;
                    let left = outer.start(platform)? + inner.start(post_type)?;
                    Some(
                        Bar::new(left + inner.bandwidth() / 2.0, mean)
                            .width(inner.bandwidth())
                            .name(format!("{platform} / {post_type}")),
                    )
                })
                .collect();
            BarChart::new(bars)
                .color(colors.color_for(post_type))
                .name(post_type)
        })
        .collect();

    let top = data.max_mean() * (1.0 + config.legend_headroom);
    let legend = legend_rows(&colors, outer.range().1, top, top * 0.06);
    let plot = band_axis(static_plot("likes_bar_chart"), outer)
        .x_axis_label("Platform")
        .y_axis_label("Average Likes")
        .include_y(0.0)
        .include_y(top);

    with_background(ui, config, |ui| {
        plot.show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
            for row in legend {
                plot_ui.text(
                    Text::new(PlotPoint::new(row.position[0], row.position[1]), row.text)
                        .color(row.color)
                        .anchor(Align2::RIGHT_TOP),
                );
            }
        });
    });
}

/// One line of the post-type legend, in plot coordinates.
#[derive(Debug, Clone, PartialEq)]
struct LegendRow {
    position: [f64; 2],
    text: String,
    color: Color32,
}

/// Legend entries stacked downward from the top-right corner `(right, top)`.
///
/// Drawn as plain text marks so the legend cannot toggle series.
fn legend_rows(colors: &CategoryColors, right: f64, top: f64, row_height: f64) -> Vec<LegendRow> {
    colors
        .legend_entries()
        .iter()
        .enumerate()
        .map(|(i, (label, color))| LegendRow {
            position: [right, top - i as f64 * row_height],
            text: format!("■ {label}"),
            color: *color,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Line: average likes per day
// ---------------------------------------------------------------------------

pub fn likes_line_chart(ui: &mut Ui, data: &TimeSeriesData, config: &ChartConfig) {
    let points: Vec<[f64; 2]> = data
        .points
        .iter()
        .map(|p| [date_to_coordinate(p.date), p.mean])
        .collect();
    let curve = natural_curve(&points, config.curve_samples);

    let mut plot = static_plot("likes_line_chart")
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 7.0, 28.0]))
        .x_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
            if (mark.value - mark.value.round()).abs() > 1e-6 {
                return String::new();
            }
            coordinate_to_date(mark.value)
                .map(date_label)
                .unwrap_or_default()
        })
        .x_axis_label("Date")
        .y_axis_label("Average Likes")
        .include_y(0.0)
        .include_y(data.max_mean());
    if let Some((first, last)) = data.extent() {
        plot = plot
            .include_x(date_to_coordinate(first))
            .include_x(date_to_coordinate(last));
    }

    with_background(ui, config, |ui| {
        plot.show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(curve))
                    .name("Average Likes")
                    .color(config.line_color)
                    .width(config.line_width),
            );
        });
    });
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::data::aggregate::{boxplot_data, grouped_bar_data, time_series_data};
    use crate::data::model::{AgeLikes, DatedLikes, PlatformLikes};

    fn render(mut draw: impl FnMut(&mut Ui)) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| draw(ui));
        });
    }

    fn age_rows() -> Vec<AgeLikes> {
        [("18-24", 10.0), ("18-24", 40.0), ("65+", 7.0), ("18-24", 20.0)]
            .iter()
            .map(|&(group, likes)| AgeLikes {
                age_group: group.to_string(),
                likes,
            })
            .collect()
    }

    #[test]
    fn test_median_segment_spans_box() {
        let data = boxplot_data(&age_rows());
        let scale = BandScale::unit(data.categories.clone(), 0.3);
        let segments = median_segments(&data, &scale);

        assert_eq!(segments.len(), 2);
        let [left, right] = segments[0];
        assert!((left[0] + 0.35).abs() < 1e-9);
        assert!((right[0] - 0.35).abs() < 1e-9);
        assert_eq!(left[1], 20.0);
        assert_eq!(right[1], 20.0);
        assert_eq!(segments[1][0][1], 7.0);
    }

    #[test]
    fn test_legend_rows_follow_domain_order() {
        let domain = vec!["Image".to_string(), "Video".to_string()];
        let colors = CategoryColors::new(&domain);
        let rows = legend_rows(&colors, 3.5, 100.0, 6.0);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].position, [3.5, 100.0]);
        assert_eq!(rows[1].position, [3.5, 94.0]);
        assert_eq!(rows[0].text, "■ Image");
        assert_eq!(rows[1].color, colors.color_for("Video"));
    }

    #[test]
    fn test_charts_render_headless() {
        let config = ChartConfig::default();
        let boxes = boxplot_data(&age_rows());
        let bars = grouped_bar_data(&[PlatformLikes {
            platform: "Twitter".to_string(),
            post_type: "Video".to_string(),
            likes: 12.0,
        }]);
        let series = time_series_data(&[
            DatedLikes {
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                likes: 5.0,
            },
            DatedLikes {
                date: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
                likes: 9.0,
            },
            DatedLikes {
                date: NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
                likes: 4.0,
            },
        ]);

        render(|ui| likes_boxplot(ui, &boxes, &config));
        render(|ui| likes_bar_chart(ui, &bars, &config));
        render(|ui| likes_line_chart(ui, &series, &config));
    }

    #[test]
    fn test_empty_charts_render_headless() {
        let config = ChartConfig::default();
        render(|ui| likes_boxplot(ui, &BoxplotData::default(), &config));
        render(|ui| likes_bar_chart(ui, &GroupedBarData::default(), &config));
        render(|ui| likes_line_chart(ui, &TimeSeriesData::default(), &config));
    }
}
