use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{BoxplotData, GroupedBarData, TimeSeriesData};
use crate::state::{AppState, ChartKind};

// ---------------------------------------------------------------------------
// Left side panel – summary table of the active chart
// ---------------------------------------------------------------------------

/// Render the left panel listing the numbers behind the active chart.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Summary");
    if let Some(path) = state.active_path() {
        ui.label(RichText::new(path.display().to_string()).small());
    }
    ui.separator();

    let shown = match state.active {
        ChartKind::Boxplot => state
            .boxplot
            .data
            .as_ref()
            .map(|data| quantile_table(ui, data)),
        ChartKind::GroupedBars => state
            .grouped_bars
            .data
            .as_ref()
            .map(|data| mean_table(ui, data)),
        ChartKind::TimeSeries => state
            .time_series
            .data
            .as_ref()
            .map(|data| series_table(ui, data)),
    };

    if shown.is_none() {
        ui.label("No data loaded.");
    }
}

fn quantile_table(ui: &mut Ui, data: &BoxplotData) {
    if data.is_empty() {
        ui.label("File has no rows.");
        return;
    }
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto())
        .columns(Column::auto(), 5)
        .header(20.0, |mut header| {
            for title in ["Age Group", "Min", "Q1", "Median", "Q3", "Max"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for (group, s) in data.summaries.iter() {
                body.row(18.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(group.as_str());
                    });
                    for v in [s.min, s.q1, s.median, s.q3, s.max] {
                        row.col(|ui: &mut Ui| {
                            ui.label(format!("{v:.1}"));
                        });
                    }
                });
            }
        });
}

fn mean_table(ui: &mut Ui, data: &GroupedBarData) {
    if data.is_empty() {
        ui.label("File has no rows.");
        return;
    }
    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto(), 3)
        .header(20.0, |mut header| {
            for title in ["Platform", "Post Type", "Avg Likes"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for bar in &data.bars {
                body.row(18.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(bar.primary_key.as_str());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(bar.secondary_key.as_deref().unwrap_or("-"));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{:.2}", bar.mean));
                    });
                });
            }
        });
}

fn series_table(ui: &mut Ui, data: &TimeSeriesData) {
    if data.is_empty() {
        ui.label("File has no rows.");
        return;
    }
    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto(), 2)
        .header(20.0, |mut header| {
            for title in ["Date", "Avg Likes"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for point in &data.points {
                body.row(18.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(point.date.format("%-m/%-d/%Y").to_string());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{:.2}", point.mean));
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu, chart tabs and status line.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            for kind in ChartKind::ALL {
                if ui.button(format!("Open {kind}…")).clicked() {
                    open_file_dialog(state, kind);
                    ui.close_menu();
                }
            }
            ui.separator();
            if ui.button("Reload defaults").clicked() {
                state.load_defaults();
                ui.close_menu();
            }
        });

        ui.separator();

        for kind in ChartKind::ALL {
            ui.selectable_value(&mut state.active, kind, kind.to_string());
        }

        ui.separator();

        if let Some(msg) = state.active_error() {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState, kind: ChartKind) {
    let file = rfd::FileDialog::new()
        .set_title(format!("Open data for “{kind}”"))
        .set_directory(&state.config.data_dir)
        .add_filter("CSV", &["csv"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        state.load_chart(kind, &path);
    }
}
