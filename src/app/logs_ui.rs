// Logs window: the in-memory log ring, filterable by level and by origin
// (deck events only, or everything including egui/wgpu noise).

use eframe::egui;
use lazy_static::lazy_static;
use log::{Level, LevelFilter};
use std::sync::RwLock;

use crate::localization::{translate, translate_with};
use crate::logger::LogEntry;

#[derive(Debug, Clone, Copy, PartialEq)]
struct LogsView {
    open: bool,
    autoscroll: bool,
    min_level: LevelFilter,
    app_only: bool,
}

impl Default for LogsView {
    fn default() -> Self {
        Self {
            open: false,
            autoscroll: true,
            min_level: LevelFilter::Trace,
            app_only: false,
        }
    }
}

impl LogsView {
    fn accepts(&self, entry: &LogEntry) -> bool {
        entry.level <= self.min_level && (!self.app_only || is_app_target(&entry.target))
    }
}

lazy_static! {
    static ref VIEW: RwLock<LogsView> = RwLock::new(LogsView::default());
}

const LEVEL_CHOICES: [LevelFilter; 5] = [
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

fn is_app_target(target: &str) -> bool {
    target == env!("CARGO_CRATE_NAME") || target.starts_with(concat!(env!("CARGO_CRATE_NAME"), "::"))
}

fn view() -> LogsView {
    VIEW.read().map(|v| *v).unwrap_or_default()
}

fn update_view(f: impl FnOnce(&mut LogsView)) {
    if let Ok(mut v) = VIEW.write() {
        f(&mut v);
    }
}

pub fn open_logs() {
    update_view(|v| v.open = true);
}

pub fn is_open() -> bool {
    view().open
}

pub fn draw_logs_viewport(ctx: &egui::Context) {
    if !is_open() {
        return;
    }

    ctx.show_viewport_immediate(
        egui::ViewportId::from_hash_of("logs_window"),
        egui::ViewportBuilder::default()
            .with_title(translate("logs-title"))
            .with_inner_size([760.0, 460.0])
            .with_resizable(true),
        |ctx, _class| {
            if ctx.input(|i| i.viewport().close_requested()) {
                update_view(|v| v.open = false);
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
            egui::CentralPanel::default().show(ctx, |ui| {
                let mut state = view();
                let entries: Vec<LogEntry> = crate::logger::snapshot()
                    .into_iter()
                    .filter(|e| state.accepts(e))
                    .collect();

                ui.horizontal(|ui| toolbar(ui, &mut state, &entries));
                ui.separator();
                update_view(|v| *v = state);

                let row_height = ui.text_style_height(&egui::TextStyle::Monospace) + 2.0;
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .stick_to_bottom(state.autoscroll)
                    .show_rows(ui, row_height, entries.len(), |ui, rows| {
                        let mut job = egui::text::LayoutJob::default();
                        for e in &entries[rows] {
                            let fmt = egui::TextFormat {
                                color: color_for_level(e.level),
                                font_id: egui::FontId::monospace(12.0),
                                ..Default::default()
                            };
                            job.append(&format!("{}\n", e.format_line()), 0.0, fmt);
                        }
                        ui.label(job);
                    });
            });
        },
    );
}

fn toolbar(ui: &mut egui::Ui, state: &mut LogsView, shown: &[LogEntry]) {
    if ui.button(translate("logs-clear")).clicked() {
        crate::logger::clear();
    }
    if ui.button(translate("logs-copy")).clicked() {
        let text: Vec<String> = shown.iter().map(LogEntry::format_line).collect();
        ui.output_mut(|o| o.copied_text = text.join("\n"));
    }
    ui.checkbox(&mut state.autoscroll, translate("logs-autoscroll"));
    ui.checkbox(&mut state.app_only, translate("logs-app-only"));

    egui::ComboBox::from_id_source("logs_min_level")
        .selected_text(state.min_level.to_string())
        .show_ui(ui, |ui| {
            for level in LEVEL_CHOICES {
                ui.selectable_value(&mut state.min_level, level, level.to_string());
            }
        });

    ui.separator();
    ui.label(translate_with(
        "logs-lines",
        &[
            ("count", shown.len().to_string()),
            ("total", crate::logger::len().to_string()),
        ],
    ));
}

fn color_for_level(level: Level) -> egui::Color32 {
    match level {
        Level::Error => egui::Color32::from_rgb(220, 80, 80),
        Level::Warn => egui::Color32::from_rgb(235, 200, 80),
        Level::Info => egui::Color32::from_rgb(200, 200, 200),
        Level::Debug => egui::Color32::from_rgb(120, 180, 255),
        Level::Trace => egui::Color32::from_rgb(160, 160, 160),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(level: Level, target: &str) -> LogEntry {
        LogEntry {
            level,
            target: target.to_string(),
            msg: "m".to_string(),
        }
    }

    #[test]
    fn level_filter_hides_chattier_records() {
        let view = LogsView {
            min_level: LevelFilter::Info,
            ..LogsView::default()
        };
        assert!(view.accepts(&entry(Level::Warn, "x")));
        assert!(view.accepts(&entry(Level::Info, "x")));
        assert!(!view.accepts(&entry(Level::Debug, "x")));
    }

    #[test]
    fn app_only_keeps_crate_targets() {
        let view = LogsView {
            app_only: true,
            ..LogsView::default()
        };
        let own = format!("{}::deck", env!("CARGO_CRATE_NAME"));
        assert!(view.accepts(&entry(Level::Debug, &own)));
        assert!(view.accepts(&entry(Level::Debug, env!("CARGO_CRATE_NAME"))));
        assert!(!view.accepts(&entry(Level::Debug, "wgpu_core::device")));
    }
}
