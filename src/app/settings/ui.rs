// Settings viewport (separate OS window). Edits a staged copy of the settings
// which is committed and written to disk on Save.

use eframe::egui;
use lazy_static::lazy_static;
use std::sync::RwLock;
use strum::IntoEnumIterator;

use super::store::{save_settings_to_disk, AppSettings, THRESHOLD_RANGE};
use crate::localization::{self, translate, SupportedLang};
use crate::types::ExitPolicy;

lazy_static! {
    // Some(draft) while the window is open
    static ref DRAFT: RwLock<Option<AppSettings>> = RwLock::new(None);
    static ref SAVED_NOTICE: RwLock<bool> = RwLock::new(false);
}

pub fn open_settings() {
    let current = super::with_settings(|s| s.clone());
    if let Ok(mut d) = DRAFT.write() {
        *d = Some(current);
    }
    if let Ok(mut n) = SAVED_NOTICE.write() {
        *n = false;
    }
}

pub fn is_open() -> bool {
    DRAFT.read().map(|d| d.is_some()).unwrap_or(false)
}

fn close() {
    if let Ok(mut d) = DRAFT.write() {
        *d = None;
    }
}

/// Commits a draft: global settings, disk and the active UI language.
fn commit(draft: AppSettings) {
    let language = draft.language;
    super::with_settings_mut(|s| *s = draft.sanitized());
    save_settings_to_disk();
    if let Err(e) = localization::initialize_localization(language) {
        log::warn!("Cannot switch UI language: {e}");
    }
}

pub fn draw_settings_viewport(ctx: &egui::Context) {
    if !is_open() {
        return;
    }

    let viewport_id = egui::ViewportId::from_hash_of("settings_window");
    ctx.show_viewport_immediate(
        viewport_id,
        egui::ViewportBuilder::default()
            .with_title(translate("settings-title"))
            .with_inner_size([420.0, 260.0])
            .with_resizable(false),
        move |ctx, _class| {
            if ctx.input(|i| i.viewport().close_requested()) {
                close();
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }

            let Ok(mut guard) = DRAFT.write() else {
                return;
            };
            let Some(draft) = guard.as_mut() else {
                return;
            };
            let mut save_clicked = false;

            egui::CentralPanel::default().show(ctx, |ui| {
                egui::Grid::new("settings_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label(translate("settings-language"));
                        let selected = draft
                            .language
                            .map(|l| l.native_name().to_string())
                            .unwrap_or_else(|| translate("settings-language-auto"));
                        egui::ComboBox::from_id_source("settings_language")
                            .selected_text(selected)
                            .show_ui(ui, |ui| {
                                ui.selectable_value(&mut draft.language, None, translate("settings-language-auto"));
                                for lang in SupportedLang::iter() {
                                    ui.selectable_value(&mut draft.language, Some(lang), lang.native_name());
                                }
                            });
                        ui.end_row();

                        ui.label(translate("settings-exit-policy"));
                        ui.vertical(|ui| {
                            for policy in ExitPolicy::iter() {
                                ui.radio_value(&mut draft.exit_policy, policy, translate(policy.loc_key()));
                            }
                        });
                        ui.end_row();

                        ui.label(translate("settings-threshold"));
                        ui.add(egui::Slider::new(&mut draft.swipe_threshold, THRESHOLD_RANGE).suffix(" px"));
                        ui.end_row();

                        ui.label(translate("settings-feed"));
                        let feed = draft
                            .feed_path
                            .as_ref()
                            .map(|p| p.to_string_lossy().to_string())
                            .unwrap_or_else(|| translate("settings-feed-builtin"));
                        ui.label(egui::RichText::new(feed).monospace());
                        ui.end_row();
                    });

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    if ui.button(translate("settings-save")).clicked() {
                        save_clicked = true;
                    }
                    if SAVED_NOTICE.read().map(|n| *n).unwrap_or(false) {
                        ui.label(translate("settings-saved"));
                    }
                });
            });

            if save_clicked {
                let staged = draft.clone();
                drop(guard);
                commit(staged);
                if let Ok(mut n) = SAVED_NOTICE.write() {
                    *n = true;
                }
                ctx.request_repaint();
            }
        },
    );
}
