//! Settings page: endpoints, preferences, and config export/import.

use crate::app::Forms;
use crate::config::{AppConfig, LogLevel};
use crate::constants::{spacing, text};
use crate::message::{Message, SettingsMessage};

use super::helpers;

pub fn view(
    ui: &mut egui::Ui,
    config: &AppConfig,
    forms: &mut Forms,
    messages: &mut Vec<Message>,
) {
    helpers::heading(ui, "Settings");

    ui.label(egui::RichText::new("Platform endpoints").size(text::BODY).strong());
    ui.horizontal(|ui| {
        ui.label("API base URL");
        ui.text_edit_singleline(&mut forms.settings_base_url);
    });
    ui.horizontal(|ui| {
        ui.label("Asset base URL");
        ui.text_edit_singleline(&mut forms.settings_asset_url);
    });
    if ui.button("Apply").clicked() {
        messages.push(Message::Settings(SettingsMessage::Apply));
    }
    ui.add_space(spacing::LARGE);

    ui.label(egui::RichText::new("Preferences").size(text::BODY).strong());
    let mut dark = config.preferences.dark_theme;
    if ui.checkbox(&mut dark, "Dark theme").changed() {
        messages.push(Message::Settings(SettingsMessage::SetDarkTheme(dark)));
    }
    ui.horizontal(|ui| {
        ui.label("Log level");
        egui::ComboBox::from_id_salt("log-level")
            .selected_text(config.preferences.log_level.name())
            .show_ui(ui, |ui| {
                for level in LogLevel::all() {
                    if ui
                        .selectable_label(config.preferences.log_level == *level, level.name())
                        .clicked()
                    {
                        messages.push(Message::Settings(SettingsMessage::SetLogLevel(*level)));
                    }
                }
            });
    });
    ui.add_space(spacing::LARGE);

    ui.label(egui::RichText::new("Configuration file").size(text::BODY).strong());
    ui.horizontal(|ui| {
        if ui.button("Export...").clicked() {
            messages.push(Message::Settings(SettingsMessage::ExportConfig));
        }
        if ui.button("Import...").clicked() {
            messages.push(Message::Settings(SettingsMessage::ImportConfig));
        }
    });
}
