//! Shared view building blocks.

use egui::{Align2, Color32, RichText};

use crate::constants::{text, toast};
use crate::message::Message;
use crate::state::{ToastCenter, ToastLevel};

/// Page heading in the standard title size.
pub fn heading(ui: &mut egui::Ui, title: &str) {
    ui.label(RichText::new(title).size(text::TITLE).strong());
    ui.add_space(crate::constants::spacing::STANDARD);
}

/// Placeholder shown where a list would be if the load had produced data.
pub fn empty_placeholder(ui: &mut egui::Ui, message: &str) {
    ui.add_space(crate::constants::spacing::LARGE);
    ui.label(RichText::new(message).size(text::BODY).weak());
}

fn toast_color(level: ToastLevel) -> Color32 {
    match level {
        ToastLevel::Success => Color32::from_rgb(32, 96, 48),
        ToastLevel::Error => Color32::from_rgb(128, 40, 40),
        ToastLevel::Info => Color32::from_rgb(40, 72, 120),
    }
}

/// Overlay the transient toasts in the top-right corner of the window.
pub fn show_toasts(ctx: &egui::Context, toasts: &ToastCenter, messages: &mut Vec<Message>) {
    if toasts.is_empty() {
        return;
    }
    egui::Area::new(egui::Id::new("toast-overlay"))
        .anchor(Align2::RIGHT_TOP, [-toast::MARGIN, toast::MARGIN + 32.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.set_max_width(toast::WIDTH);
            for (index, item) in toasts.iter().enumerate() {
                egui::Frame::new()
                    .fill(toast_color(item.level))
                    .corner_radius(4.0)
                    .inner_margin(8)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(&item.message)
                                    .size(text::BODY)
                                    .color(Color32::WHITE),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.small_button("x").clicked() {
                                        messages.push(Message::DismissToast(index));
                                    }
                                },
                            );
                        });
                    });
                ui.add_space(4.0);
            }
        });
}
