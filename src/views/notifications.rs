//! Platform notification list.

use crate::constants::{spacing, text};
use crate::message::{Message, NoticeMessage};
use crate::model::Notification;

use super::helpers;

pub fn view(ui: &mut egui::Ui, notifications: &[Notification], messages: &mut Vec<Message>) {
    helpers::heading(ui, "Notifications");

    if ui.button("Refresh").clicked() {
        messages.push(Message::Notice(NoticeMessage::Refresh));
    }
    ui.add_space(spacing::STANDARD);

    if notifications.is_empty() {
        helpers::empty_placeholder(ui, "No notifications");
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for notification in notifications {
            ui.horizontal(|ui| {
                let title = egui::RichText::new(&notification.title).size(text::BODY);
                ui.label(if notification.read {
                    title.weak()
                } else {
                    title.strong()
                });
                if !notification.created_at.is_empty() {
                    ui.label(
                        egui::RichText::new(&notification.created_at)
                            .size(text::SMALL)
                            .weak(),
                    );
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if !notification.read && ui.small_button("Mark read").clicked() {
                        messages.push(Message::Notice(NoticeMessage::MarkRead {
                            notification_id: notification.id,
                        }));
                    }
                });
            });
            if !notification.body.is_empty() {
                ui.label(egui::RichText::new(&notification.body).size(text::SMALL));
            }
            ui.separator();
        }
    });
}
