//! Workspace list, creation form, and the active workspace's quota usage.

use crate::app::Forms;
use crate::constants::{spacing, text};
use crate::message::{Message, WorkspaceMessage};
use crate::model::{EntityId, QuotaUsage, Workspace};

use super::helpers;

pub fn view(
    ui: &mut egui::Ui,
    workspaces: &[Workspace],
    quota: &[QuotaUsage],
    active: Option<EntityId>,
    forms: &mut Forms,
    messages: &mut Vec<Message>,
) {
    helpers::heading(ui, "Workspaces");

    ui.horizontal(|ui| {
        ui.text_edit_singleline(&mut forms.workspace_name);
        if ui.button("Create").clicked() {
            messages.push(Message::Workspace(WorkspaceMessage::Create {
                name: forms.workspace_name.clone(),
            }));
        }
        if ui.button("Refresh").clicked() {
            messages.push(Message::Workspace(WorkspaceMessage::Refresh));
        }
    });
    ui.add_space(spacing::STANDARD);

    if workspaces.is_empty() {
        helpers::empty_placeholder(ui, "No workspaces yet");
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for workspace in workspaces {
            let is_active = active == Some(workspace.id);
            ui.horizontal(|ui| {
                let label = if is_active {
                    format!("{} (active)", workspace.name)
                } else {
                    workspace.name.clone()
                };
                ui.label(egui::RichText::new(label).size(text::BODY).strong());
                if !workspace.created_at.is_empty() {
                    ui.label(
                        egui::RichText::new(&workspace.created_at)
                            .size(text::SMALL)
                            .weak(),
                    );
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Delete").clicked() {
                        messages.push(Message::Workspace(WorkspaceMessage::Delete {
                            workspace_id: workspace.id,
                        }));
                    }
                    if ui.button("Open").clicked() {
                        messages.push(Message::Workspace(WorkspaceMessage::Open {
                            workspace_id: workspace.id,
                        }));
                    }
                });
            });
            ui.separator();
        }

        if active.is_some() {
            ui.add_space(spacing::LARGE);
            ui.label(
                egui::RichText::new("Subscription usage")
                    .size(text::BODY)
                    .strong(),
            );
            if quota.is_empty() {
                helpers::empty_placeholder(ui, "No quota information");
            } else {
                for entry in quota {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&entry.resource).size(text::SMALL));
                        ui.add(
                            egui::ProgressBar::new(entry.ratio())
                                .desired_width(240.0)
                                .text(format!("{}/{}", entry.used, entry.limit)),
                        );
                    });
                }
            }
        }
    });
}
