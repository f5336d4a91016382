//! Project list and creation form for the active workspace.

use crate::app::Forms;
use crate::constants::{spacing, text};
use crate::message::{Message, ProjectMessage};
use crate::model::{EntityId, Project, ProjectType};

use super::helpers;

pub fn view(
    ui: &mut egui::Ui,
    projects: &[Project],
    selected: Option<EntityId>,
    forms: &mut Forms,
    messages: &mut Vec<Message>,
) {
    helpers::heading(ui, "Projects");

    ui.horizontal(|ui| {
        ui.text_edit_singleline(&mut forms.project_name);
        egui::ComboBox::from_id_salt("project-type")
            .selected_text(forms.project_type.name())
            .show_ui(ui, |ui| {
                for project_type in ProjectType::all() {
                    ui.selectable_value(
                        &mut forms.project_type,
                        *project_type,
                        project_type.name(),
                    );
                }
            });
        if ui.button("Create").clicked() {
            messages.push(Message::Project(ProjectMessage::Create {
                name: forms.project_name.clone(),
                project_type: forms.project_type,
            }));
        }
        if ui.button("Refresh").clicked() {
            messages.push(Message::Project(ProjectMessage::Refresh));
        }
    });
    ui.add_space(spacing::STANDARD);

    if projects.is_empty() {
        helpers::empty_placeholder(ui, "No projects in this workspace");
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for project in projects {
            let is_selected = selected == Some(project.id);
            ui.horizontal(|ui| {
                let label = if is_selected {
                    format!("{} (selected)", project.name)
                } else {
                    project.name.clone()
                };
                ui.label(egui::RichText::new(label).size(text::BODY).strong());
                ui.label(
                    egui::RichText::new(project.project_type.name())
                        .size(text::SMALL)
                        .weak(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Delete").clicked() {
                        messages.push(Message::Project(ProjectMessage::Delete {
                            project_id: project.id,
                        }));
                    }
                    if ui.button("Open").clicked() {
                        messages.push(Message::Project(ProjectMessage::Open {
                            project_id: project.id,
                        }));
                    }
                });
            });
            ui.separator();
        }
    });
}
