//! Dataset list and creation form for the active workspace.

use crate::app::Forms;
use crate::constants::{spacing, text};
use crate::message::{DatasetMessage, Message};
use crate::model::{Dataset, EntityId};

use super::helpers;

pub fn view(
    ui: &mut egui::Ui,
    datasets: &[Dataset],
    selected: Option<EntityId>,
    forms: &mut Forms,
    messages: &mut Vec<Message>,
) {
    helpers::heading(ui, "Datasets");

    ui.horizontal(|ui| {
        ui.text_edit_singleline(&mut forms.dataset_name);
        if ui.button("Create").clicked() {
            messages.push(Message::Dataset(DatasetMessage::Create {
                name: forms.dataset_name.clone(),
            }));
        }
        if ui.button("Refresh").clicked() {
            messages.push(Message::Dataset(DatasetMessage::Refresh));
        }
    });
    ui.add_space(spacing::STANDARD);

    if datasets.is_empty() {
        helpers::empty_placeholder(ui, "No datasets in this workspace");
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for dataset in datasets {
            let is_selected = selected == Some(dataset.id);
            ui.horizontal(|ui| {
                let label = if is_selected {
                    format!("{} (browsing)", dataset.name)
                } else {
                    dataset.name.clone()
                };
                ui.label(egui::RichText::new(label).size(text::BODY).strong());
                ui.label(
                    egui::RichText::new(format!("{} images", dataset.image_count))
                        .size(text::SMALL)
                        .weak(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Delete").clicked() {
                        messages.push(Message::Dataset(DatasetMessage::Delete {
                            dataset_id: dataset.id,
                        }));
                    }
                    if ui.button("Browse").clicked() {
                        messages.push(Message::Dataset(DatasetMessage::Open {
                            dataset_id: dataset.id,
                        }));
                    }
                });
            });
            ui.separator();
        }
    });
}
