//! Training job list and submission form for the selected project.
//!
//! Jobs run server-side; this page only submits and displays them.

use crate::app::Forms;
use crate::constants::{spacing, text};
use crate::message::{JobMessage, Message};
use crate::model::{Dataset, JobStatus, TrainingJob};

use super::helpers;

pub fn view(
    ui: &mut egui::Ui,
    jobs: &[TrainingJob],
    datasets: &[Dataset],
    forms: &mut Forms,
    messages: &mut Vec<Message>,
) {
    helpers::heading(ui, "Training Jobs");

    ui.horizontal(|ui| {
        ui.text_edit_singleline(&mut forms.job_name);
        let selected_name = forms
            .job_dataset
            .and_then(|id| datasets.iter().find(|dataset| dataset.id == id))
            .map(|dataset| dataset.name.clone())
            .unwrap_or_else(|| "Select dataset".to_string());
        egui::ComboBox::from_id_salt("job-dataset")
            .selected_text(selected_name)
            .show_ui(ui, |ui| {
                for dataset in datasets {
                    ui.selectable_value(
                        &mut forms.job_dataset,
                        Some(dataset.id),
                        &dataset.name,
                    );
                }
            });
        let can_submit = forms.job_dataset.is_some();
        if ui.add_enabled(can_submit, egui::Button::new("Start")).clicked() {
            if let Some(dataset_id) = forms.job_dataset {
                messages.push(Message::Job(JobMessage::Create {
                    name: forms.job_name.clone(),
                    dataset_id,
                }));
            }
        }
        if ui.button("Refresh").clicked() {
            messages.push(Message::Job(JobMessage::Refresh));
        }
    });
    ui.add_space(spacing::STANDARD);

    if jobs.is_empty() {
        helpers::empty_placeholder(ui, "No training jobs for this project");
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for job in jobs {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&job.name).size(text::BODY).strong());
                ui.label(
                    egui::RichText::new(job.status.name())
                        .size(text::SMALL)
                        .color(status_color(job.status)),
                );
                if job.status == JobStatus::Running {
                    ui.add(
                        egui::ProgressBar::new(job.progress)
                            .desired_width(160.0)
                            .show_percentage(),
                    );
                }
                if !job.created_at.is_empty() {
                    ui.label(
                        egui::RichText::new(&job.created_at).size(text::SMALL).weak(),
                    );
                }
            });
            ui.separator();
        }
    });
}

fn status_color(status: JobStatus) -> egui::Color32 {
    match status {
        JobStatus::Queued => egui::Color32::GRAY,
        JobStatus::Running => egui::Color32::from_rgb(80, 140, 220),
        JobStatus::Succeeded => egui::Color32::from_rgb(80, 180, 100),
        JobStatus::Failed => egui::Color32::from_rgb(210, 80, 80),
    }
}
