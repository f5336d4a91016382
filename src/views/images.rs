//! Paged image list for the browsed dataset.

use crate::constants::{spacing, text};
use crate::message::{ImageMessage, Message};
use crate::state::ImageNavigator;

use super::helpers;

pub fn view(
    ui: &mut egui::Ui,
    navigator: &ImageNavigator,
    page_size: u32,
    messages: &mut Vec<Message>,
) {
    helpers::heading(ui, "Images");

    let page = navigator.page().max(1);
    let total = navigator.total();
    let has_more = u64::from(page) * u64::from(page_size) < total;

    ui.horizontal(|ui| {
        if ui.add_enabled(page > 1, egui::Button::new("< Page")).clicked() {
            messages.push(Message::Image(ImageMessage::LoadPage { page: page - 1 }));
        }
        ui.label(format!("Page {page} — {total} images total"));
        if ui.add_enabled(has_more, egui::Button::new("Page >")).clicked() {
            messages.push(Message::Image(ImageMessage::LoadPage { page: page + 1 }));
        }
    });
    ui.add_space(spacing::STANDARD);

    if navigator.is_empty() {
        helpers::empty_placeholder(ui, "No images in this dataset");
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("image-list")
            .num_columns(4)
            .striped(true)
            .show(ui, |ui| {
                ui.label(egui::RichText::new("#").size(text::SMALL).strong());
                ui.label(egui::RichText::new("File").size(text::SMALL).strong());
                ui.label(egui::RichText::new("Size").size(text::SMALL).strong());
                ui.label("");
                ui.end_row();

                for (index, image) in navigator.images().iter().enumerate() {
                    ui.label(format!("{}", index + 1));
                    ui.label(&image.file_name);
                    if image.width > 0 && image.height > 0 {
                        ui.label(format!("{}x{}", image.width, image.height));
                    } else {
                        ui.label("-");
                    }
                    if ui.button("Annotate").clicked() {
                        messages.push(Message::Image(ImageMessage::Open { index }));
                    }
                    ui.end_row();
                }
            });
    });
}
