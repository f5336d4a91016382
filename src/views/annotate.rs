//! The annotation editor page: toolbar, category sidebar, and the canvas.
//!
//! The canvas view inverse-scales pointer positions into image pixels
//! before anything leaves this module; handlers and the store only ever
//! see image coordinates.

use egui::{Color32, PointerButton, Sense};

use crate::constants::{spacing, text};
use crate::editor::{category_color, paint_canvas, EditorState};
use crate::message::{EditorMessage, Message};
use crate::model::AnnotationTool;

use super::helpers;

pub fn view(ui: &mut egui::Ui, editor: &mut EditorState, messages: &mut Vec<Message>) {
    editor.ensure_texture(ui.ctx());

    // Navigation row.
    ui.horizontal(|ui| {
        if ui
            .add_enabled(editor.navigator.has_prev(), egui::Button::new("< Prev"))
            .clicked()
        {
            messages.push(Message::Editor(EditorMessage::PrevImage));
        }
        if ui
            .add_enabled(editor.navigator.has_next(), egui::Button::new("Next >"))
            .clicked()
        {
            messages.push(Message::Editor(EditorMessage::NextImage));
        }
        ui.label(editor.navigator.progress());
        if let Some(image) = editor.navigator.current() {
            ui.label(egui::RichText::new(&image.file_name).size(text::SMALL).weak());
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Save").clicked() {
                messages.push(Message::Editor(EditorMessage::Save));
            }
            if editor.store.is_dirty() {
                ui.label(egui::RichText::new("unsaved").size(text::SMALL).weak());
            }
        });
    });

    // Tool row.
    ui.horizontal(|ui| {
        for tool in AnnotationTool::all() {
            if ui
                .selectable_label(editor.tool == *tool, tool.name())
                .clicked()
            {
                messages.push(Message::Editor(EditorMessage::ToolSelected(*tool)));
            }
        }
        if editor.tool == AnnotationTool::Polygon && ui.button("Finish Polygon").clicked() {
            messages.push(Message::Editor(EditorMessage::FinishPolygon));
        }
        ui.separator();
        if ui.button("Clear All").clicked() {
            messages.push(Message::Editor(EditorMessage::RequestClearAll));
        }
        ui.separator();
        if ui.button("-").clicked() {
            messages.push(Message::Editor(EditorMessage::ZoomOut));
        }
        ui.label(format!("{:.0}%", editor.scale.factor() * 100.0));
        if ui.button("+").clicked() {
            messages.push(Message::Editor(EditorMessage::ZoomIn));
        }
        if ui.button("1:1").clicked() {
            messages.push(Message::Editor(EditorMessage::ResetZoom));
        }
    });
    ui.separator();

    // Arrow keys step through the image list.
    ui.input(|i| {
        if i.key_pressed(egui::Key::ArrowRight) {
            messages.push(Message::Editor(EditorMessage::NextImage));
        }
        if i.key_pressed(egui::Key::ArrowLeft) {
            messages.push(Message::Editor(EditorMessage::PrevImage));
        }
    });

    ui.horizontal_top(|ui| {
        category_sidebar(ui, editor, messages);
        ui.separator();
        canvas(ui, editor, messages);
    });

    confirm_clear_dialog(ui.ctx(), editor, messages);
}

fn category_sidebar(ui: &mut egui::Ui, editor: &EditorState, messages: &mut Vec<Message>) {
    ui.vertical(|ui| {
        ui.set_width(180.0);
        ui.label(egui::RichText::new("Categories").size(text::BODY).strong());
        ui.add_space(spacing::TIGHT);

        if editor.categories.is_empty() {
            helpers::empty_placeholder(ui, "No categories in this project");
        }
        for category in &editor.categories {
            ui.horizontal(|ui| {
                let (swatch, _) =
                    ui.allocate_exact_size(egui::vec2(12.0, 12.0), Sense::hover());
                ui.painter().rect_filled(
                    swatch,
                    2.0,
                    Color32::from_rgb(category.color[0], category.color[1], category.color[2]),
                );
                let selected = editor.selected_category == Some(category.id);
                if ui.selectable_label(selected, &category.name).clicked() {
                    messages.push(Message::Editor(EditorMessage::CategorySelected(
                        category.id,
                    )));
                }
            });
        }

        ui.add_space(spacing::LARGE);
        ui.label(
            egui::RichText::new(format!(
                "{} box(es), {} polygon(s)",
                editor.store.boxes().len(),
                editor.store.polygons().len()
            ))
            .size(text::SMALL),
        );
        if editor.store.drawing().is_drawing() {
            ui.label(egui::RichText::new("Drawing...").size(text::SMALL).weak());
        }
    });
}

fn canvas(ui: &mut egui::Ui, editor: &mut EditorState, messages: &mut Vec<Message>) {
    // Fall back to the server-reported dimensions (or a default frame)
    // until the binary has arrived and been decoded.
    let image_size = editor
        .image_size()
        .or_else(|| {
            editor
                .navigator
                .current()
                .filter(|image| image.width > 0 && image.height > 0)
                .map(|image| (image.width, image.height))
        })
        .unwrap_or((640, 480));

    egui::ScrollArea::both()
        .id_salt("annotate-canvas")
        .show(ui, |ui| {
            let (canvas_w, canvas_h) = editor.scale.scaled_size(image_size.0, image_size.1);
            let (response, painter) =
                ui.allocate_painter(egui::vec2(canvas_w, canvas_h), Sense::click_and_drag());
            let origin = response.rect.min;

            let in_progress_color = editor
                .selected_category
                .map(|id| category_color(&editor.categories, id))
                .unwrap_or(Color32::GRAY);

            paint_canvas(
                &painter,
                origin,
                editor.texture.as_ref(),
                image_size,
                editor.scale,
                &editor.store,
                &editor.categories,
                in_progress_color,
            );

            if editor.raw_image.is_none() {
                painter.text(
                    response.rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "Loading image...",
                    egui::FontId::proportional(text::BODY),
                    Color32::LIGHT_GRAY,
                );
            }

            // Pointer events, inverse-scaled into image pixels.
            let to_image = |pos: egui::Pos2| {
                editor.scale.to_image(pos.x - origin.x, pos.y - origin.y)
            };
            if response.drag_started_by(PointerButton::Primary) {
                if let Some(pos) = response.interact_pointer_pos() {
                    messages.push(Message::Editor(EditorMessage::PointerDown(to_image(pos))));
                }
            }
            if response.dragged_by(PointerButton::Primary) {
                if let Some(pos) = response.interact_pointer_pos() {
                    messages.push(Message::Editor(EditorMessage::PointerMoved(to_image(pos))));
                }
            }
            if response.drag_stopped_by(PointerButton::Primary) {
                messages.push(Message::Editor(EditorMessage::PointerUp));
            }
        });
}

fn confirm_clear_dialog(
    ctx: &egui::Context,
    editor: &EditorState,
    messages: &mut Vec<Message>,
) {
    if !editor.confirm_clear_open {
        return;
    }
    egui::Window::new("Clear all annotations?")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("This removes every shape on this image, including any in progress.");
            ui.add_space(spacing::STANDARD);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    messages.push(Message::Editor(EditorMessage::CancelClearAll));
                }
                if ui.button("Clear All").clicked() {
                    messages.push(Message::Editor(EditorMessage::ConfirmClearAll));
                }
            });
        });
}
