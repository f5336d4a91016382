//! Canvas paint pass for the annotation editor.
//!
//! Pure painting: given the current store, drawing state, and scale, emit
//! the image plus shape overlays. No state is touched here, so the pass is
//! safe to re-run every frame.

use egui::{Color32, FontId, Pos2, Rect, Stroke, StrokeKind};

use crate::constants::canvas;
use crate::model::{BoundingBox, Category, CategoryId, DrawingState, Point};
use crate::state::AnnotationStore;

use super::ViewScale;

/// Stroke color for a category id, gray when the lookup misses.
pub fn category_color(categories: &[Category], id: CategoryId) -> Color32 {
    categories
        .iter()
        .find(|category| category.id == id)
        .map(|category| {
            Color32::from_rgb(category.color[0], category.color[1], category.color[2])
        })
        .unwrap_or(Color32::GRAY)
}

fn category_name<'a>(categories: &'a [Category], id: CategoryId) -> &'a str {
    categories
        .iter()
        .find(|category| category.id == id)
        .map(|category| category.name.as_str())
        .unwrap_or("?")
}

/// Paint the image and all shapes into the canvas at `origin`.
#[allow(clippy::too_many_arguments)]
pub fn paint_canvas(
    painter: &egui::Painter,
    origin: Pos2,
    texture: Option<&egui::TextureHandle>,
    image_size: (u32, u32),
    scale: ViewScale,
    store: &AnnotationStore,
    categories: &[Category],
    in_progress_color: Color32,
) {
    let (canvas_w, canvas_h) = scale.scaled_size(image_size.0, image_size.1);
    let canvas_rect = Rect::from_min_size(origin, egui::vec2(canvas_w, canvas_h));

    // Image stretched to natural size times scale.
    if let Some(texture) = texture {
        painter.image(
            texture.id(),
            canvas_rect,
            Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0)),
            Color32::WHITE,
        );
    } else {
        painter.rect_filled(canvas_rect, 0.0, Color32::from_gray(40));
    }

    let to_screen = |point: Point| -> Pos2 {
        let (x, y) = scale.to_screen(point);
        Pos2::new(origin.x + x, origin.y + y)
    };

    // Committed boxes, each with a label tag above its top-left corner.
    for entry in store.boxes() {
        let color = category_color(categories, entry.category_id);
        let rect = bbox_screen_rect(&entry.bbox, origin, scale);
        painter.rect_stroke(
            rect,
            0.0,
            Stroke::new(canvas::STROKE_WIDTH, color),
            StrokeKind::Middle,
        );
        paint_label_tag(
            painter,
            rect.min,
            category_name(categories, entry.category_id),
            color,
        );
    }

    // Committed polygons: stroked outline, translucent fill, vertex dots.
    for entry in store.polygons() {
        let color = category_color(categories, entry.category_id);
        let points: Vec<Pos2> = entry.polygon.vertices.iter().map(|p| to_screen(*p)).collect();
        let fill = Color32::from_rgba_unmultiplied(
            color.r(),
            color.g(),
            color.b(),
            canvas::FILL_ALPHA,
        );
        painter.add(egui::Shape::closed_line(
            points.clone(),
            Stroke::new(canvas::STROKE_WIDTH, color),
        ));
        painter.add(egui::Shape::convex_polygon(points.clone(), fill, Stroke::NONE));
        for point in &points {
            painter.circle_filled(*point, canvas::VERTEX_RADIUS, color);
        }
    }

    // In-progress shape, dashed to stand apart from committed shapes.
    match store.drawing() {
        DrawingState::Idle => {}
        DrawingState::BoundingBox { start, current } => {
            let bbox = BoundingBox::from_corners(*start, *current);
            let rect = bbox_screen_rect(&bbox, origin, scale);
            paint_dashed_rect(painter, rect, in_progress_color);
        }
        DrawingState::Polygon { vertices } => {
            let points: Vec<Pos2> = vertices.iter().map(|p| to_screen(*p)).collect();
            if points.len() > 1 {
                painter.extend(egui::Shape::dashed_line(
                    &points,
                    Stroke::new(canvas::STROKE_WIDTH, in_progress_color),
                    canvas::DASH_LENGTH,
                    canvas::GAP_LENGTH,
                ));
            }
            for point in &points {
                painter.circle_filled(*point, canvas::VERTEX_RADIUS, in_progress_color);
            }
        }
    }
}

fn bbox_screen_rect(bbox: &BoundingBox, origin: Pos2, scale: ViewScale) -> Rect {
    let (x, y) = scale.to_screen(bbox.top_left());
    let (w, h) = (bbox.width * scale.factor(), bbox.height * scale.factor());
    Rect::from_min_size(Pos2::new(origin.x + x, origin.y + y), egui::vec2(w, h))
}

/// Filled name tag sitting on top of a box's top-left corner.
fn paint_label_tag(painter: &egui::Painter, anchor: Pos2, name: &str, color: Color32) {
    let galley = painter.layout_no_wrap(
        name.to_string(),
        FontId::proportional(canvas::LABEL_FONT_SIZE),
        Color32::WHITE,
    );
    let pad = canvas::LABEL_PADDING;
    let size = galley.size() + egui::vec2(pad * 2.0, pad * 2.0);
    let tag_rect = Rect::from_min_size(Pos2::new(anchor.x, anchor.y - size.y), size);
    painter.rect_filled(tag_rect, 2.0, color);
    painter.galley(tag_rect.min + egui::vec2(pad, pad), galley, Color32::WHITE);
}

fn paint_dashed_rect(painter: &egui::Painter, rect: Rect, color: Color32) {
    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ];
    painter.extend(egui::Shape::dashed_line(
        &corners,
        Stroke::new(canvas::STROKE_WIDTH, color),
        canvas::DASH_LENGTH,
        canvas::GAP_LENGTH,
    ));
}
