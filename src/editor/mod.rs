//! The annotation editor: canvas scale math, painting, and per-image
//! editing state.

mod renderer;
mod transform;

pub use renderer::{category_color, paint_canvas};
pub use transform::{ViewScale, MAX_SCALE, MIN_SCALE, SCALE_STEP};

use crate::model::{AnnotationTool, Category, CategoryId, EntityId};
use crate::state::{AnnotationStore, ImageNavigator};

/// Everything the annotation editor needs for the image on screen.
///
/// Owned by the app and rebuilt piecemeal as navigation and fetches
/// complete; the canvas view derives its entire paint pass from this.
#[derive(Default)]
pub struct EditorState {
    pub store: AnnotationStore,
    pub navigator: ImageNavigator,
    pub categories: Vec<Category>,
    pub selected_category: Option<CategoryId>,
    pub tool: AnnotationTool,
    pub scale: ViewScale,
    /// Decoded image pixels, present once the binary fetch completed.
    pub raw_image: Option<image::DynamicImage>,
    /// Which image `raw_image` belongs to.
    pub raw_image_id: Option<EntityId>,
    /// GPU texture uploaded lazily from `raw_image`.
    pub texture: Option<egui::TextureHandle>,
    /// Whether the clear-all confirmation dialog is open.
    pub confirm_clear_open: bool,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Natural pixel dimensions of the displayed image.
    pub fn image_size(&self) -> Option<(u32, u32)> {
        self.raw_image.as_ref().map(|img| (img.width(), img.height()))
    }

    /// Look up the currently selected category.
    pub fn selected_category(&self) -> Option<&Category> {
        let id = self.selected_category?;
        self.categories.iter().find(|category| category.id == id)
    }

    /// Drop per-image state ahead of a navigation-triggered reload.
    pub fn reset_for_image_change(&mut self) {
        self.store.clear_all();
        self.store.mark_saved();
        self.raw_image = None;
        self.raw_image_id = None;
        self.texture = None;
        self.confirm_clear_open = false;
    }

    /// Upload the decoded image as a texture if not done yet.
    pub fn ensure_texture(&mut self, ctx: &egui::Context) {
        if self.texture.is_some() {
            return;
        }
        if let Some(raw) = &self.raw_image {
            let rgba = raw.to_rgba8();
            let size = [rgba.width() as usize, rgba.height() as usize];
            let pixels = rgba.as_flat_samples();
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, pixels.as_slice());
            self.texture =
                Some(ctx.load_texture("editor-image", color_image, egui::TextureOptions::LINEAR));
        }
    }
}
