//! Theme application.

/// Apply the configured theme to the egui context.
pub fn apply(ctx: &egui::Context, dark_theme: bool) {
    if dark_theme {
        ctx.set_visuals(egui::Visuals::dark());
    } else {
        ctx.set_visuals(egui::Visuals::light());
    }
}
