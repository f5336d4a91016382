//! UI constants for consistent styling across the application.

/// Text size constants for consistent typography hierarchy.
pub mod text {
    /// Page/section title
    pub const TITLE: f32 = 22.0;
    /// Body text and labels
    pub const BODY: f32 = 14.0;
    /// Small text, status messages, help text
    pub const SMALL: f32 = 12.0;
}

/// Spacing constants for consistent layout.
pub mod spacing {
    /// Tight spacing for compact elements
    pub const TIGHT: f32 = 5.0;
    /// Standard spacing between related elements
    pub const STANDARD: f32 = 10.0;
    /// Large spacing between major sections
    pub const LARGE: f32 = 20.0;
}

/// Canvas rendering constants for the annotation editor.
pub mod canvas {
    /// Stroke width for committed shapes
    pub const STROKE_WIDTH: f32 = 2.0;
    /// Radius of polygon vertex markers
    pub const VERTEX_RADIUS: f32 = 3.0;
    /// Dash length for in-progress shapes
    pub const DASH_LENGTH: f32 = 6.0;
    /// Gap length for in-progress shapes
    pub const GAP_LENGTH: f32 = 4.0;
    /// Alpha for polygon interior fill
    pub const FILL_ALPHA: u8 = 60;
    /// Font size of bbox label tags
    pub const LABEL_FONT_SIZE: f32 = 12.0;
    /// Padding inside bbox label tags
    pub const LABEL_PADDING: f32 = 3.0;
}

/// Window geometry.
pub mod window {
    pub const DEFAULT_SIZE: [f32; 2] = [1280.0, 840.0];
    pub const MIN_SIZE: [f32; 2] = [900.0, 600.0];
}

/// Toast overlay geometry.
pub mod toast {
    /// Width of the toast column in the corner
    pub const WIDTH: f32 = 320.0;
    /// Margin from the window edge
    pub const MARGIN: f32 = 12.0;
}
