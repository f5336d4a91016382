//! Annotation shape types and drawing state.
//!
//! All coordinates are image pixels, never screen pixels; the editor maps
//! pointer positions through [`crate::editor::ViewScale`] before anything
//! in this module sees them.

use crate::model::CategoryId;

/// Minimum width and height (image pixels) for a committable bounding box.
/// A drag whose normalized dimensions are at or below this is discarded.
pub const MIN_BBOX_SIZE: f32 = 5.0;

/// Minimum number of vertices required to commit a polygon.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// A 2D point in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned bounding box with its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Normalize two drag corners into a box with positive dimensions.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        Self {
            x: p1.x.min(p2.x),
            y: p1.y.min(p2.y),
            width: (p1.x - p2.x).abs(),
            height: (p1.y - p2.y).abs(),
        }
    }

    /// Whether both dimensions exceed [`MIN_BBOX_SIZE`].
    pub fn is_committable(&self) -> bool {
        self.width > MIN_BBOX_SIZE && self.height > MIN_BBOX_SIZE
    }

    /// Check if a point is inside the box (edges inclusive).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A polygon defined by its vertices in insertion order.
///
/// The edge from the last vertex back to the first is implicit; polygons
/// are always treated as closed once committed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Whether the polygon has enough vertices to commit.
    pub fn is_committable(&self) -> bool {
        self.vertices.len() >= MIN_POLYGON_VERTICES
    }

    /// Point-in-polygon test using ray casting.
    pub fn contains(&self, point: Point) -> bool {
        if self.vertices.len() < MIN_POLYGON_VERTICES {
            return false;
        }
        let mut inside = false;
        let mut j = self.vertices.len() - 1;
        for i in 0..self.vertices.len() {
            let vi = self.vertices[i];
            let vj = self.vertices[j];
            if ((vi.y > point.y) != (vj.y > point.y))
                && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

/// The shape geometry of a committed annotation.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    BoundingBox(BoundingBox),
    Polygon(Polygon),
}

/// A committed annotation: a shape tagged with its category.
///
/// The platform assigns no client-side identity to individual records;
/// each save transmits the complete current shape set.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub category_id: CategoryId,
    pub shape: Shape,
}

impl Annotation {
    pub fn new(category_id: CategoryId, shape: Shape) -> Self {
        Self { category_id, shape }
    }
}

/// Annotation tools available in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnnotationTool {
    /// Selection tool; pointer events are ignored while active.
    #[default]
    Select,
    /// Bounding box drag tool.
    BoundingBox,
    /// Polygon vertex tool.
    Polygon,
}

impl AnnotationTool {
    /// Display name for the toolbar.
    pub fn name(&self) -> &'static str {
        match self {
            AnnotationTool::Select => "Select",
            AnnotationTool::BoundingBox => "BBox",
            AnnotationTool::Polygon => "Polygon",
        }
    }

    pub fn all() -> &'static [AnnotationTool] {
        &[
            AnnotationTool::Select,
            AnnotationTool::BoundingBox,
            AnnotationTool::Polygon,
        ]
    }

    /// Check if this tool creates shapes (anything but Select).
    pub fn is_drawing_tool(&self) -> bool {
        !matches!(self, AnnotationTool::Select)
    }
}

/// State for the shape currently being drawn, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DrawingState {
    /// Not currently drawing anything.
    #[default]
    Idle,
    /// Bounding box drag in progress; `current` tracks the pointer and may
    /// be on any side of `start` (signed width/height until commit).
    BoundingBox { start: Point, current: Point },
    /// Polygon vertices accumulated so far.
    Polygon { vertices: Vec<Point> },
}

impl DrawingState {
    pub fn is_drawing(&self) -> bool {
        !matches!(self, DrawingState::Idle)
    }

    /// Begin a bounding box drag at the given image point.
    pub fn start_bbox(&mut self, at: Point) {
        *self = DrawingState::BoundingBox {
            start: at,
            current: at,
        };
    }

    /// Track the pointer during a bounding box drag. No-op in other states.
    pub fn update_bbox(&mut self, to: Point) {
        if let DrawingState::BoundingBox { current, .. } = self {
            *current = to;
        }
    }

    /// Append a vertex to the in-progress polygon, starting one if needed.
    pub fn push_vertex(&mut self, at: Point) {
        match self {
            DrawingState::Polygon { vertices } => vertices.push(at),
            _ => {
                *self = DrawingState::Polygon { vertices: vec![at] };
            }
        }
    }

    /// Finish the bounding box drag, returning the normalized box if it
    /// clears the minimum-size threshold. Undersized drags are discarded
    /// silently. Resets to idle either way.
    pub fn finish_bbox(&mut self) -> Option<BoundingBox> {
        if let DrawingState::BoundingBox { start, current } = *self {
            *self = DrawingState::Idle;
            let bbox = BoundingBox::from_corners(start, current);
            if bbox.is_committable() {
                return Some(bbox);
            }
        }
        None
    }

    /// Finish the polygon if it has enough vertices. Keeps the in-progress
    /// vertices when the polygon is not yet committable so the user can
    /// continue adding points.
    pub fn finish_polygon(&mut self) -> Option<Polygon> {
        if let DrawingState::Polygon { vertices } = self {
            if vertices.len() >= MIN_POLYGON_VERTICES {
                let polygon = Polygon::new(std::mem::take(vertices));
                *self = DrawingState::Idle;
                return Some(polygon);
            }
        }
        None
    }

    /// Discard whatever is in progress. Used on tool switch, image
    /// navigation, and clear-all.
    pub fn cancel(&mut self) {
        *self = DrawingState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_from_corners_normalizes() {
        let bbox = BoundingBox::from_corners(Point::new(50.0, 80.0), Point::new(10.0, 20.0));
        assert_eq!(bbox.x, 10.0);
        assert_eq!(bbox.y, 20.0);
        assert_eq!(bbox.width, 40.0);
        assert_eq!(bbox.height, 60.0);
    }

    #[test]
    fn test_bbox_threshold_boundary() {
        // Exactly 5 pixels is excluded, 6 is included.
        let at_threshold = BoundingBox::new(0.0, 0.0, 5.0, 20.0);
        assert!(!at_threshold.is_committable());
        let above = BoundingBox::new(0.0, 0.0, 6.0, 6.0);
        assert!(above.is_committable());
        let thin = BoundingBox::new(0.0, 0.0, 20.0, 5.0);
        assert!(!thin.is_committable());
    }

    #[test]
    fn test_bbox_drag_commit() {
        let mut drawing = DrawingState::default();
        drawing.start_bbox(Point::new(10.0, 10.0));
        drawing.update_bbox(Point::new(50.0, 60.0));
        let bbox = drawing.finish_bbox().expect("box should commit");
        assert_eq!(bbox, BoundingBox::new(10.0, 10.0, 40.0, 50.0));
        assert_eq!(drawing, DrawingState::Idle);
    }

    #[test]
    fn test_bbox_drag_too_small_is_discarded() {
        let mut drawing = DrawingState::default();
        drawing.start_bbox(Point::new(10.0, 10.0));
        drawing.update_bbox(Point::new(12.0, 12.0));
        assert!(drawing.finish_bbox().is_none());
        assert_eq!(drawing, DrawingState::Idle);
    }

    #[test]
    fn test_bbox_drag_reversed_direction() {
        // Dragging up-left keeps negative signed dimensions until commit.
        let mut drawing = DrawingState::default();
        drawing.start_bbox(Point::new(100.0, 100.0));
        drawing.update_bbox(Point::new(40.0, 30.0));
        let bbox = drawing.finish_bbox().expect("box should commit");
        assert_eq!(bbox, BoundingBox::new(40.0, 30.0, 60.0, 70.0));
    }

    #[test]
    fn test_polygon_needs_three_vertices() {
        let mut drawing = DrawingState::default();
        drawing.push_vertex(Point::new(0.0, 0.0));
        drawing.push_vertex(Point::new(10.0, 0.0));
        assert!(drawing.finish_polygon().is_none());
        // Unfinished vertices are kept so the user can keep clicking.
        assert!(drawing.is_drawing());

        drawing.push_vertex(Point::new(5.0, 10.0));
        let polygon = drawing.finish_polygon().expect("polygon should commit");
        assert_eq!(
            polygon.vertices,
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(5.0, 10.0),
            ]
        );
        assert_eq!(drawing, DrawingState::Idle);
    }

    #[test]
    fn test_cancel_discards_in_progress() {
        let mut drawing = DrawingState::default();
        drawing.push_vertex(Point::new(0.0, 0.0));
        drawing.push_vertex(Point::new(10.0, 0.0));
        drawing.cancel();
        assert_eq!(drawing, DrawingState::Idle);
    }

    #[test]
    fn test_bbox_contains() {
        let bbox = BoundingBox::new(10.0, 10.0, 100.0, 100.0);
        assert!(bbox.contains(Point::new(50.0, 50.0)));
        assert!(bbox.contains(Point::new(10.0, 10.0)));
        assert!(!bbox.contains(Point::new(5.0, 50.0)));
    }

    #[test]
    fn test_polygon_contains() {
        let polygon = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ]);
        assert!(polygon.contains(Point::new(50.0, 50.0)));
        assert!(!polygon.contains(Point::new(150.0, 50.0)));
    }
}
