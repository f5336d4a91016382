//! In-memory annotation store for the currently displayed image.
//!
//! Shapes live here only while their image is on screen: the store is
//! replaced wholesale on navigation and serialized wholesale on save.
//! There is no client-side identity or diffing of individual records.

use crate::model::{
    Annotation, BoundingBox, CategoryId, DrawingState, Polygon, Shape,
};

/// A committed bounding box with its category.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxEntry {
    pub bbox: BoundingBox,
    pub category_id: CategoryId,
}

/// A committed polygon with its category.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonEntry {
    pub polygon: Polygon,
    pub category_id: CategoryId,
}

/// Shape lists for the current image, plus the in-progress drawing.
#[derive(Debug, Clone, Default)]
pub struct AnnotationStore {
    boxes: Vec<BoxEntry>,
    polygons: Vec<PolygonEntry>,
    drawing: DrawingState,
    /// Set when the shape lists diverge from what was last fetched/saved.
    dirty: bool,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boxes(&self) -> &[BoxEntry] {
        &self.boxes
    }

    pub fn polygons(&self) -> &[PolygonEntry] {
        &self.polygons
    }

    pub fn drawing(&self) -> &DrawingState {
        &self.drawing
    }

    pub fn drawing_mut(&mut self) -> &mut DrawingState {
        &mut self.drawing
    }

    /// Total number of committed shapes.
    pub fn len(&self) -> usize {
        self.boxes.len() + self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty() && self.polygons.is_empty()
    }

    /// Whether there are unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the current contents as in sync with the server.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Replace everything with a freshly fetched shape set. Any in-progress
    /// drawing is discarded along with the old shapes.
    pub fn replace_from(&mut self, annotations: Vec<Annotation>) {
        self.boxes.clear();
        self.polygons.clear();
        for annotation in annotations {
            match annotation.shape {
                Shape::BoundingBox(bbox) => self.boxes.push(BoxEntry {
                    bbox,
                    category_id: annotation.category_id,
                }),
                Shape::Polygon(polygon) => self.polygons.push(PolygonEntry {
                    polygon,
                    category_id: annotation.category_id,
                }),
            }
        }
        self.drawing.cancel();
        self.dirty = false;
    }

    /// Commit a finished bounding box.
    pub fn commit_box(&mut self, bbox: BoundingBox, category_id: CategoryId) {
        self.boxes.push(BoxEntry { bbox, category_id });
        self.dirty = true;
    }

    /// Commit a finished polygon.
    pub fn commit_polygon(&mut self, polygon: Polygon, category_id: CategoryId) {
        self.polygons.push(PolygonEntry {
            polygon,
            category_id,
        });
        self.dirty = true;
    }

    /// Empty both shape lists and any in-progress shape. Callers gate this
    /// behind an explicit confirmation.
    pub fn clear_all(&mut self) {
        if !self.is_empty() {
            self.dirty = true;
        }
        self.boxes.clear();
        self.polygons.clear();
        self.drawing.cancel();
    }

    /// Flatten both lists into the order they are serialized in: boxes
    /// first, then polygons.
    pub fn to_annotations(&self) -> Vec<Annotation> {
        let mut annotations = Vec::with_capacity(self.len());
        annotations.extend(
            self.boxes
                .iter()
                .map(|entry| Annotation::new(entry.category_id, Shape::BoundingBox(entry.bbox))),
        );
        annotations.extend(self.polygons.iter().map(|entry| {
            Annotation::new(entry.category_id, Shape::Polygon(entry.polygon.clone()))
        }));
        annotations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;

    #[test]
    fn test_replace_splits_by_shape() {
        let mut store = AnnotationStore::new();
        store.replace_from(vec![
            Annotation::new(1, Shape::BoundingBox(BoundingBox::new(0.0, 0.0, 10.0, 10.0))),
            Annotation::new(
                2,
                Shape::Polygon(Polygon::new(vec![
                    Point::new(0.0, 0.0),
                    Point::new(10.0, 0.0),
                    Point::new(5.0, 10.0),
                ])),
            ),
        ]);
        assert_eq!(store.boxes().len(), 1);
        assert_eq!(store.polygons().len(), 1);
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_replace_discards_in_progress_drawing() {
        let mut store = AnnotationStore::new();
        store.drawing_mut().start_bbox(Point::new(0.0, 0.0));
        store.replace_from(Vec::new());
        assert!(!store.drawing().is_drawing());
    }

    #[test]
    fn test_clear_all_empties_everything() {
        let mut store = AnnotationStore::new();
        store.commit_box(BoundingBox::new(0.0, 0.0, 10.0, 10.0), 1);
        store.commit_polygon(
            Polygon::new(vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(5.0, 10.0),
            ]),
            1,
        );
        store.drawing_mut().push_vertex(Point::new(1.0, 1.0));

        store.clear_all();

        assert!(store.is_empty());
        assert!(!store.drawing().is_drawing());
        assert_eq!(store.to_annotations().len(), 0);
    }

    #[test]
    fn test_commit_marks_dirty_and_save_clears_it() {
        let mut store = AnnotationStore::new();
        assert!(!store.is_dirty());
        store.commit_box(BoundingBox::new(0.0, 0.0, 10.0, 10.0), 1);
        assert!(store.is_dirty());
        store.mark_saved();
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_to_annotations_orders_boxes_before_polygons() {
        let mut store = AnnotationStore::new();
        store.commit_polygon(
            Polygon::new(vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(5.0, 10.0),
            ]),
            2,
        );
        store.commit_box(BoundingBox::new(0.0, 0.0, 10.0, 10.0), 1);

        let annotations = store.to_annotations();
        assert!(matches!(annotations[0].shape, Shape::BoundingBox(_)));
        assert!(matches!(annotations[1].shape, Shape::Polygon(_)));
    }
}
