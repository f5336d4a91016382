//! Domain types for the dashboard and the annotation editor.

mod annotation;
mod category;
mod entities;

pub use annotation::{
    Annotation, AnnotationTool, BoundingBox, DrawingState, Point, Polygon, Shape, MIN_BBOX_SIZE,
    MIN_POLYGON_VERTICES,
};
pub use category::{Category, CategoryId};
pub use entities::{
    Dataset, EntityId, ImageRef, JobStatus, Notification, Project, ProjectType, QuotaUsage,
    TrainingJob, User, Workspace,
};
