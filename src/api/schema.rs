//! Versioned wire schema for the platform API, plus the normalization
//! boundary between raw responses and the domain types in [`crate::model`].
//!
//! Everything tolerant lives here: optional fields, the mixed response
//! casing the backend has been observed emitting, and malformed annotation
//! records (skipped with a log line, never an error). Code past this module
//! only ever sees normalized [`crate::model`] values.

use serde::{Deserialize, Serialize};

use crate::model::{
    Annotation, BoundingBox, Category, CategoryId, Dataset, EntityId, ImageRef, JobStatus,
    Notification, Point, Polygon, Project, ProjectType, QuotaUsage, Shape, TrainingJob, User,
    Workspace, MIN_POLYGON_VERTICES,
};

/// Wire schema version this client implements. Responses that declare a
/// different version are rejected at the client edge.
pub const SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Annotations
// ============================================================================

/// Envelope for annotation fetch/save bodies: `{"data": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationEnvelope {
    /// Schema version, present on fetch responses since v1 of the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<u32>,
    pub data: Vec<AnnotationRecord>,
}

/// One generic annotation record: a category id plus a typed shape payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationRecord {
    pub category_id: CategoryId,
    pub data: ShapeRecord,
}

/// The shape payload of an annotation record. `kind` selects which of the
/// optional fields is meaningful.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeRecord {
    #[serde(rename = "type")]
    pub kind: String,
    /// `[x, y, width, height]`, present when `kind == "bbox"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<[f32; 4]>,
    /// `[[x, y], ...]`, present when `kind == "polygon"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<[f32; 2]>>,
}

/// Check the version an envelope declares against [`SCHEMA_VERSION`].
pub fn check_schema_version(declared: Option<u32>) -> Result<(), super::ApiError> {
    match declared {
        None => Ok(()),
        Some(found) if found == SCHEMA_VERSION => Ok(()),
        Some(found) => Err(super::ApiError::SchemaVersion {
            expected: SCHEMA_VERSION,
            found,
        }),
    }
}

/// Normalize fetched annotation records into domain shapes.
///
/// Unrecognized or malformed records are skipped with a log line; the
/// remaining records are returned in their server order.
pub fn decode_annotations(records: Vec<AnnotationRecord>) -> Vec<Annotation> {
    let total = records.len();
    let annotations: Vec<Annotation> = records
        .into_iter()
        .filter_map(decode_annotation)
        .collect();
    if annotations.len() < total {
        log::warn!(
            "Skipped {} malformed annotation record(s) out of {}",
            total - annotations.len(),
            total
        );
    }
    annotations
}

fn decode_annotation(record: AnnotationRecord) -> Option<Annotation> {
    let shape = match record.data.kind.as_str() {
        "bbox" => {
            let [x, y, width, height] = record.data.bbox?;
            if ![x, y, width, height].iter().all(|v| v.is_finite()) {
                log::debug!("Dropping bbox record with non-finite coordinates");
                return None;
            }
            Shape::BoundingBox(BoundingBox::new(x, y, width, height))
        }
        "polygon" => {
            let points = record.data.points?;
            if points.len() < MIN_POLYGON_VERTICES {
                log::debug!(
                    "Dropping polygon record with {} point(s)",
                    points.len()
                );
                return None;
            }
            if points.iter().any(|[x, y]| !x.is_finite() || !y.is_finite()) {
                log::debug!("Dropping polygon record with non-finite coordinates");
                return None;
            }
            Shape::Polygon(Polygon::new(
                points.into_iter().map(|[x, y]| Point::new(x, y)).collect(),
            ))
        }
        other => {
            log::debug!("Dropping annotation record with unknown type {:?}", other);
            return None;
        }
    };
    Some(Annotation::new(record.category_id, shape))
}

/// Serialize the full shape set back into the API's record shape. This is
/// the exact inverse of [`decode_annotations`] for well-formed shapes.
pub fn encode_annotations(annotations: &[Annotation]) -> Vec<AnnotationRecord> {
    annotations
        .iter()
        .map(|annotation| AnnotationRecord {
            category_id: annotation.category_id,
            data: match &annotation.shape {
                Shape::BoundingBox(bbox) => ShapeRecord {
                    kind: "bbox".to_string(),
                    bbox: Some([bbox.x, bbox.y, bbox.width, bbox.height]),
                    points: None,
                },
                Shape::Polygon(polygon) => ShapeRecord {
                    kind: "polygon".to_string(),
                    bbox: None,
                    points: Some(
                        polygon
                            .vertices
                            .iter()
                            .map(|point| [point.x, point.y])
                            .collect(),
                    ),
                },
            },
        })
        .collect()
}

// ============================================================================
// Categories
// ============================================================================

/// `{id, name, category_metadata: {color}}` as returned by the category
/// list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub category_metadata: CategoryMetadata,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryMetadata {
    /// Display color as `#rrggbb`.
    #[serde(default)]
    pub color: Option<String>,
}

/// Fallback stroke color for categories with a missing or unparseable color.
pub const FALLBACK_CATEGORY_COLOR: [u8; 3] = [128, 128, 128];

/// Normalize category records, substituting the fallback color where the
/// server's value is absent or unparseable.
pub fn decode_categories(records: Vec<CategoryRecord>) -> Vec<Category> {
    records
        .into_iter()
        .map(|record| {
            let color = record
                .category_metadata
                .color
                .as_deref()
                .and_then(Category::parse_hex_color)
                .unwrap_or_else(|| {
                    log::warn!(
                        "Category {:?} has no usable color, using fallback",
                        record.name
                    );
                    FALLBACK_CATEGORY_COLOR
                });
            Category::new(record.id, &record.name, color)
        })
        .collect()
}

// ============================================================================
// Images
// ============================================================================

/// One page of a dataset's image list.
///
/// The backend has been observed emitting both `images` and `Images` for
/// the collection key; the alias keeps that quirk contained here.
#[derive(Debug, Clone, Deserialize)]
pub struct ImagePageRecord {
    #[serde(alias = "Images")]
    pub images: Vec<ImageRecord>,
    #[serde(alias = "Total", default)]
    pub total: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageRecord {
    pub id: EntityId,
    #[serde(alias = "filename")]
    pub file_name: String,
    pub relative_path: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

/// A normalized page of images plus the server-reported total count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePage {
    pub images: Vec<ImageRef>,
    pub total: u64,
}

pub fn decode_image_page(record: ImagePageRecord) -> ImagePage {
    ImagePage {
        total: record.total,
        images: record
            .images
            .into_iter()
            .map(|image| ImageRef {
                id: image.id,
                file_name: image.file_name,
                relative_path: image.relative_path,
                width: image.width,
                height: image.height,
            })
            .collect(),
    }
}

// ============================================================================
// Session / dashboard entities
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserRecord,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub id: EntityId,
    pub email: String,
    #[serde(default)]
    pub name: String,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        User {
            id: record.id,
            email: record.email,
            name: record.name,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceRecord {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub created_at: String,
}

impl From<WorkspaceRecord> for Workspace {
    fn from(record: WorkspaceRecord) -> Self {
        Workspace {
            id: record.id,
            name: record.name,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRecord {
    pub id: EntityId,
    pub workspace_id: EntityId,
    pub name: String,
    #[serde(default)]
    pub project_type: String,
    #[serde(default)]
    pub created_at: String,
}

/// Map the wire project type onto [`ProjectType`], defaulting unknown
/// values to detection so a new server-side type cannot hide a project.
pub fn parse_project_type(value: &str) -> ProjectType {
    match value {
        "classification" => ProjectType::Classification,
        "detection" => ProjectType::Detection,
        "segmentation" => ProjectType::Segmentation,
        other => {
            if !other.is_empty() {
                log::warn!("Unknown project type {:?}, treating as detection", other);
            }
            ProjectType::Detection
        }
    }
}

/// Wire string for a [`ProjectType`], the inverse of [`parse_project_type`].
pub fn project_type_str(value: ProjectType) -> &'static str {
    match value {
        ProjectType::Classification => "classification",
        ProjectType::Detection => "detection",
        ProjectType::Segmentation => "segmentation",
    }
}

impl From<ProjectRecord> for Project {
    fn from(record: ProjectRecord) -> Self {
        Project {
            id: record.id,
            workspace_id: record.workspace_id,
            project_type: parse_project_type(&record.project_type),
            name: record.name,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetRecord {
    pub id: EntityId,
    pub workspace_id: EntityId,
    pub name: String,
    #[serde(default)]
    pub image_count: u64,
}

impl From<DatasetRecord> for Dataset {
    fn from(record: DatasetRecord) -> Self {
        Dataset {
            id: record.id,
            workspace_id: record.workspace_id,
            name: record.name,
            image_count: record.image_count,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobRecord {
    pub id: EntityId,
    pub project_id: EntityId,
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub progress: f32,
    #[serde(default)]
    pub created_at: String,
}

/// Map the wire job status onto [`JobStatus`], defaulting unknown values
/// to queued.
pub fn parse_job_status(value: &str) -> JobStatus {
    match value {
        "queued" => JobStatus::Queued,
        "running" => JobStatus::Running,
        "succeeded" => JobStatus::Succeeded,
        "failed" => JobStatus::Failed,
        other => {
            if !other.is_empty() {
                log::warn!("Unknown job status {:?}, treating as queued", other);
            }
            JobStatus::Queued
        }
    }
}

impl From<JobRecord> for TrainingJob {
    fn from(record: JobRecord) -> Self {
        TrainingJob {
            id: record.id,
            project_id: record.project_id,
            status: parse_job_status(&record.status),
            progress: record.progress.clamp(0.0, 1.0),
            name: record.name,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationRecord {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: String,
}

impl From<NotificationRecord> for Notification {
    fn from(record: NotificationRecord) -> Self {
        Notification {
            id: record.id,
            title: record.title,
            body: record.body,
            read: record.read,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuotaRecord {
    pub resource: String,
    pub used: u64,
    pub limit: u64,
}

impl From<QuotaRecord> for QuotaUsage {
    fn from(record: QuotaRecord) -> Self {
        QuotaUsage {
            resource: record.resource,
            used: record.used,
            limit: record.limit,
        }
    }
}
