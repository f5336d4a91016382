//! Decode tests: tolerant parsing, aliasing, and malformed-record skipping.

use crate::api::schema::{
    check_schema_version, decode_annotations, decode_categories, decode_image_page,
    AnnotationEnvelope, CategoryRecord, ImagePageRecord, JobRecord, ProjectRecord,
    FALLBACK_CATEGORY_COLOR, SCHEMA_VERSION,
};
use crate::model::{JobStatus, Point, ProjectType, Shape, TrainingJob};

#[test]
fn test_decode_bbox_and_polygon_records() {
    let json = r#"{
        "data": [
            {"category_id": 3, "data": {"type": "bbox", "bbox": [10.0, 20.0, 30.0, 40.0]}},
            {"category_id": 7, "data": {"type": "polygon", "points": [[0.0, 0.0], [10.0, 0.0], [5.0, 10.0]]}}
        ]
    }"#;
    let envelope: AnnotationEnvelope = serde_json::from_str(json).unwrap();
    let annotations = decode_annotations(envelope.data);

    assert_eq!(annotations.len(), 2);
    assert_eq!(annotations[0].category_id, 3);
    match &annotations[0].shape {
        Shape::BoundingBox(bbox) => {
            assert_eq!((bbox.x, bbox.y, bbox.width, bbox.height), (10.0, 20.0, 30.0, 40.0));
        }
        other => panic!("expected bbox, got {other:?}"),
    }
    match &annotations[1].shape {
        Shape::Polygon(polygon) => {
            assert_eq!(
                polygon.vertices,
                vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(5.0, 10.0)]
            );
        }
        other => panic!("expected polygon, got {other:?}"),
    }
}

#[test]
fn test_malformed_records_are_skipped_not_errors() {
    // Unknown type, bbox without payload, and a two-point polygon must all
    // be dropped while the valid record survives.
    let json = r#"{
        "data": [
            {"category_id": 1, "data": {"type": "circle"}},
            {"category_id": 1, "data": {"type": "bbox"}},
            {"category_id": 1, "data": {"type": "polygon", "points": [[0.0, 0.0], [1.0, 1.0]]}},
            {"category_id": 2, "data": {"type": "bbox", "bbox": [1.0, 2.0, 30.0, 40.0]}}
        ]
    }"#;
    let envelope: AnnotationEnvelope = serde_json::from_str(json).unwrap();
    let annotations = decode_annotations(envelope.data);

    assert_eq!(annotations.len(), 1);
    assert_eq!(annotations[0].category_id, 2);
}

#[test]
fn test_schema_version_check() {
    assert!(check_schema_version(None).is_ok());
    assert!(check_schema_version(Some(SCHEMA_VERSION)).is_ok());
    assert!(check_schema_version(Some(SCHEMA_VERSION + 1)).is_err());
}

#[test]
fn test_category_color_parsing_with_fallback() {
    let json = r#"[
        {"id": 1, "name": "car", "category_metadata": {"color": "#ff8000"}},
        {"id": 2, "name": "person", "category_metadata": {"color": "not-a-color"}},
        {"id": 3, "name": "tree", "category_metadata": {}}
    ]"#;
    let records: Vec<CategoryRecord> = serde_json::from_str(json).unwrap();
    let categories = decode_categories(records);

    assert_eq!(categories.len(), 3);
    assert_eq!(categories[0].color, [255, 128, 0]);
    assert_eq!(categories[1].color, FALLBACK_CATEGORY_COLOR);
    assert_eq!(categories[2].color, FALLBACK_CATEGORY_COLOR);
}

#[test]
fn test_image_page_accepts_both_casings() {
    let lower = r#"{"images": [{"id": 1, "file_name": "a.jpg", "relative_path": "ds1/a.jpg", "width": 640, "height": 480}], "total": 9}"#;
    let upper = r#"{"Images": [{"id": 1, "file_name": "a.jpg", "relative_path": "ds1/a.jpg"}], "Total": 9}"#;

    let page_lower = decode_image_page(serde_json::from_str::<ImagePageRecord>(lower).unwrap());
    let page_upper = decode_image_page(serde_json::from_str::<ImagePageRecord>(upper).unwrap());

    assert_eq!(page_lower.total, 9);
    assert_eq!(page_upper.total, 9);
    assert_eq!(page_lower.images[0].id, page_upper.images[0].id);
    assert_eq!(page_lower.images[0].relative_path, "ds1/a.jpg");
    // Dimensions default to zero when the server omits them.
    assert_eq!(page_upper.images[0].width, 0);
}

#[test]
fn test_project_type_normalization() {
    let json = r#"{"id": 5, "workspace_id": 1, "name": "p", "project_type": "segmentation"}"#;
    let record: ProjectRecord = serde_json::from_str(json).unwrap();
    let project: crate::model::Project = record.into();
    assert_eq!(project.project_type, ProjectType::Segmentation);

    let unknown = r#"{"id": 5, "workspace_id": 1, "name": "p", "project_type": "keypoints"}"#;
    let record: ProjectRecord = serde_json::from_str(unknown).unwrap();
    let project: crate::model::Project = record.into();
    assert_eq!(project.project_type, ProjectType::Detection);
}

#[test]
fn test_job_status_normalization_and_progress_clamp() {
    let json = r#"{"id": 9, "project_id": 2, "name": "train-1", "status": "running", "progress": 1.4}"#;
    let record: JobRecord = serde_json::from_str(json).unwrap();
    let job: TrainingJob = record.into();
    assert_eq!(job.status, JobStatus::Running);
    assert_eq!(job.progress, 1.0);
}
