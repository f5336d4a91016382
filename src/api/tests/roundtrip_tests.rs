//! Round-trip fidelity: shapes → wire records → shapes must be lossless.

use crate::api::schema::{decode_annotations, encode_annotations};
use crate::model::{Annotation, BoundingBox, Point, Polygon, Shape};

fn sample_shapes() -> Vec<Annotation> {
    vec![
        Annotation::new(
            1,
            Shape::BoundingBox(BoundingBox::new(10.0, 10.0, 40.0, 50.0)),
        ),
        // Fractional coordinates exercise float fidelity through JSON.
        Annotation::new(
            2,
            Shape::BoundingBox(BoundingBox::new(0.5, 7.25, 123.125, 88.625)),
        ),
        Annotation::new(
            3,
            Shape::Polygon(Polygon::new(vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(5.0, 10.0),
            ])),
        ),
        Annotation::new(
            4,
            Shape::Polygon(Polygon::new(vec![
                Point::new(1.1, 2.2),
                Point::new(3.3, 4.4),
                Point::new(5.5, 6.6),
                Point::new(7.7, 8.8),
            ])),
        ),
    ]
}

#[test]
fn test_encode_decode_round_trip_is_exact() {
    let original = sample_shapes();
    let decoded = decode_annotations(encode_annotations(&original));
    assert_eq!(decoded, original);
}

#[test]
fn test_round_trip_survives_json_serialization() {
    // Through actual JSON text, as the wire sees it.
    let original = sample_shapes();
    let records = encode_annotations(&original);
    let json = serde_json::to_string(&records).unwrap();
    let reparsed = serde_json::from_str(&json).unwrap();
    let decoded = decode_annotations(reparsed);
    assert_eq!(decoded, original);
}

#[test]
fn test_encode_shape_layout() {
    let records = encode_annotations(&sample_shapes());

    assert_eq!(records[0].data.kind, "bbox");
    assert_eq!(records[0].data.bbox, Some([10.0, 10.0, 40.0, 50.0]));
    assert!(records[0].data.points.is_none());

    assert_eq!(records[2].data.kind, "polygon");
    assert!(records[2].data.bbox.is_none());
    assert_eq!(
        records[2].data.points.as_deref(),
        Some(&[[0.0, 0.0], [10.0, 0.0], [5.0, 10.0]][..])
    );
}

#[test]
fn test_vertex_order_is_preserved() {
    let original = vec![Annotation::new(
        1,
        Shape::Polygon(Polygon::new(vec![
            Point::new(9.0, 1.0),
            Point::new(1.0, 9.0),
            Point::new(4.0, 4.0),
        ])),
    )];
    let decoded = decode_annotations(encode_annotations(&original));
    match &decoded[0].shape {
        Shape::Polygon(polygon) => {
            assert_eq!(polygon.vertices[0], Point::new(9.0, 1.0));
            assert_eq!(polygon.vertices[1], Point::new(1.0, 9.0));
            assert_eq!(polygon.vertices[2], Point::new(4.0, 4.0));
        }
        other => panic!("expected polygon, got {other:?}"),
    }
}
