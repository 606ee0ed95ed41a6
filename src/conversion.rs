use log::warn;
use std::path::Path;

use crate::error::ConvertError;
use crate::registry::LabelRegistry;
use crate::types::{BoundingBox, ConversionStats, ImageAnnotation, YoloBox};

/// Reduce a polygon's vertex list to its axis-aligned bounding rectangle.
///
/// No check that the polygon is simple or closed; self-intersecting or
/// degenerate polygons still produce a valid box from their extremal
/// coordinates.
pub fn polygon_to_bbox(points: &[(f64, f64)]) -> Result<BoundingBox, ConvertError> {
    if points.is_empty() {
        return Err(ConvertError::NotEnoughPoints {
            shape_type: "polygon",
            expected: 1,
            actual: 0,
        });
    }

    let (x1, y1, x2, y2) = points.iter().fold(
        (f64::MAX, f64::MAX, f64::MIN, f64::MIN),
        |(x_min, y_min, x_max, y_max), &(x, y)| {
            (x_min.min(x), y_min.min(y), x_max.max(x), y_max.max(y))
        },
    );

    Ok(BoundingBox { x1, y1, x2, y2 })
}

/// Reduce a two-point rectangle annotation to a bounding box.
///
/// The two points are opposite corners in arbitrary order; corner order is
/// normalized with min/max. Points beyond the first two are ignored.
pub fn rectangle_to_bbox(points: &[(f64, f64)]) -> Result<BoundingBox, ConvertError> {
    if points.len() < 2 {
        return Err(ConvertError::NotEnoughPoints {
            shape_type: "rectangle",
            expected: 2,
            actual: points.len(),
        });
    }

    let (xa, ya) = points[0];
    let (xb, yb) = points[1];

    Ok(BoundingBox {
        x1: xa.min(xb),
        y1: ya.min(yb),
        x2: xa.max(xb),
        y2: ya.max(yb),
    })
}

/// Convert an absolute bounding box to normalized center form.
///
/// Boxes extending outside the image yield values below 0 or above 1 and are
/// passed through unchanged.
pub fn normalize(bbox: &BoundingBox, image_width: f64, image_height: f64) -> YoloBox {
    YoloBox {
        cx: (bbox.x1 + bbox.x2) / 2.0 / image_width,
        cy: (bbox.y1 + bbox.y2) / 2.0 / image_height,
        w: (bbox.x2 - bbox.x1) / image_width,
        h: (bbox.y2 - bbox.y1) / image_height,
    }
}

/// Convert one annotation to YOLO label lines.
///
/// Shapes with an unknown label or an unsupported shape type are skipped with
/// a warning and counted in `stats`; a malformed point list or a zero image
/// dimension aborts the whole file. Returns the label-file contents, which
/// are empty when every shape was skipped.
pub fn convert_annotation(
    path: &Path,
    annotation: &ImageAnnotation,
    registry: &LabelRegistry,
    stats: &mut ConversionStats,
) -> Result<String, ConvertError> {
    if annotation.image_width == 0.0 || annotation.image_height == 0.0 {
        return Err(ConvertError::ZeroDimension {
            width: annotation.image_width,
            height: annotation.image_height,
        });
    }

    let mut yolo_data = String::with_capacity(annotation.shapes.len() * 64);

    for shape in &annotation.shapes {
        // Label lookup happens before the shape-type dispatch; a shape that
        // fails both checks only reports the unknown label.
        let class_id = match registry.get(&shape.label) {
            Some(class_id) => class_id,
            None => {
                warn!(
                    "Skipping unknown label '{}' in {}",
                    shape.label,
                    path.display()
                );
                stats.unknown_label_skips += 1;
                continue;
            }
        };

        let bbox = match shape.shape_type.as_str() {
            "polygon" => polygon_to_bbox(&shape.points)?,
            "rectangle" => rectangle_to_bbox(&shape.points)?,
            other => {
                warn!(
                    "Skipping unsupported shape type '{}' in {}",
                    other,
                    path.display()
                );
                stats.unsupported_shape_skips += 1;
                continue;
            }
        };

        let yolo_box = normalize(&bbox, annotation.image_width, annotation.image_height);
        yolo_data.push_str(&format!(
            "{} {:.6} {:.6} {:.6} {:.6}\n",
            class_id, yolo_box.cx, yolo_box.cy, yolo_box.w, yolo_box.h
        ));
    }

    Ok(yolo_data)
}
