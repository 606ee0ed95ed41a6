use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// The Shape struct representing one labeled region in a LabelMe file
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Shape {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    #[serde(default)]
    pub group_id: Option<i64>,
    pub shape_type: String,
    #[serde(default)]
    pub description: Option<String>,
}

// The ImageAnnotation struct representing the annotation information of an image.
// Only the image dimensions and the shape list are required; the remaining
// LabelMe fields are accepted but not used.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnnotation {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub flags: Option<HashMap<String, bool>>,
    pub shapes: Vec<Shape>,
    #[serde(default)]
    pub image_path: Option<String>,
    pub image_height: f64,
    pub image_width: f64,
}

// Axis-aligned bounding box in absolute pixel coordinates, x1 <= x2 and y1 <= y2
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

// Bounding box in normalized center form, as written to the label file.
// Values are fractions of the image dimensions; boxes extending outside the
// image are passed through without clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YoloBox {
    pub cx: f64,
    pub cy: f64,
    pub w: f64,
    pub h: f64,
}

// Struct to hold batch conversion statistics
#[derive(Debug, Default, Clone)]
pub struct ConversionStats {
    pub files_processed: usize,
    pub files_converted: usize,
    pub files_failed: usize,
    pub empty_outputs_removed: usize,
    pub unknown_label_skips: usize,
    pub unsupported_shape_skips: usize,
}

impl ConversionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print_summary(&self) {
        log::info!("=== Conversion Summary ===");
        log::info!("Total files processed: {}", self.files_processed);
        log::info!("Label files written: {}", self.files_converted);
        log::info!("Empty label files removed: {}", self.empty_outputs_removed);
        if self.files_failed > 0 {
            log::warn!("Failed conversions: {}", self.files_failed);
        }
        let total_skipped = self.unknown_label_skips + self.unsupported_shape_skips;
        if total_skipped > 0 {
            log::warn!(
                "Total skipped shapes: {} (unknown label: {}, unsupported shape type: {})",
                total_skipped,
                self.unknown_label_skips,
                self.unsupported_shape_skips
            );
        }
    }
}
