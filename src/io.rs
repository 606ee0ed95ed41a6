use glob::glob;
use log::{error, info};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::conversion::convert_annotation;
use crate::error::ConvertError;
use crate::registry::LabelRegistry;
use crate::types::{ConversionStats, ImageAnnotation};
use crate::utils::create_progress_bar;

/// Read and parse a single LabelMe JSON file into an ImageAnnotation struct.
pub fn read_and_parse_json(path: &Path) -> Result<ImageAnnotation, ConvertError> {
    let file = File::open(path)?;
    let annotation = serde_json::from_reader(file)?;
    Ok(annotation)
}

/// Convert one annotation file into a YOLO label file inside `output_dir`.
///
/// The label lines are fully built before the output file is created, so a
/// fatal error while processing a shape never leaves partial output behind.
/// A label file that ends up with zero lines is removed again; the returned
/// path is `None` in that case.
pub fn convert_file(
    json_path: &Path,
    output_dir: &Path,
    registry: &LabelRegistry,
    stats: &mut ConversionStats,
) -> Result<Option<PathBuf>, ConvertError> {
    let annotation = read_and_parse_json(json_path)?;
    let yolo_data = convert_annotation(json_path, &annotation, registry, stats)?;

    let sanitized_name = sanitize_filename::sanitize(
        json_path
            .file_stem()
            .map(|stem| stem.to_string_lossy())
            .unwrap_or_default(),
    );
    let output_path = output_dir.join(format!("{}.txt", sanitized_name));

    // Scope the writer so the handle is flushed and closed before the
    // emptiness check below.
    {
        let mut writer = BufWriter::new(File::create(&output_path)?);
        writer.write_all(yolo_data.as_bytes())?;
        writer.flush()?;
    }

    if yolo_data.is_empty() {
        fs::remove_file(&output_path)?;
        info!("Removed empty label file {}", output_path.display());
        stats.empty_outputs_removed += 1;
        return Ok(None);
    }

    Ok(Some(output_path))
}

/// Convert every `.json` file directly inside `input_dir` (non-recursive),
/// writing YOLO label files into `output_dir`.
///
/// The output directory is created if absent, keeping any existing contents.
/// Files are visited sequentially in the alphabetical order the glob yields.
/// A file that fails to convert is logged and counted in the returned stats
/// without stopping the batch.
pub fn convert_directory(
    input_dir: &Path,
    output_dir: &Path,
    registry: &LabelRegistry,
) -> Result<ConversionStats, ConvertError> {
    fs::create_dir_all(output_dir)?;

    let pattern = format!("{}/*.json", input_dir.display());
    let json_entries: Vec<PathBuf> = glob(&pattern)?.filter_map(|entry| entry.ok()).collect();

    let mut stats = ConversionStats::new();
    let pb = create_progress_bar(json_entries.len() as u64, "Convert");

    for json_path in &json_entries {
        stats.files_processed += 1;
        match convert_file(json_path, output_dir, registry, &mut stats) {
            Ok(Some(_)) => stats.files_converted += 1,
            Ok(None) => {}
            Err(e) => {
                error!("Failed to convert {}: {}", json_path.display(), e);
                stats.files_failed += 1;
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Conversion complete");
    Ok(stats)
}
