use thiserror::Error;

/// Errors that abort the conversion of a single annotation file.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("image dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: f64, height: f64 },

    #[error("{shape_type} shape has {actual} point(s), at least {expected} required")]
    NotEnoughPoints {
        shape_type: &'static str,
        expected: usize,
        actual: usize,
    },
}
