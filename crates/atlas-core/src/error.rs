// File: crates/atlas-core/src/error.rs
// Summary: Error type shared by loading, drawing and encoding.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtlasError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("GeoJSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("scene file error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("column '{0}' not found")]
    MissingColumn(String),

    #[error("no usable rows: {0}")]
    EmptyData(String),

    #[error("invalid tick setting: {0}")]
    InvalidTicks(String),

    #[error("unknown color '{0}'")]
    UnknownColor(String),

    #[error("invalid viewport size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("failed to create raster surface")]
    Surface,

    #[error("encode {0} failed")]
    Encode(&'static str),
}

pub type Result<T> = std::result::Result<T, AtlasError>;
