use std::path::PathBuf;
use thiserror::Error;

/// Which rectangle dimension a bounds check refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Width => write!(f, "width"),
            Axis::Height => write!(f, "height"),
        }
    }
}

#[derive(Error, Debug)]
pub enum PackError {
    #[error("dimension bounds must be initialized before creating rectangles")]
    BoundsNotInitialized,

    #[error("dimension bounds are already initialized")]
    BoundsAlreadyInitialized,

    #[error("invalid {axis} bounds: min {min} must be positive and below max {max}")]
    InvalidBounds { axis: Axis, min: u32, max: u32 },

    #[error("{axis} {value} is outside the allowed range [{min}, {max}]")]
    DimensionOutOfRange {
        axis: Axis,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("bin side length must be positive")]
    InvalidBinSide,

    #[error("rectangle {id} ({width}x{height}) exceeds bin capacity ({side}x{side})")]
    RectTooLarge {
        id: u64,
        width: u32,
        height: u32,
        side: u32,
    },

    #[error("instance contains no rectangles")]
    EmptyInstance,

    #[error("failed to read instance file '{path}': {source}")]
    InstanceRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse instance file '{path}': {source}")]
    InstanceParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write report file '{path}': {source}")]
    ReportWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
