use std::path::Path;

use serde::Deserialize;

use crate::error::PackError;
use crate::packing::{DimensionBounds, Rect, RectFactory};

/// On-disk instance description.
///
/// ```json
/// {
///   "bin_side": 10,
///   "bounds": { "min_width": 1, "max_width": 5, "min_height": 2, "max_height": 7 },
///   "rects": [ { "width": 3, "height": 4 } ]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct InstanceFile {
    pub bin_side: u32,
    pub bounds: BoundsSection,
    pub rects: Vec<RectEntry>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BoundsSection {
    pub min_width: u32,
    pub max_width: u32,
    pub min_height: u32,
    pub max_height: u32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RectEntry {
    pub width: u32,
    pub height: u32,
}

/// A validated problem instance ready for the solver.
#[derive(Debug)]
pub struct PackingInstance {
    pub bin_side: u32,
    pub bounds: DimensionBounds,
    pub rects: Vec<Rect>,
}

/// Load and validate an instance file.
pub fn load_instance(path: &Path) -> Result<PackingInstance, PackError> {
    let content = std::fs::read_to_string(path).map_err(|e| PackError::InstanceRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let file: InstanceFile =
        serde_json::from_str(&content).map_err(|e| PackError::InstanceParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    instance_from_file(&file)
}

/// Validate a parsed instance description.
pub fn instance_from_file(file: &InstanceFile) -> Result<PackingInstance, PackError> {
    let bounds = DimensionBounds::new(
        file.bounds.min_width,
        file.bounds.min_height,
        file.bounds.max_width,
        file.bounds.max_height,
    )?;
    let mut factory = RectFactory::with_bounds(bounds);

    let mut rects = Vec::with_capacity(file.rects.len());
    for entry in &file.rects {
        rects.push(factory.create(entry.width, entry.height)?);
    }

    Ok(PackingInstance {
        bin_side: file.bin_side,
        bounds,
        rects,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "bin_side": 10,
        "bounds": { "min_width": 1, "max_width": 5, "min_height": 2, "max_height": 7 },
        "rects": [
            { "width": 3, "height": 4 },
            { "width": 2, "height": 3 },
            { "width": 4, "height": 5 },
            { "width": 1, "height": 2 }
        ]
    }"#;

    #[test]
    fn test_parses_and_validates_sample() {
        let file: InstanceFile = serde_json::from_str(SAMPLE).expect("parses");
        let instance = instance_from_file(&file).expect("validates");

        assert_eq!(instance.bin_side, 10);
        assert_eq!(instance.rects.len(), 4);
        assert_eq!(instance.rects[0].area(), 12);
        assert_eq!(instance.bounds.max_width(), 5);
    }

    #[test]
    fn test_rejects_rect_outside_bounds() {
        let raw = r#"{
            "bin_side": 10,
            "bounds": { "min_width": 1, "max_width": 5, "min_height": 2, "max_height": 7 },
            "rects": [ { "width": 6, "height": 4 } ]
        }"#;

        let file: InstanceFile = serde_json::from_str(raw).expect("parses");
        assert!(matches!(
            instance_from_file(&file),
            Err(PackError::DimensionOutOfRange { value: 6, .. })
        ));
    }

    #[test]
    fn test_rejects_invalid_bounds_section() {
        let raw = r#"{
            "bin_side": 10,
            "bounds": { "min_width": 5, "max_width": 5, "min_height": 2, "max_height": 7 },
            "rects": []
        }"#;

        let file: InstanceFile = serde_json::from_str(raw).expect("parses");
        assert!(matches!(
            instance_from_file(&file),
            Err(PackError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let missing = Path::new("no-such-instance.json");
        assert!(matches!(
            load_instance(missing),
            Err(PackError::InstanceRead { .. })
        ));
    }
}
