use crate::error::{Axis, PackError};

use super::DimensionBounds;

/// A rectangle to be packed.
///
/// Dimensions are validated against the bounds carried over from the factory
/// that created it, and `area` is recomputed with every successful mutation.
/// Two rectangles with equal dimensions are still distinct entities, so
/// equality compares ids only.
#[derive(Debug, Clone)]
pub struct Rect {
    id: u64,
    width: u32,
    height: u32,
    area: u64,
    bounds: DimensionBounds,
}

impl Rect {
    pub(crate) fn new(id: u64, width: u32, height: u32, bounds: DimensionBounds) -> Self {
        Self {
            id,
            width,
            height,
            area: u64::from(width) * u64::from(height),
            bounds,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Derived area, always `width * height`.
    pub fn area(&self) -> u64 {
        self.area
    }

    /// The bounds this rectangle is validated against.
    pub fn bounds(&self) -> DimensionBounds {
        self.bounds
    }

    /// Change the width and recompute the area.
    ///
    /// On failure the rectangle is unchanged.
    pub fn set_width(&mut self, width: u32) -> Result<(), PackError> {
        self.bounds.check(Axis::Width, width)?;
        self.width = width;
        self.area = u64::from(self.width) * u64::from(self.height);
        Ok(())
    }

    /// Change the height and recompute the area.
    ///
    /// On failure the rectangle is unchanged.
    pub fn set_height(&mut self, height: u32) -> Result<(), PackError> {
        self.bounds.check(Axis::Height, height)?;
        self.height = height;
        self.area = u64::from(self.width) * u64::from(self.height);
        Ok(())
    }
}

impl PartialEq for Rect {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Rect {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packing::RectFactory;

    fn factory() -> RectFactory {
        let bounds = DimensionBounds::new(1, 1, 10, 10).expect("valid bounds");
        RectFactory::with_bounds(bounds)
    }

    #[test]
    fn test_area_is_derived() {
        let rect = factory().create(3, 4).expect("in range");
        assert_eq!(rect.area(), 12);
    }

    #[test]
    fn test_mutation_recomputes_area() {
        let mut rect = factory().create(3, 4).expect("in range");

        rect.set_width(5).expect("in range");
        assert_eq!(rect.width(), 5);
        assert_eq!(rect.area(), 20);

        rect.set_height(2).expect("in range");
        assert_eq!(rect.height(), 2);
        assert_eq!(rect.area(), 10);
    }

    #[test]
    fn test_failed_mutation_leaves_rect_unchanged() {
        let mut rect = factory().create(3, 4).expect("in range");

        assert!(rect.set_width(11).is_err());
        assert_eq!(rect.width(), 3);
        assert_eq!(rect.area(), 12);

        assert!(rect.set_height(0).is_err());
        assert_eq!(rect.height(), 4);
        assert_eq!(rect.area(), 12);
    }

    #[test]
    fn test_equality_is_by_identity() {
        let mut factory = factory();
        let a = factory.create(3, 4).expect("in range");
        let b = factory.create(3, 4).expect("in range");

        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
