use crate::error::PackError;

use super::Rect;

/// A fixed-size square container.
///
/// Tracks occupied area only; rectangles are kept in placement order but get
/// no coordinates. `can_fit` compares areas, which is necessary but not
/// sufficient for a geometric fit.
#[derive(Debug)]
pub struct Bin {
    side: u32,
    capacity: u64,
    occupied: u64,
    rects: Vec<Rect>,
}

impl Bin {
    /// Create an empty bin. The side length must be positive.
    pub fn new(side: u32) -> Result<Self, PackError> {
        if side == 0 {
            return Err(PackError::InvalidBinSide);
        }

        Ok(Self {
            side,
            capacity: u64::from(side) * u64::from(side),
            occupied: 0,
            rects: Vec::new(),
        })
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    /// Total area, `side * side`.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn occupied_area(&self) -> u64 {
        self.occupied
    }

    pub fn free_area(&self) -> u64 {
        self.capacity - self.occupied
    }

    /// True iff the rectangle's area fits in the remaining capacity.
    pub fn can_fit(&self, rect: &Rect) -> bool {
        self.occupied + rect.area() <= self.capacity
    }

    /// Append a rectangle.
    ///
    /// The caller must have checked `can_fit` first; adding a rectangle that
    /// does not fit is a contract violation, asserted in debug builds.
    pub fn add(&mut self, rect: Rect) {
        debug_assert!(self.can_fit(&rect), "bin overfull: caller skipped can_fit");
        self.occupied += rect.area();
        self.rects.push(rect);
    }

    /// Remove the rectangle with the given id, returning it.
    ///
    /// An unknown id is a no-op returning `None`.
    pub fn remove(&mut self, id: u64) -> Option<Rect> {
        let pos = self.rects.iter().position(|r| r.id() == id)?;
        let rect = self.rects.remove(pos);
        self.occupied -= rect.area();
        Some(rect)
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Contained rectangles in placement order.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }
}
