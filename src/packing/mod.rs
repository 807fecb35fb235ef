mod bin;
mod bounds;
pub mod first_fit;
pub mod local_search;
mod rect;

pub use bin::Bin;
pub use bounds::{DimensionBounds, RectFactory};
pub use rect::Rect;
