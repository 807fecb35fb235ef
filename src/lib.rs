pub mod cli;
pub mod error;
pub mod instance;
pub mod output;
pub mod packing;
pub mod solver;

pub use cli::{CliArgs, Command, CommonArgs, RectOrdering};
pub use error::PackError;
pub use instance::{GeneratorParams, PackingInstance};
pub use packing::{Bin, DimensionBounds, Rect, RectFactory};
pub use solver::{PackingSolution, Solver};
