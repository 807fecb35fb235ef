mod builder;
mod types;

pub use builder::Solver;
pub use types::PackingSolution;
