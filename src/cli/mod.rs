mod args;

pub use args::{CliArgs, Command, CommonArgs, PackArgs, RandomArgs, RectOrdering};
