mod generate;
mod loader;

pub use generate::{GeneratorParams, generate};
pub use loader::{
    BoundsSection, InstanceFile, PackingInstance, RectEntry, instance_from_file, load_instance,
};
