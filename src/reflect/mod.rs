mod animals;
mod info;
mod registry;

pub use info::*;
pub use registry::*;

/// Types with a static description of their declared members
pub trait Reflect {
    fn class_info() -> &'static ClassInfo;
}
