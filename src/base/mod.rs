mod animal;
mod cat;
mod dog;
mod er;
mod species;

pub use animal::*;
pub use cat::*;
pub use dog::*;
pub use er::*;
pub use species::*;
