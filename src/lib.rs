mod base;
mod cli;
mod reflect;

pub mod logging;

pub use base::*;
pub use cli::run;
pub use cli::Config;
pub use reflect::*;
