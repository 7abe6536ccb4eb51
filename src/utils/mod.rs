// src/utils/mod.rs
mod format;
mod input;
mod io;

pub use format::*;
pub use input::*;
pub use io::*;
