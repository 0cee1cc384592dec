mod container;
mod error;

pub use container::*;
pub use error::*;
