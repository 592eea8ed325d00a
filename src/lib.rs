pub mod compose;
pub mod core;
pub mod dist;
pub mod grid;

use std::fmt;

#[derive(Debug)]
pub struct GaussError;

impl fmt::Display for GaussError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GaussError")
    }
}

impl std::error::Error for GaussError {}

pub type Result<T> = std::result::Result<T, error_stack::Report<GaussError>>;

pub mod prelude {
    pub use crate::compose::*;
    pub use crate::core::*;
    pub use crate::dist::*;
    pub use crate::grid::*;
}
