// Adapters layer: concrete menu sources behind the `MenuSource` port.

pub mod builtin;
pub mod file;

pub use builtin::BuiltinMenu;
pub use file::{FileMenuSource, MenuFormat};

use crate::domain::ports::MenuSource;
use crate::utils::error::Result;

/// File source when a path is given, the built-in menu otherwise.
pub fn source_for(path: Option<&str>) -> Result<Box<dyn MenuSource>> {
    match path {
        Some(path) => Ok(Box::new(FileMenuSource::from_path(path)?)),
        None => Ok(Box::new(BuiltinMenu)),
    }
}
