//! Configuration for dockscout - global config file handling

mod error;
mod global;

pub use error::*;
pub use global::*;
