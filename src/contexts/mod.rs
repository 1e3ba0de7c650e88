// Context modules for router access and navigation errors
pub mod error;
pub mod navigation;

pub use error::*;
pub use navigation::*;
