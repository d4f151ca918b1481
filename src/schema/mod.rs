pub mod attribute;
pub mod definition;
pub mod registry;

pub use attribute::*;
pub use definition::*;
pub use registry::*;
